use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::metrics;
use crate::engine::progress::ProgressState;
use crate::session::typing::TypingSession;

/// Snapshot handed to the collaborator when a sentence completes. Totals
/// are cumulative for the run, including the sentence just committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub accuracy_pct: u32,
    pub gross_wpm: u32,
    pub net_wpm: u32,
    pub elapsed_secs: f64,
    pub total_chars: usize,
    pub total_errors: usize,
    pub completed_at: DateTime<Utc>,
}

impl SessionSummary {
    pub fn from_session(
        session: &TypingSession,
        progress: &ProgressState,
        accuracy_pct: u32,
    ) -> Self {
        let elapsed = session.elapsed_secs();
        Self {
            accuracy_pct,
            gross_wpm: metrics::wpm(session.typed_len(), elapsed),
            net_wpm: metrics::wpm(session.correct_count(), elapsed),
            elapsed_secs: elapsed,
            total_chars: progress.total_chars_typed,
            total_errors: progress.total_errors,
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::metrics::MetricsPolicy;

    #[test]
    fn test_summary_reflects_cumulative_totals() {
        let mut session = TypingSession::new("ابت");
        session.on_input_changed("ابج", &MetricsPolicy::default(), &ProgressState::default());

        let mut progress = ProgressState::default();
        let accuracy = session.sentence_accuracy();
        progress.record_sentence(session.typed_len(), session.error_count(), accuracy, 100);

        let summary = SessionSummary::from_session(&session, &progress, accuracy);
        assert_eq!(summary.accuracy_pct, 67);
        assert_eq!(summary.total_chars, 3);
        assert_eq!(summary.total_errors, 1);
        // Finished instantly in the test, so both speeds collapse together
        assert!(summary.net_wpm <= summary.gross_wpm);
    }

    #[test]
    fn test_summary_serializes() {
        let session = TypingSession::new("اب");
        let summary = SessionSummary::from_session(&session, &ProgressState::default(), 100);
        let json = serde_json::to_string(&summary).unwrap();
        let back: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
