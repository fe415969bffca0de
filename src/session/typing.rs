use std::time::Instant;

use crate::engine::metrics::{self, AccuracyMode, MetricsPolicy, WpmMode};
use crate::engine::progress::ProgressState;
use crate::session::input::{self, CharStatus};

/// Lifecycle of one sentence attempt. `Completed` and `Abandoned` are
/// terminal; a new attempt means a new session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Completed,
    Abandoned,
}

/// What one input change produced: the full classification of the target,
/// the live metrics under the configured strategies, and whether this
/// particular change finished the sentence.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionDelta {
    pub classifications: Vec<CharStatus>,
    pub accuracy_pct: u32,
    pub wpm: u32,
    pub just_completed: bool,
}

/// One sentence attempt: the target, the latest input, and the derived
/// error state. Everything is recomputed from the full input string on
/// every change, so repeated identical updates are no-ops.
pub struct TypingSession {
    target: Vec<char>,
    typed: Vec<char>,
    errors: usize,
    phase: Phase,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl TypingSession {
    pub fn new(target: &str) -> Self {
        Self {
            target: input::normalize(target).chars().collect(),
            typed: Vec::new(),
            errors: 0,
            phase: Phase::Idle,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    /// Typed characters that participate in scoring; input beyond the
    /// target does not count.
    pub fn typed_len(&self) -> usize {
        self.typed.len().min(self.target.len())
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn correct_count(&self) -> usize {
        self.typed_len().saturating_sub(self.errors)
    }

    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start).as_secs_f64(),
            (Some(start), None) => start.elapsed().as_secs_f64(),
            _ => 0.0,
        }
    }

    /// Feed the full current input string. Transitions `Idle → Active` on
    /// the first character and `Active → Completed` once the typed length
    /// reaches the target length, whatever the characters were. Terminal
    /// phases ignore further changes.
    pub fn on_input_changed(
        &mut self,
        raw_input: &str,
        policy: &MetricsPolicy,
        progress: &ProgressState,
    ) -> SessionDelta {
        if matches!(self.phase, Phase::Completed | Phase::Abandoned) {
            return self.delta(policy, progress, false);
        }

        self.typed = input::normalize(raw_input).chars().collect();

        if self.phase == Phase::Idle && !self.typed.is_empty() {
            self.phase = Phase::Active;
            self.started_at = Some(Instant::now());
        }

        self.errors = input::count_errors(&self.target, &self.typed);

        let just_completed =
            self.phase == Phase::Active && self.typed.len() >= self.target.len();
        if just_completed {
            self.phase = Phase::Completed;
            self.finished_at = Some(Instant::now());
        }

        self.delta(policy, progress, just_completed)
    }

    /// Skip or reset before completion. Terminal; no characters commit.
    pub fn abandon(&mut self) {
        self.typed.clear();
        self.errors = 0;
        self.started_at = None;
        self.finished_at = None;
        self.phase = Phase::Abandoned;
    }

    /// Accuracy committed for this sentence, over the full target length.
    pub fn sentence_accuracy(&self) -> u32 {
        metrics::sentence_accuracy(self.target.len(), self.errors)
    }

    fn delta(
        &self,
        policy: &MetricsPolicy,
        progress: &ProgressState,
        just_completed: bool,
    ) -> SessionDelta {
        let typed = self.typed_len();
        let correct = self.correct_count();

        let accuracy_pct = match policy.accuracy {
            AccuracyMode::Sentence => metrics::accuracy_pct(correct, typed),
            AccuracyMode::Session => metrics::accuracy_pct(
                progress.total_correct() + correct,
                progress.total_chars_typed + typed,
            ),
        };

        let wpm_chars = match policy.wpm {
            WpmMode::Gross => typed,
            WpmMode::Net => correct,
        };

        SessionDelta {
            classifications: input::classify(&self.target, &self.typed),
            accuracy_pct,
            wpm: metrics::wpm(wpm_chars, self.elapsed_secs()),
            just_completed,
        }
    }
}
