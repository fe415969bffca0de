use serde::{Deserialize, Serialize};

/// Which accuracy the live metrics report. The source behavior exists in
/// two variants; both are kept as named strategies selected in config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyMode {
    /// Accuracy over the in-progress sentence only.
    #[default]
    Sentence,
    /// Accuracy over every character typed this run, committed sentences
    /// plus the in-progress one.
    Session,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WpmMode {
    /// All typed characters count toward speed.
    #[default]
    Gross,
    /// Only correctly typed characters count.
    Net,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsPolicy {
    pub accuracy: AccuracyMode,
    pub wpm: WpmMode,
}

/// Rounded percentage of correct characters; 100 when nothing was typed.
pub fn accuracy_pct(correct: usize, typed: usize) -> u32 {
    if typed == 0 {
        return 100;
    }
    (correct as f64 / typed as f64 * 100.0).round() as u32
}

/// Accuracy committed for a finished sentence, measured against the full
/// target length. A clean sentence is exactly 100.
pub fn sentence_accuracy(target_len: usize, errors: usize) -> u32 {
    if errors == 0 || target_len == 0 {
        return 100;
    }
    (target_len.saturating_sub(errors) as f64 / target_len as f64 * 100.0).round() as u32
}

/// Rounded words per minute at five characters per word; 0 before the
/// clock has started moving.
pub fn wpm(chars: usize, elapsed_secs: f64) -> u32 {
    if elapsed_secs <= 0.0 {
        return 0;
    }
    let words = chars as f64 / 5.0;
    (words / (elapsed_secs / 60.0)).round() as u32
}
