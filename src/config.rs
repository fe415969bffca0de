use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::engine::metrics::{AccuracyMode, MetricsPolicy, WpmMode};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Correct characters needed per level is `level * level_threshold`.
    #[serde(default = "default_level_threshold")]
    pub level_threshold: u32,
    #[serde(default = "default_words_per_sentence")]
    pub words_per_sentence: [usize; 2],
    #[serde(default = "default_word_length")]
    pub word_length: [usize; 2],
    /// Chance that a word slot is filled from the whole-word bank instead
    /// of synthesized letters.
    #[serde(default = "default_pattern_probability")]
    pub pattern_probability: f64,
    #[serde(default)]
    pub accuracy_mode: AccuracyMode,
    #[serde(default)]
    pub wpm_mode: WpmMode,
}

fn default_level_threshold() -> u32 {
    100
}
fn default_words_per_sentence() -> [usize; 2] {
    [10, 17]
}
fn default_word_length() -> [usize; 2] {
    [2, 5]
}
fn default_pattern_probability() -> f64 {
    0.3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level_threshold: default_level_threshold(),
            words_per_sentence: default_words_per_sentence(),
            word_length: default_word_length(),
            pattern_probability: default_pattern_probability(),
            accuracy_mode: AccuracyMode::default(),
            wpm_mode: WpmMode::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mashq")
            .join("config.toml")
    }

    /// Clamp degenerate values from hand-edited or stale config files.
    pub fn validate(&mut self) {
        if self.level_threshold == 0 {
            self.level_threshold = default_level_threshold();
        }
        self.words_per_sentence = clamp_range(self.words_per_sentence, 1);
        self.word_length = clamp_range(self.word_length, 1);
        if !(0.0..=1.0).contains(&self.pattern_probability) {
            self.pattern_probability = default_pattern_probability();
        }
    }

    pub fn metrics_policy(&self) -> MetricsPolicy {
        MetricsPolicy {
            accuracy: self.accuracy_mode,
            wpm: self.wpm_mode,
        }
    }
}

fn clamp_range(range: [usize; 2], floor: usize) -> [usize; 2] {
    let min = range[0].max(floor);
    let max = range[1].max(min);
    [min, max]
}
