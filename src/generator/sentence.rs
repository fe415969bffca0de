use rand::Rng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::generator::letters;
use crate::generator::numbers;
use crate::generator::patterns::WordBank;

/// Produces the target text for one sentence attempt.
///
/// Output depends only on the level, the configured shape, and the owned
/// RNG; seed the RNG with `SmallRng::seed_from_u64` for deterministic
/// sequences in tests.
pub struct SentenceGenerator {
    bank: WordBank,
    rng: SmallRng,
    words_per_sentence: [usize; 2],
    word_length: [usize; 2],
    pattern_probability: f64,
}

impl SentenceGenerator {
    pub fn new(bank: WordBank, rng: SmallRng) -> Self {
        Self::from_config(&Config::default(), bank, rng)
    }

    pub fn from_config(config: &Config, bank: WordBank, rng: SmallRng) -> Self {
        Self {
            bank,
            rng,
            words_per_sentence: config.words_per_sentence,
            word_length: config.word_length,
            pattern_probability: config.pattern_probability,
        }
    }

    /// Space-separated words, each either a verbatim bank draw or a
    /// synthesized run of letters from the pool unlocked at `level`.
    pub fn generate_sentence(&mut self, level: u32) -> String {
        let [min_words, max_words] = self.words_per_sentence;
        let word_count = self.rng.gen_range(min_words..=max_words);
        let pool = letters::unlocked_letters(level);

        let words: Vec<String> = (0..word_count).map(|_| self.generate_word(&pool)).collect();
        words.join(" ")
    }

    fn generate_word(&mut self, pool: &[char]) -> String {
        if !self.bank.is_empty() && self.rng.gen_bool(self.pattern_probability) {
            if let Some(word) = self.bank.pick(&mut self.rng) {
                return word.to_string();
            }
        }

        let [min_len, max_len] = self.word_length;
        let len = self.rng.gen_range(min_len..=max_len);
        (0..len)
            .map(|_| pool[self.rng.gen_range(0..pool.len())])
            .collect()
    }

    /// Standalone Arabic-Indic number token; see `generator::numbers`.
    pub fn number_token(&mut self) -> String {
        numbers::number_token(&mut self.rng)
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }
}
