use rand::Rng;
use rand::rngs::SmallRng;

const WORDS_AR: &str = include_str!("../../assets/words-ar.json");

/// Bank of common whole words used verbatim in generated sentences, so
/// learners see real vocabulary between the synthesized letter drills.
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    pub fn load() -> Self {
        let words: Vec<String> = serde_json::from_str(WORDS_AR).unwrap_or_default();

        // Keep only non-empty entries written entirely in Arabic script
        let words = words
            .into_iter()
            .filter(|w| !w.is_empty() && w.chars().all(is_arabic))
            .collect();

        Self { words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn words_list(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn pick(&self, rng: &mut SmallRng) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.words.len());
        Some(&self.words[idx])
    }
}

fn is_arabic(ch: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&ch)
}
