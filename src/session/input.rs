use icu_normalizer::ComposingNormalizer;

/// Per-position classification of the target text against the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharStatus {
    Correct,
    Incorrect,
    Pending,
}

/// NFC-normalize typed text before comparison. Arabic input methods may
/// emit decomposed alef/hamza sequences for the precomposed forms the
/// generator produces.
pub fn normalize(input: &str) -> String {
    ComposingNormalizer::new_nfc().normalize(input).to_string()
}

/// Classify every target position: `Correct`/`Incorrect` for typed
/// positions, `Pending` beyond the input. Input beyond the target is
/// ignored.
pub fn classify(target: &[char], input: &[char]) -> Vec<CharStatus> {
    target
        .iter()
        .enumerate()
        .map(|(i, &expected)| match input.get(i) {
            Some(&actual) if actual == expected => CharStatus::Correct,
            Some(_) => CharStatus::Incorrect,
            None => CharStatus::Pending,
        })
        .collect()
}

/// Mismatches within the clamped comparison range
/// `0..min(input.len(), target.len())`.
pub fn count_errors(target: &[char], input: &[char]) -> usize {
    target
        .iter()
        .zip(input.iter())
        .filter(|(expected, actual)| expected != actual)
        .count()
}
