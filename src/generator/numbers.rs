use rand::Rng;
use rand::rngs::SmallRng;

/// Arabic-Indic digits in value order, ٠ through ٩.
pub const ARABIC_DIGITS: &[char] = &[
    '٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩',
];

const MIN_DIGITS: usize = 1;
const MAX_DIGITS: usize = 3;

/// A 1–3 digit Arabic-Indic number token, each digit drawn independently.
/// Not composed into sentences; offered as a standalone drill primitive.
pub fn number_token(rng: &mut SmallRng) -> String {
    let len = rng.gen_range(MIN_DIGITS..=MAX_DIGITS);
    (0..len)
        .map(|_| ARABIC_DIGITS[rng.gen_range(0..ARABIC_DIGITS.len())])
        .collect()
}
