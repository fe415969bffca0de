//! Difficulty-tiered Arabic letter pools.
//!
//! Letters are grouped by how early a learner meets them; higher levels
//! unlock the later tiers cumulatively.

pub const BASIC: &[char] = &[
    'ا', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش',
];

pub const INTERMEDIATE: &[char] = &[
    'ص', 'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن',
];

pub const ADVANCED: &[char] = &[
    'ه', 'و', 'ي', 'ء', 'ة', 'ى', 'آ', 'أ', 'إ', 'ؤ', 'ئ',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Basic,
    Intermediate,
    Advanced,
}

impl Tier {
    /// Highest tier unlocked at `level`.
    pub fn for_level(level: u32) -> Self {
        if level <= 3 {
            Tier::Basic
        } else if level <= 6 {
            Tier::Intermediate
        } else {
            Tier::Advanced
        }
    }

    pub fn letters(self) -> &'static [char] {
        match self {
            Tier::Basic => BASIC,
            Tier::Intermediate => INTERMEDIATE,
            Tier::Advanced => ADVANCED,
        }
    }
}

/// All letters available at `level`: the unlocked tier plus every tier
/// below it, in table order.
pub fn unlocked_letters(level: u32) -> Vec<char> {
    let mut pool = BASIC.to_vec();
    match Tier::for_level(level) {
        Tier::Basic => {}
        Tier::Intermediate => pool.extend_from_slice(INTERMEDIATE),
        Tier::Advanced => {
            pool.extend_from_slice(INTERMEDIATE);
            pool.extend_from_slice(ADVANCED);
        }
    }
    pool
}

pub fn is_unlocked(ch: char, level: u32) -> bool {
    unlocked_letters(level).contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_level(1), Tier::Basic);
        assert_eq!(Tier::for_level(3), Tier::Basic);
        assert_eq!(Tier::for_level(4), Tier::Intermediate);
        assert_eq!(Tier::for_level(6), Tier::Intermediate);
        assert_eq!(Tier::for_level(7), Tier::Advanced);
        assert_eq!(Tier::for_level(99), Tier::Advanced);
    }

    #[test]
    fn test_pool_grows_with_level() {
        assert_eq!(unlocked_letters(1).len(), BASIC.len());
        assert_eq!(unlocked_letters(4).len(), BASIC.len() + INTERMEDIATE.len());
        assert_eq!(
            unlocked_letters(7).len(),
            BASIC.len() + INTERMEDIATE.len() + ADVANCED.len()
        );
    }

    #[test]
    fn test_tiers_are_disjoint() {
        let mut seen = HashSet::new();
        for &ch in BASIC.iter().chain(INTERMEDIATE).chain(ADVANCED) {
            assert!(seen.insert(ch), "letter {ch} appears in two tiers");
        }
    }

    #[test]
    fn test_is_unlocked() {
        assert!(is_unlocked('ا', 1));
        assert!(!is_unlocked('ص', 1));
        assert!(is_unlocked('ص', 4));
        assert!(!is_unlocked('ة', 6));
        assert!(is_unlocked('ة', 7));
    }
}
