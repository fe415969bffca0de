use crate::store::schema::ProgressData;

/// Sentence accuracy required to keep a streak alive.
pub const STREAK_ACCURACY_MIN: u32 = 90;

/// Streak milestones and their banner messages. Each fires when the streak
/// lands exactly on the threshold, so a reset-and-regrown streak fires the
/// lower milestones again.
pub const STREAK_ACHIEVEMENTS: &[(u32, &str)] = &[
    (5, "🔥 5 Sentence Streak!"),
    (10, "💪 10 Sentence Streak!"),
    (25, "🏆 25 Sentence Streak - You're on fire!"),
    (50, "🎯 50 Sentence Streak - Master Typist!"),
    (100, "👑 100 Sentence Streak - Legendary!"),
];

/// Progression across the whole run: survives sentences and, through the
/// store snapshot, process restarts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressState {
    pub level: u32,
    pub streak: u32,
    pub correct_chars_this_level: usize,
    pub total_chars_typed: usize,
    pub total_errors: usize,
}

/// What a single committed sentence changed, for event emission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentenceOutcome {
    pub achievement: Option<&'static str>,
    pub new_level: Option<u32>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            level: 1,
            streak: 0,
            correct_chars_this_level: 0,
            total_chars_typed: 0,
            total_errors: 0,
        }
    }
}

impl ProgressState {
    pub fn from_data(data: ProgressData) -> Self {
        Self {
            level: data.level.max(1),
            streak: data.streak,
            correct_chars_this_level: data.correct_chars_this_level,
            total_chars_typed: data.total_chars_typed,
            total_errors: data.total_errors,
        }
    }

    pub fn to_data(&self) -> ProgressData {
        ProgressData {
            level: self.level,
            streak: self.streak,
            correct_chars_this_level: self.correct_chars_this_level,
            total_chars_typed: self.total_chars_typed,
            total_errors: self.total_errors,
        }
    }

    /// Characters typed correctly across the whole run.
    pub fn total_correct(&self) -> usize {
        self.total_chars_typed.saturating_sub(self.total_errors)
    }

    /// Characters still needed before the next level.
    pub fn chars_to_next_level(&self, level_threshold: u32) -> usize {
        let needed = self.level as usize * level_threshold as usize;
        needed.saturating_sub(self.correct_chars_this_level)
    }

    /// Commit a completed sentence: cumulative counters, streak, and the
    /// level-up check. Level-up consumes the whole counter (no remainder
    /// carries into the next level).
    pub fn record_sentence(
        &mut self,
        typed: usize,
        errors: usize,
        accuracy_pct: u32,
        level_threshold: u32,
    ) -> SentenceOutcome {
        let correct = typed.saturating_sub(errors);
        self.total_chars_typed += typed;
        self.total_errors += errors;
        self.correct_chars_this_level += correct;

        let achievement = if accuracy_pct >= STREAK_ACCURACY_MIN {
            self.streak += 1;
            STREAK_ACHIEVEMENTS
                .iter()
                .find(|(threshold, _)| *threshold == self.streak)
                .map(|&(_, message)| message)
        } else {
            self.streak = 0;
            None
        };

        let needed = self.level as usize * level_threshold as usize;
        let new_level = if self.correct_chars_this_level >= needed {
            self.level += 1;
            self.correct_chars_this_level = 0;
            Some(self.level)
        } else {
            None
        };

        SentenceOutcome {
            achievement,
            new_level,
        }
    }

    /// Abandoning a sentence breaks the streak; nothing else is committed.
    pub fn abandon_sentence(&mut self) {
        self.streak = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_clean(progress: &mut ProgressState, chars: usize, threshold: u32) -> SentenceOutcome {
        progress.record_sentence(chars, 0, 100, threshold)
    }

    #[test]
    fn test_streak_grows_at_ninety_percent() {
        let mut progress = ProgressState::default();
        progress.record_sentence(10, 1, 90, 100);
        assert_eq!(progress.streak, 1);
        progress.record_sentence(10, 0, 100, 100);
        assert_eq!(progress.streak, 2);
    }

    #[test]
    fn test_streak_breaks_below_ninety() {
        let mut progress = ProgressState::default();
        progress.streak = 4;
        progress.record_sentence(10, 2, 80, 100);
        assert_eq!(progress.streak, 0);
    }

    #[test]
    fn test_achievement_fires_exactly_on_threshold() {
        let mut progress = ProgressState::default();
        for expected in 1..=6u32 {
            let outcome = commit_clean(&mut progress, 5, 1000);
            assert_eq!(progress.streak, expected);
            if expected == 5 {
                assert_eq!(outcome.achievement, Some("🔥 5 Sentence Streak!"));
            } else {
                assert_eq!(outcome.achievement, None);
            }
        }
    }

    #[test]
    fn test_achievement_refires_after_streak_reset() {
        let mut progress = ProgressState::default();
        for _ in 0..5 {
            commit_clean(&mut progress, 5, 1000);
        }
        progress.record_sentence(10, 9, 10, 1000);
        assert_eq!(progress.streak, 0);

        let mut refired = None;
        for _ in 0..5 {
            let outcome = commit_clean(&mut progress, 5, 1000);
            if outcome.achievement.is_some() {
                refired = outcome.achievement;
            }
        }
        assert_eq!(refired, Some("🔥 5 Sentence Streak!"));
    }

    #[test]
    fn test_tampered_streak_does_not_refire_lower_thresholds() {
        let mut progress = ProgressState::default();
        progress.streak = 7; // already past the 5-streak milestone
        let outcome = commit_clean(&mut progress, 5, 1000);
        assert_eq!(progress.streak, 8);
        assert_eq!(outcome.achievement, None);
    }

    #[test]
    fn test_level_up_consumes_counter() {
        let mut progress = ProgressState::default();
        let outcome = commit_clean(&mut progress, 100, 100);
        assert_eq!(outcome.new_level, Some(2));
        assert_eq!(progress.level, 2);
        assert_eq!(progress.correct_chars_this_level, 0);
        assert_eq!(progress.streak, 1);
    }

    #[test]
    fn test_level_up_increments_exactly_once() {
        let mut progress = ProgressState::default();
        // 350 correct chars would cover thresholds 100 and 200, but one
        // commit moves the level by at most one
        let outcome = commit_clean(&mut progress, 350, 100);
        assert_eq!(outcome.new_level, Some(2));
        assert_eq!(progress.level, 2);
    }

    #[test]
    fn test_threshold_scales_with_level() {
        let mut progress = ProgressState::default();
        commit_clean(&mut progress, 100, 100);
        assert_eq!(progress.level, 2);

        // Level 2 needs 200 correct chars
        commit_clean(&mut progress, 150, 100);
        assert_eq!(progress.level, 2);
        let outcome = commit_clean(&mut progress, 50, 100);
        assert_eq!(outcome.new_level, Some(3));
    }

    #[test]
    fn test_errors_do_not_count_toward_level() {
        let mut progress = ProgressState::default();
        progress.record_sentence(100, 10, 90, 100);
        assert_eq!(progress.level, 1);
        assert_eq!(progress.correct_chars_this_level, 90);
        assert_eq!(progress.total_chars_typed, 100);
        assert_eq!(progress.total_errors, 10);
    }

    #[test]
    fn test_invariant_counter_below_threshold_after_commit() {
        let mut progress = ProgressState::default();
        for chars in [30, 80, 250, 40, 90, 500] {
            progress.record_sentence(chars, 0, 100, 100);
            assert!(
                progress.correct_chars_this_level
                    < progress.level as usize * 100,
                "counter {} at level {}",
                progress.correct_chars_this_level,
                progress.level
            );
        }
    }

    #[test]
    fn test_abandon_breaks_streak_without_commit() {
        let mut progress = ProgressState::default();
        commit_clean(&mut progress, 10, 100);
        let totals = (progress.total_chars_typed, progress.total_errors);
        progress.abandon_sentence();
        assert_eq!(progress.streak, 0);
        assert_eq!((progress.total_chars_typed, progress.total_errors), totals);
    }

    #[test]
    fn test_reset() {
        let mut progress = ProgressState {
            level: 5,
            streak: 12,
            correct_chars_this_level: 80,
            total_chars_typed: 4000,
            total_errors: 120,
        };
        progress.reset();
        assert_eq!(progress, ProgressState::default());
    }

    #[test]
    fn test_chars_to_next_level() {
        let mut progress = ProgressState::default();
        assert_eq!(progress.chars_to_next_level(100), 100);
        progress.record_sentence(40, 0, 100, 100);
        assert_eq!(progress.chars_to_next_level(100), 60);
    }
}
