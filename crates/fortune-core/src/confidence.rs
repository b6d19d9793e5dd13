//! Confidence-level heuristic.
//!
//! Starts at a base of 70, adds a mood-dependent random swing, adds a small
//! bonus for wide lucky-number ranges, then clamps to 50-95.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::category::Mood;

/// Starting confidence before any adjustment.
pub const BASE_CONFIDENCE: i32 = 70;

/// Lowest reportable confidence.
pub const MIN_CONFIDENCE: u32 = 50;

/// Highest reportable confidence.
pub const MAX_CONFIDENCE: u32 = 95;

/// Ranges strictly above this earn the wide-range bonus.
pub const WIDE_RANGE_THRESHOLD: u32 = 50;

const WIDE_RANGE_BONUS: RangeInclusive<i32> = 0..=10;

/// The random adjustment a mood contributes, if any.
pub fn mood_adjustment(mood: &Mood) -> Option<RangeInclusive<i32>> {
    match mood {
        Mood::Happy | Mood::Excited | Mood::Adventurous => Some(10..=20),
        Mood::Calm => Some(5..=15),
        Mood::Sad | Mood::Anxious => Some(-10..=10),
        Mood::Other(_) => None,
    }
}

/// Score a fortune's confidence level.
pub fn confidence_level<R: Rng>(mood: &Mood, lucky_number_range: u32, rng: &mut R) -> u32 {
    let mut confidence = BASE_CONFIDENCE;

    if let Some(swing) = mood_adjustment(mood) {
        confidence += rng.random_range(swing);
    }

    if lucky_number_range > WIDE_RANGE_THRESHOLD {
        confidence += rng.random_range(WIDE_RANGE_BONUS);
    }

    clamp_confidence(confidence)
}

/// Clamp a raw score into `MIN_CONFIDENCE..=MAX_CONFIDENCE`.
fn clamp_confidence(raw: i32) -> u32 {
    u32::try_from(raw).map_or(MIN_CONFIDENCE, |c| c.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unknown_mood_narrow_range_is_base() {
        let mut rng = StdRng::seed_from_u64(42);
        let mood = Mood::Other("Bored".to_string());
        for _ in 0..50 {
            assert_eq!(confidence_level(&mood, 10, &mut rng), 70);
        }
    }

    #[test]
    fn upbeat_moods_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for mood in [Mood::Happy, Mood::Excited, Mood::Adventurous] {
            for _ in 0..200 {
                let c = confidence_level(&mood, 50, &mut rng);
                assert!((80..=90).contains(&c), "{mood}: {c}");
            }
        }
    }

    #[test]
    fn calm_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let c = confidence_level(&Mood::Calm, 1, &mut rng);
            assert!((75..=85).contains(&c), "{c}");
        }
    }

    #[test]
    fn low_moods_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for mood in [Mood::Sad, Mood::Anxious] {
            for _ in 0..200 {
                let c = confidence_level(&mood, 50, &mut rng);
                assert!((60..=80).contains(&c), "{mood}: {c}");
            }
        }
    }

    #[test]
    fn wide_range_clamps_at_max() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut saw_clamp = false;
        for _ in 0..500 {
            let c = confidence_level(&Mood::Happy, 100, &mut rng);
            assert!((80..=MAX_CONFIDENCE).contains(&c), "{c}");
            saw_clamp |= c == MAX_CONFIDENCE;
        }
        assert!(saw_clamp);
    }

    #[test]
    fn clamp_handles_out_of_band_scores() {
        assert_eq!(clamp_confidence(-30), MIN_CONFIDENCE);
        assert_eq!(clamp_confidence(0), MIN_CONFIDENCE);
        assert_eq!(clamp_confidence(72), 72);
        assert_eq!(clamp_confidence(i32::MAX), MAX_CONFIDENCE);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut rng = StdRng::seed_from_u64(1);
        let mood = Mood::Other(String::new());
        for _ in 0..50 {
            assert_eq!(confidence_level(&mood, WIDE_RANGE_THRESHOLD, &mut rng), 70);
        }
        let mut seen_bonus = false;
        for _ in 0..200 {
            let c = confidence_level(&mood, WIDE_RANGE_THRESHOLD + 1, &mut rng);
            assert!((70..=80).contains(&c));
            seen_bonus |= c > 70;
        }
        assert!(seen_bonus);
    }
}
