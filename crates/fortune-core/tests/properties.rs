//! Property-based tests for fortune-core.

use fortune_core::tables::LUCKY_COLORS;
use fortune_core::{Category, FortuneConfig, FortuneEngine, FortuneRequest, Mood};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn mood() -> impl Strategy<Value = Mood> {
    prop_oneof![
        prop::sample::select(Mood::KNOWN.to_vec()),
        "[A-Za-z]{1,12}".prop_map(|s| Mood::parse(&s)),
    ]
}

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z .'-]{0,30}"
}

proptest! {
    #[test]
    fn generated_fortune_respects_invariants(
        seed in any::<u64>(),
        name in name(),
        category in category(),
        mood in mood(),
        range in 1u32..=1000,
    ) {
        let mut engine = FortuneEngine::new(FortuneConfig::default().with_seed(seed));
        let request = FortuneRequest::new(&name, category, mood.clone(), range).unwrap();
        let fortune = engine.generate(&request).unwrap();

        prop_assert_eq!(&fortune.user_name, &request.name);
        prop_assert_eq!(fortune.category, category);
        prop_assert_eq!(&fortune.mood, &mood);
        prop_assert!((1..=range).contains(&fortune.lucky_number));
        prop_assert!((50..=95).contains(&fortune.confidence_level));
        prop_assert!(!fortune.message.is_empty());
        prop_assert!(fortune.message.contains(&request.name));
        prop_assert!(LUCKY_COLORS.contains(&fortune.lucky_color.as_str()));
    }

    #[test]
    fn history_grows_by_one_per_call_newest_first(
        seed in any::<u64>(),
        count in 1usize..20,
    ) {
        let mut engine = FortuneEngine::new(FortuneConfig::default().with_seed(seed));
        for i in 0..count {
            let request =
                FortuneRequest::new(&format!("User{i}"), Category::General, Mood::Calm, 10)
                    .unwrap();
            engine.generate(&request).unwrap();
        }
        let history = engine.history();
        prop_assert_eq!(history.len(), count);
        for pair in history.windows(2) {
            prop_assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }
}
