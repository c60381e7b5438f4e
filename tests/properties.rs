use hebrew_lingua::analysis::morphology::consonant_skeleton;
use hebrew_lingua::analysis::NikudLevel;
use hebrew_lingua::core::script;
use hebrew_lingua::{ActivityParams, AgeGroup, GeneratedContent, HebrewEngine, SoundPosition};
use proptest::prelude::*;

fn hebrew_word() -> impl Strategy<Value = String> {
    "[\u{05D0}-\u{05EA}]{1,8}"
}

fn pointed_text() -> impl Strategy<Value = String> {
    "[\u{05D0}-\u{05EA}\u{05B0}-\u{05BC} ]{0,24}"
}

proptest! {
    #[test]
    fn full_pointing_then_stripping_returns_the_skeleton(word in hebrew_word()) {
        let engine = HebrewEngine::standard();
        let pointed = engine.nikud.assign_word(&word, NikudLevel::Full, false);
        let stripped = script::remove_nikud(&pointed);
        prop_assert_eq!(&stripped, &word);
        prop_assert_eq!(script::remove_nikud(&stripped), stripped.clone());
    }

    #[test]
    fn coverage_is_never_negative(text in pointed_text()) {
        let engine = HebrewEngine::standard();
        let stats = engine.nikud.statistics(&text);
        prop_assert!(stats.coverage >= 0.0);
        if stats.nikud_marks == 0 {
            prop_assert_eq!(stats.coverage, 0.0);
        }
    }

    #[test]
    fn root_letters_prefix_the_stem(word in hebrew_word()) {
        let engine = HebrewEngine::standard();
        if let Some(analysis) = engine.morphology.analyze(&word) {
            if let Some(root) = &analysis.root {
                let stem: Vec<char> = analysis.stem.chars().collect();
                let skeleton = consonant_skeleton(&analysis.stem);
                prop_assert!(stem.starts_with(&root.letters) || skeleton.starts_with(&root.letters));
            }
        }
    }

    #[test]
    fn validation_is_deterministic(
        title in hebrew_word(),
        items in prop::collection::vec(hebrew_word(), 0..6),
        age in prop::sample::select(AgeGroup::ALL.to_vec()),
    ) {
        let engine = HebrewEngine::standard();
        let items: Vec<&str> = items.iter().map(String::as_str).collect();
        let content = GeneratedContent::new(&title, "אמרו", &items);
        let params = ActivityParams::hebrew(age).with_target("ש", SoundPosition::Any);
        prop_assert_eq!(engine.validate_activity(&content, &params), engine.validate_activity(&content, &params));
    }
}

#[test]
fn dictionary_words_point_to_their_canonical_form() {
    let engine = HebrewEngine::standard();
    for (plain, pointed) in engine.lexicon().nikud_dictionary() {
        assert_eq!(engine.nikud.assign_word(plain, NikudLevel::Full, false), pointed, "{plain}");
        assert_eq!(script::remove_nikud(pointed), plain);
    }
}

#[test]
fn licensed_sets_grow_strictly_with_age() {
    let engine = HebrewEngine::standard();
    let lexicon = engine.lexicon();
    for pair in AgeGroup::ALL.windows(2) {
        let younger = lexicon.licensed_letters(pair[0]);
        let older = lexicon.licensed_letters(pair[1]);
        assert!(younger.is_subset(&older));
        assert!(younger.len() < older.len());
    }
}
