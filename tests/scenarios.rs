use hebrew_lingua::validator::report::{IssueKind, SuggestionKind};
use hebrew_lingua::{ActivityParams, AgeGroup, GeneratedContent, HebrewEngine, SoundPosition};
use pretty_assertions::assert_eq;

#[test]
fn untargeted_activity_passes_structure_and_phonetics() {
    let engine = HebrewEngine::standard();
    let content = GeneratedContent::new("כלב", "תרגול", &["כלב", "חתול", "כלב"]);
    let params = ActivityParams::hebrew(AgeGroup::ThreeToFour);

    let report = engine.validate_activity(&content, &params);

    assert_eq!(report.scores.phonetics, 100.0);
    assert_eq!(report.scores.structure, 100.0);
    assert!(report.target_sound.is_none());
    assert!(!report.has_error(IssueKind::InsufficientItems));

    let words = engine.validator().extract_hebrew_words(&content);
    let appropriate = engine
        .validator()
        .validate_age_appropriateness(&words, AgeGroup::ThreeToFour)
        .iter()
        .filter(|a| a.appropriate)
        .count();
    let expected = appropriate as f64 / words.len() as f64 * 100.0;
    assert!((report.scores.vocabulary - expected).abs() < 1e-9);
}

#[test]
fn too_few_initial_targets_zero_the_phonetics_score() {
    let engine = HebrewEngine::standard();
    let content = GeneratedContent::new("שמש", "שלום", &["שמש", "שלום", "שמש"]);
    let params = ActivityParams::hebrew(AgeGroup::FourToSix).with_target("ש", SoundPosition::Initial);

    let report = engine.validate_activity(&content, &params);

    assert!(report.has_error(IssueKind::InsufficientTargetSound));
    assert!(!report.has_error(IssueKind::WrongSoundPosition));
    assert_eq!(report.scores.phonetics, 0.0);
    let summary = report.target_sound.as_ref().unwrap();
    assert_eq!(summary.initial, 2);
    assert_eq!(summary.required, 3);
    assert!(!report.is_valid);
}

#[test]
fn sparse_nikud_for_toddlers_is_an_error_with_a_suggestion() {
    let engine = HebrewEngine::standard();
    // 4 marks over 10 letters
    let content = GeneratedContent::new("דָדָדָדָ", "דד", &["דד", "ד", "ד"]);
    let params = ActivityParams::hebrew(AgeGroup::TwoToThree);

    let report = engine.validate_activity(&content, &params);

    assert!(report.has_error(IssueKind::InsufficientNikud));
    assert_eq!(report.scores.nikud, 40.0);
    assert!(report.has_suggestion(SuggestionKind::AddNikud));
}

#[test]
fn complexity_filter_keeps_simple_words_for_toddlers() {
    let engine = HebrewEngine::standard();
    let kept = engine.morphology.filter_by_complexity(&["משחק", "גן"], AgeGroup::TwoToThree);
    assert_eq!(kept, vec!["גן".to_string()]);
    assert!(engine.morphology.assess_complexity("משחק") > AgeGroup::TwoToThree.max_complexity());
}

#[test]
fn validation_is_repeatable() {
    let engine = HebrewEngine::standard();
    let content = GeneratedContent::from_json_str(
        r#"{"title": "צבעים", "instructions": "אמרו את המילה", "items": [{"word": "אדום", "image": "red"}, "כחול", "ירוק", "צהוב"]}"#,
    )
    .unwrap();
    let params = ActivityParams::hebrew(AgeGroup::ThreeToFour).with_target("ר", SoundPosition::Medial);

    let first = engine.validate_activity(&content, &params);
    let second = engine.validate_activity(&content, &params);
    assert_eq!(first, second);
    assert_eq!(first.to_record(), second.to_record());
}

#[test]
fn engine_handles_activity_json_end_to_end() {
    let engine = HebrewEngine::standard();
    let content = GeneratedContent::from_json_str(
        r#"{"title": "חיות בחווה", "instructions": "הצביעו על החיה", "items": ["פרה", "סוס", "כבשה"], "answers": [0, 1, 2]}"#,
    )
    .unwrap();
    let params = ActivityParams::hebrew(AgeGroup::FourToSix);

    let metadata = engine.enrich_activity(&content, &params);

    assert_eq!(metadata.report.scores.structure, 100.0);
    assert_eq!(metadata.words.len(), engine.validator().extract_hebrew_words(&content).len());
    assert!(metadata.words.iter().all(|bundle| !bundle.pointed_form.is_empty()));
}
