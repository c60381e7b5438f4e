// src/validator/mod.rs
//! Orchestrates the analyzers over a generated activity and folds their
//! findings into a [`ValidationReport`].
//!
//! Content defects never abort the run: every check records into the
//! report and the next check proceeds.

pub mod content;
pub mod report;

use crate::analysis::morphology::MorphologicalAnalyzer;
use crate::analysis::nikud::{NikudAssigner, NikudStatistics};
use crate::analysis::phonetics::{AgeAppropriateness, PhoneticAnalyzer};
use crate::config::{NikudRequirement, ValidationRules};
use crate::core::context::ValidationContext;
use crate::core::script;
use crate::core::types::{AgeGroup, Confidence, Language, SoundPosition, Theme};
use crate::lexicon::Lexicon;
use crate::vocabulary::VocabularyBank;
use content::{ActivityParams, GeneratedContent};
use indexmap::IndexSet;
use report::{IssueKind, Priority, SuggestionKind, TargetSoundSummary, ValidationReport, WordValidation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Nikud coverage of a text measured against an age requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NikudCheck {
    pub statistics: NikudStatistics,
    pub requirement: NikudRequirement,
    pub meets_minimum: bool,
    /// `min(100, coverage)`.
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct ContentValidator {
    morphology: MorphologicalAnalyzer,
    phonetics: PhoneticAnalyzer,
    nikud: NikudAssigner,
    vocabulary: VocabularyBank,
    rules: ValidationRules,
}

impl ContentValidator {
    pub fn new(lexicon: Arc<Lexicon>, rules: ValidationRules) -> Self {
        Self {
            morphology: MorphologicalAnalyzer::new(Arc::clone(&lexicon)),
            phonetics: PhoneticAnalyzer::new(Arc::clone(&lexicon)),
            nikud: NikudAssigner::new(Arc::clone(&lexicon)),
            vocabulary: VocabularyBank::new(lexicon),
            rules,
        }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validates one activity. Deterministic: the same content and params
    /// always give the same report.
    pub fn validate(&self, content: &GeneratedContent, params: &ActivityParams) -> ValidationReport {
        let mut report = ValidationReport::new();
        self.check_structure(content, &mut report);

        if params.language == Language::He {
            let mut ctx = ValidationContext::new(&self.phonetics, params.age_group);
            let words = self.extract_hebrew_words(content);
            self.check_nikud(content, params.age_group, &mut report);
            self.check_vocabulary(&words, &mut ctx, &mut report);
            self.check_phonetics(&words, params, &mut ctx, &mut report);
            self.check_cultural_relevance(&words, params, &mut report);
            debug!(words = words.len(), cached = ctx.cached_words(), hits = ctx.hits(), "validation context released");
        }

        report.finalize(&self.rules.weights);
        info!(
            is_valid = report.is_valid,
            error_count = report.errors.len(),
            warning_count = report.warnings.len(),
            overall_score = report.overall_score,
            "activity validated"
        );
        report
    }

    fn check_structure(&self, content: &GeneratedContent, report: &mut ValidationReport) {
        let rules = &self.rules.structure;
        let errors_before = report.errors.len();

        if rules.require_title && content.title().is_none() {
            report.error(IssueKind::MissingTitle, "activity has no title");
        }
        if rules.require_instructions && content.instructions().is_none() {
            report.error(IssueKind::MissingInstructions, "activity has no instructions");
        }
        match content.items() {
            None => report.error(IssueKind::MissingItems, "activity has no item list"),
            Some(items) if items.len() < rules.min_items => report.error(
                IssueKind::InsufficientItems,
                format!("{} items, at least {} required", items.len(), rules.min_items),
            ),
            Some(items) if items.len() > rules.max_items => report.warning(
                IssueKind::TooManyItems,
                format!("{} items, at most {} recommended", items.len(), rules.max_items),
                Vec::new(),
            ),
            Some(_) => {}
        }

        report.scores.structure = if report.errors.len() == errors_before { 100.0 } else { 0.0 };
    }

    fn check_nikud(&self, content: &GeneratedContent, age: AgeGroup, report: &mut ValidationReport) {
        let check = self.validate_nikud(&content.flattened_text(), age);
        let coverage = check.statistics.coverage;

        if check.requirement.required && !check.meets_minimum {
            report.error(
                IssueKind::InsufficientNikud,
                format!("nikud coverage {coverage:.1}% is below the {:.0}% required for ages {age}", check.requirement.min_coverage),
            );
        }
        if coverage < self.rules.nikud.suggestion_threshold {
            report.suggest(
                SuggestionKind::AddNikud,
                Priority::High,
                format!("consider adding nikud (coverage {coverage:.1}%)"),
            );
        }
        report.scores.nikud = check.score;
    }

    fn check_vocabulary(&self, words: &[String], ctx: &mut ValidationContext<'_>, report: &mut ValidationReport) {
        if words.is_empty() {
            report.error(IssueKind::NoHebrewWords, "no Hebrew words found in the content");
            report.scores.vocabulary = 0.0;
            return;
        }

        let mut inappropriate = Vec::new();
        let mut difficulty_total = 0u32;
        let mut analyzed = 0u32;
        for word in words {
            if !ctx.appropriateness(word).appropriate {
                inappropriate.push(word.clone());
            }
            if let Some(analysis) = ctx.phonetic(word) {
                difficulty_total += u32::from(analysis.difficulty);
                analyzed += 1;
            }
        }

        if !inappropriate.is_empty() {
            report.warning(
                IssueKind::InappropriateVocabulary,
                format!("{} of {} words use sounds not yet expected at ages {}", inappropriate.len(), words.len(), ctx.age()),
                inappropriate.clone(),
            );
        }
        let appropriate = words.len() - inappropriate.len();
        report.scores.vocabulary = appropriate as f64 / words.len() as f64 * 100.0;

        if analyzed > 0 {
            let average = f64::from(difficulty_total) / f64::from(analyzed);
            let ceiling = self.rules.vocabulary.max_complexity(ctx.age());
            if average > ceiling {
                report.suggest(
                    SuggestionKind::SimplifyVocabulary,
                    Priority::Medium,
                    format!("average word difficulty {average:.1} exceeds {ceiling:.0} for ages {}", ctx.age()),
                );
            }
        }
    }

    fn check_phonetics(
        &self,
        words: &[String],
        params: &ActivityParams,
        ctx: &mut ValidationContext<'_>,
        report: &mut ValidationReport,
    ) {
        let Some(target) = params.target() else {
            report.scores.phonetics = 100.0;
            return;
        };

        let summary = self.summarize_target_sound(words, target, params.sound_position, ctx);
        if summary.is_sufficient() {
            let frequency = if words.is_empty() { 0.0 } else { summary.total as f64 / words.len() as f64 };
            let saturation = self.rules.phonetics.saturation_frequency;
            report.scores.phonetics = if saturation > 0.0 { (frequency / saturation * 100.0).min(100.0) } else { 100.0 };
        } else {
            report.error(
                IssueKind::InsufficientTargetSound,
                format!(
                    "target sound {target} appears {} times ({}), at least {} required",
                    summary.count_at_position(),
                    summary.position,
                    summary.required
                ),
            );
            report.scores.phonetics = 0.0;
        }
        if summary.position != SoundPosition::Any && summary.count_at_position() == 0 {
            report.error(
                IssueKind::WrongSoundPosition,
                format!("target sound {target} never appears in {} position", summary.position),
            );
        }
        report.target_sound = Some(summary);
    }

    fn check_cultural_relevance(&self, words: &[String], params: &ActivityParams, report: &mut ValidationReport) {
        let Some(theme) = params.theme.as_deref() else {
            return;
        };
        if !matches!(theme.parse::<Theme>(), Ok(Theme::IsraeliCulture)) {
            return;
        }
        let cultural: HashSet<&str> =
            self.vocabulary.cultural_subset(params.age_group).into_iter().map(|item| item.word.as_str()).collect();
        let overlaps = words.iter().any(|word| cultural.contains(script::clean_word(word).as_str()));
        if !overlaps {
            report.suggest(
                SuggestionKind::AddCulturalContent,
                Priority::Low,
                "consider including culturally familiar words for this theme",
            );
        }
    }

    /// Counts use the exclusive consonant partition of each word, so a lone
    /// consonant is initial only. `PhoneticAnalyzer::filter_by_sound` checks
    /// each position independently and treats it as final too.
    fn summarize_target_sound(
        &self,
        words: &[String],
        target: &str,
        position: SoundPosition,
        ctx: &mut ValidationContext<'_>,
    ) -> TargetSoundSummary {
        let target_letter = script::clean_word(target).chars().next();
        let mut summary = TargetSoundSummary {
            target: target.to_string(),
            position,
            initial: 0,
            medial: 0,
            final_: 0,
            total: 0,
            required: self.rules.phonetics.min_occurrences,
            words_with_target: Vec::new(),
            words_without_target: Vec::new(),
        };

        for word in words {
            let found = match (target_letter, ctx.phonetic(word)) {
                (Some(letter), Some(analysis)) => {
                    let positions = &analysis.positions;
                    let at_initial = positions.contains(SoundPosition::Initial, letter);
                    let at_medial = positions.contains(SoundPosition::Medial, letter);
                    let at_final = positions.contains(SoundPosition::Final, letter);
                    summary.initial += usize::from(at_initial);
                    summary.medial += usize::from(at_medial);
                    summary.final_ += usize::from(at_final);
                    at_initial || at_medial || at_final
                }
                _ => false,
            };
            if found {
                summary.total += 1;
                summary.words_with_target.push(word.clone());
            } else {
                summary.words_without_target.push(word.clone());
            }
        }
        summary
    }

    /// Distinct Hebrew tokens from the title, instructions and items, in
    /// order of first appearance.
    pub fn extract_hebrew_words(&self, content: &GeneratedContent) -> Vec<String> {
        let words: IndexSet<&str> = content.text_fields().into_iter().flat_map(script::hebrew_tokens).collect();
        words.into_iter().map(str::to_string).collect()
    }

    /// Checks a lone word: Hebrew-only characters and a recognizable root.
    pub fn validate_word(&self, word: &str) -> WordValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let issue = |kind, severity, message: &str| report::ContentIssue {
            kind,
            severity,
            message: message.to_string(),
            words: vec![word.to_string()],
        };

        let trimmed = word.trim();
        if !script::is_hebrew_text(trimmed) {
            errors.push(issue(IssueKind::NonHebrewCharacters, report::Severity::Error, "word contains non-Hebrew characters"));
        }

        let morphology = self.morphology.analyze(word);
        if let Some(analysis) = &morphology {
            match &analysis.root {
                None => warnings.push(issue(IssueKind::UnknownRoot, report::Severity::Warning, "no root could be identified")),
                Some(root) if root.confidence == Confidence::Low => warnings.push(issue(
                    IssueKind::LowConfidenceRoot,
                    report::Severity::Warning,
                    "root is a low-confidence guess",
                )),
                Some(_) => {}
            }
        }

        WordValidation { word: word.to_string(), is_valid: errors.is_empty(), errors, warnings, morphology }
    }

    pub fn validate_nikud(&self, text: &str, age: AgeGroup) -> NikudCheck {
        let statistics = self.nikud.statistics(text);
        let requirement = self.rules.nikud.for_age(age);
        let meets_minimum = statistics.coverage >= requirement.min_coverage;
        let score = statistics.coverage.min(100.0);
        NikudCheck { statistics, requirement, meets_minimum, score }
    }

    pub fn validate_age_appropriateness<S: AsRef<str>>(&self, words: &[S], age: AgeGroup) -> Vec<AgeAppropriateness> {
        words.iter().map(|w| self.phonetics.assess_age_appropriateness(w.as_ref(), age)).collect()
    }

    /// Target-sound placement across `words`, outside of any activity run.
    pub fn validate_target_sound<S: AsRef<str>>(&self, words: &[S], target: &str, position: SoundPosition) -> TargetSoundSummary {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        let mut ctx = ValidationContext::new(&self.phonetics, AgeGroup::default());
        self.summarize_target_sound(&words, target, position, &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn validator() -> ContentValidator {
        ContentValidator::new(Arc::new(Lexicon::standard()), ValidationRules::default())
    }

    #[test]
    fn structure_requires_title_instructions_and_items() {
        let v = validator();
        let content = GeneratedContent::default();
        let report = v.validate(&content, &ActivityParams::hebrew(AgeGroup::ThreeToFour));
        assert!(report.has_error(IssueKind::MissingTitle));
        assert!(report.has_error(IssueKind::MissingInstructions));
        assert!(report.has_error(IssueKind::MissingItems));
        assert!(report.has_error(IssueKind::NoHebrewWords));
        assert_eq!(report.scores.structure, 0.0);
        assert!(!report.is_valid);
    }

    #[test]
    fn too_few_items_is_an_error_too_many_a_warning() {
        let v = validator();
        let params = ActivityParams::hebrew(AgeGroup::FourToSix);
        let few = v.validate(&GeneratedContent::new("דג", "דג", &["דג", "דג"]), &params);
        assert!(few.has_error(IssueKind::InsufficientItems));
        assert_eq!(few.scores.structure, 0.0);

        let many_items = vec!["דג"; 13];
        let many = v.validate(&GeneratedContent::new("דג", "דג", &many_items), &params);
        assert!(many.has_warning(IssueKind::TooManyItems));
        assert_eq!(many.scores.structure, 100.0);
    }

    #[test]
    fn english_activities_only_get_structure_checks() {
        let v = validator();
        let params = ActivityParams { language: Language::En, ..ActivityParams::hebrew(AgeGroup::TwoToThree) };
        let report = v.validate(&GeneratedContent::new("Dogs", "Say it", &["dog", "cat", "cow"]), &params);
        assert!(report.is_valid);
        assert_eq!(report.scores.structure, 100.0);
        assert_eq!(report.scores.nikud, 0.0);
        assert_eq!(report.scores.phonetics, 0.0);
        assert!((report.overall_score - 30.0).abs() < 1e-9);
    }

    #[test]
    fn extracts_distinct_tokens_in_order() {
        let v = validator();
        let content = GeneratedContent::from_json_str(
            r#"{"title": "כלב, חתול!", "instructions": "say כלב", "items": [{"a": "דג", "b": ["סוס", 1]}, "כלב"]}"#,
        )
        .unwrap();
        assert_eq!(v.extract_hebrew_words(&content), vec!["כלב", "חתול", "דג"]);
    }

    #[test]
    fn vocabulary_score_is_share_of_appropriate_words() {
        let v = validator();
        let content = GeneratedContent::new("דב", "במה", &["דב", "נמר", "דב"]);
        let report = v.validate(&content, &ActivityParams::hebrew(AgeGroup::TwoToThree));
        // only נמר carries a sound (ר) beyond the earliest band
        assert!((report.scores.vocabulary - 200.0 / 3.0).abs() < 1e-9);
        let warning = report.warnings.iter().find(|w| w.kind == IssueKind::InappropriateVocabulary).unwrap();
        assert_eq!(warning.words, vec!["נמר"]);
    }

    #[test]
    fn hard_vocabulary_suggests_simplifying() {
        let v = validator();
        let content = GeneratedContent::new("שרשרת", "צרצר", &["שרשרת", "צרצר", "רשרש"]);
        let report = v.validate(&content, &ActivityParams::hebrew(AgeGroup::TwoToThree));
        assert!(report.has_suggestion(SuggestionKind::SimplifyVocabulary));
    }

    #[test]
    fn specific_position_with_no_hits_adds_position_error() {
        let v = validator();
        let content = GeneratedContent::new("ראש", "דש", &["ראש", "דש", "ראש"]);
        let params = ActivityParams::hebrew(AgeGroup::FourToSix).with_target("ש", SoundPosition::Initial);
        let report = v.validate(&content, &params);
        assert!(report.has_error(IssueKind::InsufficientTargetSound));
        assert!(report.has_error(IssueKind::WrongSoundPosition));
        let summary = report.target_sound.unwrap();
        assert_eq!(summary.final_, 2);
        assert_eq!(summary.initial, 0);
    }

    #[test]
    fn frequent_target_saturates_phonetics_score() {
        let v = validator();
        let content = GeneratedContent::new("שמש", "שיר", &["שמש", "שיר", "שק", "דג"]);
        let params = ActivityParams::hebrew(AgeGroup::FourToSix).with_target("ש", SoundPosition::Any);
        let report = v.validate(&content, &params);
        let summary = report.target_sound.as_ref().unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.words_without_target, vec!["דג"]);
        // 3 of 4 words carry the target, above the 50% saturation point
        assert_eq!(report.scores.phonetics, 100.0);
    }

    #[test]
    fn target_sound_scores_linearly_below_saturation() {
        let v = validator();
        let content = GeneratedContent::new("שמש", "שיר שק דג דב גן מים נמר", &["דג", "דב", "גן"]);
        let params = ActivityParams::hebrew(AgeGroup::FourToSix).with_target("ש", SoundPosition::Any);
        let report = v.validate(&content, &params);
        // 3 of 8 words
        assert_eq!(report.scores.phonetics, 3.0 / 8.0 * 200.0);
        assert!(!report.has_error(IssueKind::InsufficientTargetSound));
    }

    #[test]
    fn cultural_theme_without_cultural_words_gets_a_suggestion() {
        let v = validator();
        let content = GeneratedContent::new("כלב", "דג", &["כלב", "דג", "כלב"]);
        let params = ActivityParams::hebrew(AgeGroup::TwoToThree).with_theme("israeli_culture");
        let report = v.validate(&content, &params);
        assert!(report.has_suggestion(SuggestionKind::AddCulturalContent));

        let content = GeneratedContent::new("שַׁבָּת", "חלה", &["חלה", "שבת", "חלה"]);
        let report = v.validate(&content, &params);
        assert!(!report.has_suggestion(SuggestionKind::AddCulturalContent));

        let params = ActivityParams::hebrew(AgeGroup::TwoToThree).with_theme("animals");
        let report = v.validate(&GeneratedContent::new("כלב", "דג", &["כלב", "דג", "כלב"]), &params);
        assert!(!report.has_suggestion(SuggestionKind::AddCulturalContent));
    }

    #[test]
    fn validate_word_flags_foreign_characters_and_weak_roots() {
        let v = validator();
        let word = v.validate_word("dog");
        assert!(!word.is_valid);
        assert_eq!(word.errors[0].kind, IssueKind::NonHebrewCharacters);

        let word = v.validate_word("גן");
        assert!(word.is_valid);
        assert_eq!(word.warnings[0].kind, IssueKind::UnknownRoot);

        let word = v.validate_word("גזר");
        assert_eq!(word.warnings[0].kind, IssueKind::LowConfidenceRoot);

        let word = v.validate_word("אכל");
        assert!(word.warnings.is_empty());
        assert!(word.morphology.is_some());
    }

    #[test]
    fn validate_word_tolerates_light_punctuation() {
        let v = validator();
        assert!(v.validate_word("כלב.").is_valid);
        assert!(v.validate_word("שלום, ילד!").is_valid);
        assert!(v.validate_word("צ׳יפס").is_valid);
        assert!(!v.validate_word("dog").is_valid);
        assert!(!v.validate_word("כלב;").is_valid);
        assert!(!v.validate_word("   ").is_valid);
    }

    #[test]
    fn lone_consonant_is_initial_in_summary_but_matches_final_filter() {
        let v = validator();
        let summary = v.validate_target_sound(&["ש"], "ש", SoundPosition::Final);
        assert_eq!(summary.initial, 1);
        assert_eq!(summary.final_, 0);
        assert_eq!(summary.total, 1);

        let phonetics = PhoneticAnalyzer::new(Arc::new(Lexicon::standard()));
        assert_eq!(phonetics.filter_by_sound(&["ש"], "ש", SoundPosition::Final), vec!["ש".to_string()]);
        assert_eq!(phonetics.filter_by_sound(&["ש"], "ש", SoundPosition::Initial), vec!["ש".to_string()]);
    }

    #[test]
    fn standalone_checks() {
        let v = validator();
        let check = v.validate_nikud("כֶּלֶב", AgeGroup::TwoToThree);
        assert!(check.meets_minimum);
        assert_eq!(check.score, 100.0);

        let results = v.validate_age_appropriateness(&["דב", "רץ"], AgeGroup::TwoToThree);
        assert!(results[0].appropriate);
        assert!(!results[1].appropriate);

        let summary = v.validate_target_sound(&["שמש", "ראש"], "ש", SoundPosition::Final);
        assert_eq!(summary.final_, 2);
        assert!(!summary.is_sufficient());
    }
}
