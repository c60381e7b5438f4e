// src/vocabulary.rs
//! Read-only query surface over the curated vocabulary catalog.

use crate::analysis::morphology::{MorphologicalAnalysis, MorphologicalAnalyzer};
use crate::analysis::phonetics::{PhoneticAnalysis, PhoneticAnalyzer};
use crate::core::types::{AgeGroup, SoundPosition, TargetAge, Theme};
use crate::lexicon::records::{MinimalPairSet, VocabularyItem};
use crate::lexicon::{CatalogStatistics, Lexicon};
use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::warn;

/// A word with both analyses attached, for metadata enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedWord {
    pub word: String,
    pub phonetics: Option<PhoneticAnalysis>,
    pub morphology: Option<MorphologicalAnalysis>,
    pub complexity: u8,
    pub target_age: Option<TargetAge>,
}

#[derive(Debug, Clone)]
pub struct VocabularyBank {
    lexicon: Arc<Lexicon>,
    morphology: MorphologicalAnalyzer,
    phonetics: PhoneticAnalyzer,
}

impl VocabularyBank {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            morphology: MorphologicalAnalyzer::new(Arc::clone(&lexicon)),
            phonetics: PhoneticAnalyzer::new(Arc::clone(&lexicon)),
            lexicon,
        }
    }

    pub fn by_theme(&self, theme: Theme, age: AgeGroup) -> Vec<&VocabularyItem> {
        self.lexicon
            .vocabulary()
            .iter()
            .filter(|item| item.age_group == age && item.themes.contains(&theme))
            .collect()
    }

    /// Like [`by_theme`](Self::by_theme) for an unparsed theme name. Unknown
    /// themes yield nothing.
    pub fn by_theme_name(&self, theme: &str, age: AgeGroup) -> Vec<&VocabularyItem> {
        match theme.parse::<Theme>() {
            Ok(theme) => self.by_theme(theme, age),
            Err(_) => {
                warn!(theme, "unknown vocabulary theme");
                Vec::new()
            }
        }
    }

    /// Indexed words exercising `target` at `position`, optionally limited
    /// to the age's complexity ceiling (which also sorts them simplest first).
    pub fn by_phoneme(&self, target: &str, position: SoundPosition, age: Option<AgeGroup>) -> Vec<String> {
        let Some(list) = self.lexicon.phoneme_words(target) else {
            warn!(phoneme = target, "no word list for phoneme");
            return Vec::new();
        };
        let words: Vec<&String> = match position {
            SoundPosition::Initial => list.initial.iter().collect(),
            SoundPosition::Medial => list.medial.iter().collect(),
            SoundPosition::Final => list.final_.iter().collect(),
            SoundPosition::Any => list
                .initial
                .iter()
                .chain(&list.medial)
                .chain(&list.final_)
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect(),
        };
        match age {
            Some(age) => self.morphology.filter_by_complexity(&words, age),
            None => words.into_iter().cloned().collect(),
        }
    }

    pub fn all_for_age(&self, age: AgeGroup) -> Vec<&VocabularyItem> {
        self.lexicon.vocabulary().iter().filter(|item| item.age_group == age).collect()
    }

    /// Up to `count` distinct entries for the age, optionally from one theme.
    /// Asking for more than exist returns all of them.
    pub fn random(&self, count: usize, age: AgeGroup, theme: Option<Theme>) -> Vec<&VocabularyItem> {
        self.random_with(&mut rand::thread_rng(), count, age, theme)
    }

    pub fn random_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        age: AgeGroup,
        theme: Option<Theme>,
    ) -> Vec<&VocabularyItem> {
        let pool: Vec<&VocabularyItem> = self
            .all_for_age(age)
            .into_iter()
            .filter(|item| theme.map_or(true, |t| item.themes.contains(&t)))
            .collect();
        pool.choose_multiple(rng, count).copied().collect()
    }

    /// Entries whose word or pointed form contains `query`, or whose gloss
    /// contains it case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&VocabularyItem> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let lowered = query.to_lowercase();
        self.lexicon
            .vocabulary()
            .iter()
            .filter(|item| {
                item.word.contains(query) || item.pointed.contains(query) || item.gloss.to_lowercase().contains(&lowered)
            })
            .collect()
    }

    pub fn cultural_subset(&self, age: AgeGroup) -> Vec<&VocabularyItem> {
        self.by_theme(Theme::IsraeliCulture, age)
    }

    pub fn high_frequency_subset(&self, age: AgeGroup) -> Vec<&VocabularyItem> {
        self.lexicon
            .vocabulary()
            .iter()
            .filter(|item| item.age_group == age && item.themes.iter().any(|t| Theme::HIGH_FREQUENCY.contains(t)))
            .collect()
    }

    /// Themes with at least one cataloged entry.
    pub fn available_themes(&self) -> Vec<Theme> {
        let present: BTreeSet<Theme> = self.lexicon.vocabulary().iter().flat_map(|item| item.themes.iter().copied()).collect();
        present.into_iter().collect()
    }

    pub fn enrich<S: AsRef<str>>(&self, words: &[S]) -> Vec<EnrichedWord> {
        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                let phonetics = self.phonetics.analyze(word);
                let morphology = self.morphology.analyze(word);
                EnrichedWord {
                    word: word.to_string(),
                    complexity: morphology.as_ref().map_or(0, |m| m.complexity),
                    target_age: phonetics.as_ref().map(|p| p.target_age),
                    phonetics,
                    morphology,
                }
            })
            .collect()
    }

    pub fn minimal_pairs(&self) -> &[MinimalPairSet] {
        self.lexicon.minimal_pairs()
    }

    pub fn statistics(&self) -> CatalogStatistics {
        let vocabulary = self.lexicon.vocabulary();
        let mut by_theme = BTreeMap::new();
        let mut by_age = BTreeMap::new();
        for item in vocabulary {
            for theme in &item.themes {
                *by_theme.entry(*theme).or_insert(0) += 1;
            }
            *by_age.entry(item.age_group).or_insert(0) += 1;
        }
        let by_phoneme: BTreeMap<String, usize> = self
            .lexicon
            .indexed_phonemes()
            .map(|(letter, list)| (letter.to_string(), list.initial.len() + list.medial.len() + list.final_.len()))
            .collect();

        CatalogStatistics {
            total_words: vocabulary.len(),
            total_themes: by_theme.len(),
            total_phonemes: by_phoneme.len(),
            by_theme,
            by_age,
            by_phoneme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bank() -> VocabularyBank {
        VocabularyBank::new(Arc::new(Lexicon::standard()))
    }

    #[test]
    fn by_theme_filters_theme_and_age() {
        let bank = bank();
        let animals = bank.by_theme(Theme::Animals, AgeGroup::TwoToThree);
        assert_eq!(animals.len(), 7);
        assert!(animals.iter().all(|item| item.age_group == AgeGroup::TwoToThree));
        assert_eq!(animals[0].word, "כלב");
        assert!(bank.by_theme_name("dinosaurs", AgeGroup::TwoToThree).is_empty());
        assert_eq!(bank.by_theme_name("animals", AgeGroup::TwoToThree).len(), 7);
    }

    #[test]
    fn by_phoneme_reads_positions() {
        let bank = bank();
        assert_eq!(bank.by_phoneme("ש", SoundPosition::Final, None), vec!["ראש", "שמש", "דש"]);
        // שמש appears as initial and final but only once here
        let any = bank.by_phoneme("ש", SoundPosition::Any, None);
        assert_eq!(any.iter().filter(|w| *w == "שמש").count(), 1);
        assert_eq!(any.len(), 15);
        assert!(bank.by_phoneme("ז", SoundPosition::Any, None).is_empty());
    }

    #[test]
    fn by_phoneme_age_filter_uses_complexity_ceiling() {
        let bank = bank();
        let morphology = MorphologicalAnalyzer::new(Arc::new(Lexicon::standard()));
        let young = bank.by_phoneme("ל", SoundPosition::Any, Some(AgeGroup::TwoToThree));
        assert!(young.iter().all(|w| morphology.assess_complexity(w) <= 3));
        let all = bank.by_phoneme("ל", SoundPosition::Any, None);
        assert!(young.len() < all.len());
    }

    #[test]
    fn random_never_repeats_or_pads() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = bank.random_with(&mut rng, 3, AgeGroup::ThreeToFour, Some(Theme::Colors));
        assert_eq!(picked.len(), 3);
        let distinct: BTreeSet<&str> = picked.iter().map(|item| item.word.as_str()).collect();
        assert_eq!(distinct.len(), 3);

        let everything = bank.random(1000, AgeGroup::TwoToThree, Some(Theme::Emotions));
        assert_eq!(everything.len(), 2);
        assert!(bank.random(0, AgeGroup::TwoToThree, None).is_empty());
    }

    #[test]
    fn search_matches_word_and_gloss() {
        let bank = bank();
        assert_eq!(bank.search("DOG").len(), 1);
        assert!(bank.search("כלב").iter().any(|item| item.gloss == "dog"));
        assert!(bank.search("  ").is_empty());
    }

    #[test]
    fn subsets() {
        let bank = bank();
        let culture: Vec<&str> = bank.cultural_subset(AgeGroup::TwoToThree).iter().map(|i| i.word.as_str()).collect();
        assert_eq!(culture, vec!["חלה", "שבת"]);
        let frequent = bank.high_frequency_subset(AgeGroup::TwoToThree);
        assert!(frequent.iter().all(|item| item.themes.iter().all(|t| Theme::HIGH_FREQUENCY.contains(t))));
        assert!(!frequent.iter().any(|item| item.word == "כלב"));
        assert_eq!(bank.available_themes().len(), 8);
    }

    #[test]
    fn enrich_attaches_both_analyses() {
        let enriched = bank().enrich(&["משחק", ""]);
        assert_eq!(enriched[0].complexity, 5);
        assert!(enriched[0].phonetics.is_some());
        assert_eq!(enriched[0].target_age, Some(TargetAge::SixPlus));
        assert!(enriched[1].morphology.is_none());
    }

    #[test]
    fn statistics_are_read_throughs() {
        let bank = bank();
        let stats = bank.statistics();
        assert_eq!(stats.total_words, Lexicon::standard().vocabulary().len());
        assert_eq!(stats.total_themes, 8);
        assert_eq!(stats.total_phonemes, 6);
        assert_eq!(stats.by_phoneme.get("ש"), Some(&16));
        assert_eq!(stats.by_age.values().sum::<usize>(), stats.total_words);
        assert_eq!(stats.by_theme.get(&Theme::Colors), Some(&11));
    }
}
