// File: src/core/context.rs
use crate::analysis::phonetics::{AgeAppropriateness, PhoneticAnalysis, PhoneticAnalyzer};
use crate::core::types::AgeGroup;
use std::collections::HashMap;

/// Per-run memo of phonetic work for one activity validation.
///
/// Activities repeat the same handful of words across title, instructions
/// and items, so each word is analyzed once per run. The context is owned by
/// a single `validate` call and dropped with it; it is never shared between
/// validations.
pub struct ValidationContext<'a> {
    phonetics: &'a PhoneticAnalyzer,
    age: AgeGroup,
    analyses: HashMap<String, Option<PhoneticAnalysis>>,
    appropriateness: HashMap<String, AgeAppropriateness>,
    hits: usize,
}

impl<'a> ValidationContext<'a> {
    pub fn new(phonetics: &'a PhoneticAnalyzer, age: AgeGroup) -> Self {
        Self { phonetics, age, analyses: HashMap::new(), appropriateness: HashMap::new(), hits: 0 }
    }

    pub fn age(&self) -> AgeGroup {
        self.age
    }

    pub fn phonetic(&mut self, word: &str) -> Option<&PhoneticAnalysis> {
        if self.analyses.contains_key(word) {
            self.hits += 1;
        }
        let phonetics = self.phonetics;
        self.analyses.entry(word.to_string()).or_insert_with(|| phonetics.analyze(word)).as_ref()
    }

    /// Age-appropriateness of `word` for this run's age group.
    pub fn appropriateness(&mut self, word: &str) -> AgeAppropriateness {
        if let Some(cached) = self.appropriateness.get(word) {
            self.hits += 1;
            return cached.clone();
        }
        let (phonetics, age) = (self.phonetics, self.age);
        let result = match self.phonetic(word) {
            Some(analysis) => phonetics.appropriateness_of(analysis, age),
            None => phonetics.assess_age_appropriateness(word, age),
        };
        self.appropriateness.insert(word.to_string(), result.clone());
        result
    }

    pub fn cached_words(&self) -> usize {
        self.analyses.len()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use std::sync::Arc;

    #[test]
    fn repeated_words_are_analyzed_once() {
        let phonetics = PhoneticAnalyzer::new(Arc::new(Lexicon::standard()));
        let mut ctx = ValidationContext::new(&phonetics, AgeGroup::ThreeToFour);
        assert!(ctx.phonetic("כלב").is_some());
        assert!(ctx.phonetic("כלב").is_some());
        assert!(ctx.phonetic("").is_none());
        assert_eq!(ctx.cached_words(), 2);
        assert_eq!(ctx.hits(), 1);
    }

    #[test]
    fn appropriateness_matches_the_analyzer() {
        let phonetics = PhoneticAnalyzer::new(Arc::new(Lexicon::standard()));
        let mut ctx = ValidationContext::new(&phonetics, AgeGroup::TwoToThree);
        let direct = phonetics.assess_age_appropriateness("כלב", AgeGroup::TwoToThree);
        assert_eq!(ctx.appropriateness("כלב"), direct);
        assert_eq!(ctx.appropriateness("כלב"), direct);
        assert_eq!(ctx.age(), AgeGroup::TwoToThree);
    }
}
