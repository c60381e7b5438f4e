// src/analysis/phonetics.rs
//! Consonant/vowel extraction, articulation difficulty, age-of-acquisition
//! targets and target-sound placement.
//!
//! Letters missing from the consonant inventory (final forms, foreign
//! characters) are skipped rather than rejected. That lowers the apparent
//! difficulty of such words, which the scoring model already accounts for.

use crate::core::script;
use crate::core::transcription::Transcriber;
use crate::core::types::{AgeGroup, SoundPosition, TargetAge};
use crate::lexicon::records::{AcquisitionBand, Manner, MinimalPairSet, PhonemeRecord, PhonologicalProcess, Place, VowelRecord};
use crate::lexicon::Lexicon;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// One recognized consonant, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsonantOccurrence {
    pub letter: char,
    pub phoneme: PhonemeRecord,
}

/// Consonant letters bucketed by where they sit among the word's
/// recognized consonants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundPositions {
    pub initial: Vec<char>,
    pub medial: Vec<char>,
    #[serde(rename = "final")]
    pub final_: Vec<char>,
}

impl SoundPositions {
    pub fn at(&self, position: SoundPosition) -> Vec<char> {
        match position {
            SoundPosition::Initial => self.initial.clone(),
            SoundPosition::Medial => self.medial.clone(),
            SoundPosition::Final => self.final_.clone(),
            SoundPosition::Any => {
                self.initial.iter().chain(&self.medial).chain(&self.final_).copied().collect()
            }
        }
    }

    pub fn contains(&self, position: SoundPosition, letter: char) -> bool {
        match position {
            SoundPosition::Initial => self.initial.contains(&letter),
            SoundPosition::Medial => self.medial.contains(&letter),
            SoundPosition::Final => self.final_.contains(&letter),
            SoundPosition::Any => {
                self.initial.contains(&letter) || self.medial.contains(&letter) || self.final_.contains(&letter)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticAnalysis {
    pub word: String,
    pub cleaned: String,
    pub consonants: Vec<ConsonantOccurrence>,
    /// Vowel marks in their original order.
    pub vowels: Vec<VowelRecord>,
    pub syllables: Vec<String>,
    /// Articulation difficulty, 0-10.
    pub difficulty: u8,
    pub target_age: TargetAge,
    pub positions: SoundPositions,
}

impl PhoneticAnalysis {
    pub fn consonant_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.consonants.iter().map(|c| c.letter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeAppropriateness {
    pub word: String,
    pub age_group: AgeGroup,
    pub appropriate: bool,
    /// Offending graphemes, first occurrence order.
    pub inappropriate_sounds: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PhoneticAnalyzer {
    lexicon: Arc<Lexicon>,
    transcriber: Transcriber,
}

impl PhoneticAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon, transcriber: Transcriber::new() }
    }

    pub fn analyze(&self, word: &str) -> Option<PhoneticAnalysis> {
        let cleaned = script::clean_word(word);
        if cleaned.is_empty() {
            return None;
        }

        let consonants: Vec<ConsonantOccurrence> = cleaned
            .chars()
            .filter_map(|letter| {
                self.lexicon
                    .consonant_for(letter)
                    .map(|phoneme| ConsonantOccurrence { letter, phoneme: phoneme.clone() })
            })
            .collect();
        let vowels: Vec<VowelRecord> = word.chars().filter_map(|mark| self.lexicon.vowel(mark)).cloned().collect();
        let syllables = script::syllabify(&cleaned);

        let complex = consonants.iter().filter(|c| c.phoneme.band == Some(AcquisitionBand::Complex)).count();
        let late = consonants.iter().filter(|c| c.phoneme.band == Some(AcquisitionBand::Late)).count();
        let difficulty = (syllables.len().min(5) + 2 * complex + late).min(10) as u8;

        let max_age = consonants
            .iter()
            .filter_map(|c| c.phoneme.band)
            .filter_map(|band| self.lexicon.band(band))
            .map(|record| record.max_age)
            .fold(2, u8::max);
        let target_age = TargetAge::from_max_age(max_age);

        let mut positions = SoundPositions::default();
        let len = consonants.len();
        for (index, consonant) in consonants.iter().enumerate() {
            match SoundPosition::classify(index, len) {
                SoundPosition::Initial => positions.initial.push(consonant.letter),
                SoundPosition::Final => positions.final_.push(consonant.letter),
                _ => positions.medial.push(consonant.letter),
            }
        }

        debug!(word, difficulty, target_age = target_age.as_str(), consonants = len, "phonetic analysis");
        Some(PhoneticAnalysis { word: word.to_string(), cleaned, consonants, vowels, syllables, difficulty, target_age, positions })
    }

    /// Checks every recognized consonant against the cumulative set licensed
    /// for `age`. Graphemes outside every band (alef, ayin, tav) are never
    /// licensed.
    pub fn assess_age_appropriateness(&self, word: &str, age: AgeGroup) -> AgeAppropriateness {
        match self.analyze(word) {
            Some(analysis) => self.appropriateness_of(&analysis, age),
            None => AgeAppropriateness {
                word: word.to_string(),
                age_group: age,
                appropriate: true,
                inappropriate_sounds: Vec::new(),
            },
        }
    }

    pub(crate) fn appropriateness_of(&self, analysis: &PhoneticAnalysis, age: AgeGroup) -> AgeAppropriateness {
        let licensed = self.lexicon.licensed_letters(age);
        let offending: IndexSet<String> = analysis
            .consonants
            .iter()
            .filter(|c| !licensed.contains(c.phoneme.grapheme.as_str()))
            .map(|c| c.phoneme.grapheme.clone())
            .collect();
        AgeAppropriateness {
            word: analysis.word.clone(),
            age_group: age,
            appropriate: offending.is_empty(),
            inappropriate_sounds: offending.into_iter().collect(),
        }
    }

    /// Words whose de-pointed form contains `target` at `position`, counted
    /// by character index in the cleaned word.
    pub fn filter_by_sound<S: AsRef<str>>(&self, words: &[S], target: &str, position: SoundPosition) -> Vec<String> {
        let Some(target) = script::clean_word(target).chars().next() else {
            return Vec::new();
        };
        words
            .iter()
            .map(|word| word.as_ref())
            .filter(|word| {
                let letters: Vec<char> = script::clean_word(word).chars().collect();
                letters
                    .iter()
                    .enumerate()
                    .any(|(index, &c)| c == target && position.matches(index, letters.len()))
            })
            .map(str::to_string)
            .collect()
    }

    pub fn phoneme_info(&self, letter: &str) -> Option<&PhonemeRecord> {
        self.lexicon.consonant(letter)
    }

    /// Consonants whose grapheme is licensed for `age`.
    pub fn phonemes_for_age(&self, age: AgeGroup) -> Vec<&PhonemeRecord> {
        let licensed = self.lexicon.licensed_letters(age);
        self.lexicon.consonants().filter(|p| licensed.contains(p.grapheme.as_str())).collect()
    }

    pub fn transcribe(&self, word: &str) -> String {
        self.transcriber.transcribe(word)
    }

    /// Minimal pairs contrasting `a` and `b`, in either order.
    pub fn minimal_pairs(&self, a: &str, b: &str) -> Option<&MinimalPairSet> {
        self.lexicon
            .minimal_pairs()
            .iter()
            .find(|set| (set.first == a && set.second == b) || (set.first == b && set.second == a))
    }

    pub fn consonants_by_manner(&self, manner: Manner) -> Vec<&PhonemeRecord> {
        self.lexicon.consonants().filter(|p| p.manner == manner).collect()
    }

    pub fn consonants_by_place(&self, place: Place) -> Vec<&PhonemeRecord> {
        self.lexicon.consonants().filter(|p| p.place == place).collect()
    }

    /// Processes still typical at the top of the age bucket.
    pub fn typical_processes_for_age(&self, age: AgeGroup) -> Vec<&PhonologicalProcess> {
        let max_age = f32::from(age.max_age());
        self.lexicon.processes().iter().filter(|p| p.typical_age_to >= max_age).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn analyzer() -> PhoneticAnalyzer {
        PhoneticAnalyzer::new(Arc::new(Lexicon::standard()))
    }

    #[test]
    fn consonants_and_vowels_come_out_in_order() {
        let analysis = analyzer().analyze("כֶּלֶב").unwrap();
        let letters: String = analysis.consonant_letters().collect();
        assert_eq!(letters, "כלב");
        let vowels: Vec<&str> = analysis.vowels.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(vowels, vec!["segol", "segol"]);
        assert_eq!(analysis.positions.initial, vec!['כ']);
        assert_eq!(analysis.positions.medial, vec!['ל']);
        assert_eq!(analysis.positions.final_, vec!['ב']);
    }

    #[test]
    fn difficulty_counts_late_and_complex_sounds() {
        let a = analyzer();
        // one syllable, no late or complex sounds
        assert_eq!(a.analyze("דג").unwrap().difficulty, 1);
        // שמש: one three-letter syllable, two late sounds
        assert_eq!(a.analyze("שמש").unwrap().difficulty, 3);
        // ראש: ר complex, ש late, syllables "רא" + "ש"
        assert_eq!(a.analyze("ראש").unwrap().difficulty, 5);
    }

    #[test]
    fn target_age_follows_latest_band() {
        let a = analyzer();
        assert_eq!(a.analyze("דב").unwrap().target_age, TargetAge::TwoToThree);
        assert_eq!(a.analyze("גל").unwrap().target_age, TargetAge::ThreeToFour);
        assert_eq!(a.analyze("שש").unwrap().target_age, TargetAge::FourToSix);
        assert_eq!(a.analyze("רב").unwrap().target_age, TargetAge::SixPlus);
    }

    #[test]
    fn unknown_letters_are_skipped_not_rejected() {
        let analysis = analyzer().analyze("שלום").unwrap();
        let letters: String = analysis.consonant_letters().collect();
        // final mem is not in the inventory
        assert_eq!(letters, "שלו");
        assert_eq!(analyzer().analyze("abc").unwrap().consonants.len(), 0);
        assert!(analyzer().analyze("").is_none());
    }

    #[test]
    fn single_consonant_lands_in_initial_bucket() {
        let analysis = analyzer().analyze("דָּ").unwrap();
        assert_eq!(analysis.positions.initial, vec!['ד']);
        assert!(analysis.positions.final_.is_empty());
    }

    #[test]
    fn age_appropriateness_reports_offending_sounds() {
        let a = analyzer();
        let report = a.assess_age_appropriateness("כלב", AgeGroup::TwoToThree);
        assert!(!report.appropriate);
        assert_eq!(report.inappropriate_sounds, vec!["כ", "ל"]);

        let report = a.assess_age_appropriateness("כלב", AgeGroup::FourToSix);
        assert!(report.appropriate);

        // tav belongs to no band
        let report = a.assess_age_appropriateness("תת", AgeGroup::FourToSix);
        assert_eq!(report.inappropriate_sounds, vec!["ת"]);
    }

    #[test]
    fn filter_by_sound_respects_position() {
        let a = analyzer();
        let words = ["שמש", "משחק", "ראש", "דג"];
        assert_eq!(a.filter_by_sound(&words, "ש", SoundPosition::Initial), vec!["שמש"]);
        assert_eq!(a.filter_by_sound(&words, "ש", SoundPosition::Medial), vec!["משחק"]);
        assert_eq!(a.filter_by_sound(&words, "ש", SoundPosition::Final), vec!["שמש", "ראש"]);
        assert_eq!(a.filter_by_sound(&words, "שׁ", SoundPosition::Any).len(), 3);
    }

    #[test]
    fn lone_letter_matches_initial_and_final() {
        let a = analyzer();
        assert_eq!(a.filter_by_sound(&["ש"], "ש", SoundPosition::Initial), vec!["ש"]);
        assert_eq!(a.filter_by_sound(&["ש"], "ש", SoundPosition::Final), vec!["ש"]);
        assert!(a.filter_by_sound(&["ש"], "ש", SoundPosition::Medial).is_empty());
    }

    #[test]
    fn minimal_pairs_lookup_is_order_insensitive() {
        let a = analyzer();
        let forward = a.minimal_pairs("ר", "ל").unwrap();
        let backward = a.minimal_pairs("ל", "ר").unwrap();
        assert_eq!(forward, backward);
        assert!(a.minimal_pairs("ז", "ד").is_none());
    }

    #[test]
    fn phonemes_for_age_are_licensed_only() {
        let a = analyzer();
        let young: Vec<&str> = a.phonemes_for_age(AgeGroup::TwoToThree).iter().map(|p| p.grapheme.as_str()).collect();
        assert!(young.contains(&"מ"));
        assert!(!young.contains(&"ר"));
        assert!(a.phonemes_for_age(AgeGroup::FourToSix).len() > young.len());
    }

    #[test]
    fn articulatory_groupings() {
        let a = analyzer();
        assert!(a.consonants_by_manner(Manner::Nasal).iter().all(|p| p.manner == Manner::Nasal));
        assert_eq!(a.consonants_by_manner(Manner::Trill).len(), 1);
        assert!(a.consonants_by_place(Place::Bilabial).iter().any(|p| p.grapheme == "מ"));
        assert_eq!(a.phoneme_info("ר").unwrap().name, "resh");
    }

    #[test]
    fn processes_filter_by_upper_age() {
        let a = analyzer();
        let names: Vec<&str> = a.typical_processes_for_age(AgeGroup::FourToSix).iter().map(|p| p.name.as_str()).collect();
        assert!(names.is_empty());
        let names: Vec<&str> = a.typical_processes_for_age(AgeGroup::ThreeToFour).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["stopping", "gliding", "cluster_reduction"]);
        assert_eq!(a.typical_processes_for_age(AgeGroup::TwoToThree).len(), 5);
    }

    #[test]
    fn transcription_is_exposed() {
        assert_eq!(analyzer().transcribe("כֶּלֶב"), "kelev");
    }
}
