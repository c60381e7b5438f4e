// src/analysis/nikud.rs
//! Vowel-point (nikud) assignment, stripping, coverage statistics and
//! validation against the canonical dictionary.

use crate::core::script;
use crate::core::types::AgeGroup;
use crate::error::EngineError;
use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

const PATACH: char = '\u{05B7}';
const HIRIQ: char = '\u{05B4}';
const HOLAM: char = '\u{05B9}';

/// Marks kept at the partial level. Shva, reduced vowels, dagesh and the
/// shin/sin dots are dropped.
const PRIMARY_VOWELS: [char; 7] = ['\u{05B7}', '\u{05B8}', '\u{05B6}', '\u{05B5}', '\u{05B4}', '\u{05B9}', '\u{05BB}'];

/// Requested pointing density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NikudLevel {
    Full,
    Partial,
    Minimal,
    None,
    #[default]
    Auto,
}

impl NikudLevel {
    /// Replaces `Auto` with the level recommended for `age`; any other level
    /// passes through. Call once per request and thread the result.
    pub fn resolve(self, age: AgeGroup) -> NikudLevel {
        match self {
            NikudLevel::Auto => match age {
                AgeGroup::TwoToThree | AgeGroup::ThreeToFour => NikudLevel::Full,
                AgeGroup::FourToSix => NikudLevel::Partial,
            },
            level => level,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NikudLevel::Full => "full",
            NikudLevel::Partial => "partial",
            NikudLevel::Minimal => "minimal",
            NikudLevel::None => "none",
            NikudLevel::Auto => "auto",
        }
    }
}

impl fmt::Display for NikudLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NikudLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(NikudLevel::Full),
            "partial" => Ok(NikudLevel::Partial),
            "minimal" => Ok(NikudLevel::Minimal),
            "none" => Ok(NikudLevel::None),
            "auto" => Ok(NikudLevel::Auto),
            other => Err(EngineError::UnknownNikudLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NikudOptions {
    pub age_group: AgeGroup,
    pub level: NikudLevel,
    /// Return already-pointed text untouched.
    pub preserve_existing: bool,
    /// Force patach in the rule-based fallback.
    pub use_simplified: bool,
}

impl Default for NikudOptions {
    fn default() -> Self {
        Self { age_group: AgeGroup::default(), level: NikudLevel::Auto, preserve_existing: true, use_simplified: false }
    }
}

impl NikudOptions {
    pub fn with_level(level: NikudLevel) -> Self {
        Self { level, ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NikudMark {
    Shva,
    HatafSegol,
    HatafPatach,
    HatafKamatz,
    Hiriq,
    Tzere,
    Segol,
    Patach,
    Kamatz,
    Holam,
    Kubutz,
    Dagesh,
    ShinDot,
    SinDot,
    Other,
}

impl NikudMark {
    pub fn from_char(c: char) -> Option<NikudMark> {
        if !script::is_nikud(c) {
            return None;
        }
        Some(match c {
            '\u{05B0}' => NikudMark::Shva,
            '\u{05B1}' => NikudMark::HatafSegol,
            '\u{05B2}' => NikudMark::HatafPatach,
            '\u{05B3}' => NikudMark::HatafKamatz,
            '\u{05B4}' => NikudMark::Hiriq,
            '\u{05B5}' => NikudMark::Tzere,
            '\u{05B6}' => NikudMark::Segol,
            '\u{05B7}' => NikudMark::Patach,
            '\u{05B8}' => NikudMark::Kamatz,
            '\u{05B9}' | '\u{05BA}' => NikudMark::Holam,
            '\u{05BB}' => NikudMark::Kubutz,
            '\u{05BC}' => NikudMark::Dagesh,
            '\u{05C1}' => NikudMark::ShinDot,
            '\u{05C2}' => NikudMark::SinDot,
            _ => NikudMark::Other,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NikudStatistics {
    pub total_chars: usize,
    pub hebrew_letters: usize,
    pub nikud_marks: usize,
    /// Marks per letter, as a percentage rounded to one decimal. Several
    /// marks can sit on one letter, so this may exceed 100.
    pub coverage: f64,
    pub breakdown: BTreeMap<NikudMark, usize>,
}

/// Outcome of checking a pointed word against the dictionary. A word the
/// dictionary does not know is neither right nor wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NikudValidation {
    Matches,
    Mismatch { expected: String },
    UnknownWord { suggested: String },
}

#[derive(Debug, Clone)]
pub struct NikudAssigner {
    lexicon: Arc<Lexicon>,
}

impl NikudAssigner {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Points `text` word by word at the requested level. Words are split on
    /// whitespace and rejoined with single spaces.
    pub fn assign(&self, text: &str, options: &NikudOptions) -> String {
        if options.preserve_existing && script::has_nikud(text) {
            debug!(level = options.level.as_str(), "text already pointed, preserved");
            return text.to_string();
        }
        let level = options.level.resolve(options.age_group);
        text.split_whitespace()
            .map(|word| self.assign_word(word, level, options.use_simplified))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Points a single word. `level` must already be resolved; `Auto` is
    /// treated like `None`.
    pub fn assign_word(&self, word: &str, level: NikudLevel, use_simplified: bool) -> String {
        let plain = script::remove_nikud(word);
        match (self.lexicon.canonical_pointing(&plain), level) {
            (Some(pointed), NikudLevel::Full) => {
                debug!(word = %plain, "dictionary pointing");
                pointed.to_string()
            }
            (Some(pointed), NikudLevel::Partial) => {
                pointed.chars().filter(|&c| !script::is_nikud(c) || PRIMARY_VOWELS.contains(&c)).collect()
            }
            (None, NikudLevel::Full) => {
                debug!(word = %plain, use_simplified, "rule-based pointing");
                rule_based_pointing(&plain, use_simplified)
            }
            _ => plain,
        }
    }

    pub fn remove_nikud(&self, text: &str) -> String {
        script::remove_nikud(text)
    }

    pub fn has_nikud(&self, text: &str) -> bool {
        script::has_nikud(text)
    }

    pub fn recommended_level(&self, age: AgeGroup) -> NikudLevel {
        NikudLevel::Auto.resolve(age)
    }

    pub fn statistics(&self, text: &str) -> NikudStatistics {
        let mut breakdown = BTreeMap::new();
        let mut hebrew_letters = 0;
        let mut total_chars = 0;
        for c in text.chars() {
            total_chars += 1;
            if script::is_hebrew_letter(c) {
                hebrew_letters += 1;
            } else if let Some(mark) = NikudMark::from_char(c) {
                *breakdown.entry(mark).or_insert(0) += 1;
            }
        }
        let nikud_marks: usize = breakdown.values().sum();
        let coverage = if hebrew_letters == 0 {
            0.0
        } else {
            (nikud_marks as f64 / hebrew_letters as f64 * 1000.0).round() / 10.0
        };
        NikudStatistics { total_chars, hebrew_letters, nikud_marks, coverage, breakdown }
    }

    pub fn validate_nikud(&self, word: &str) -> NikudValidation {
        let plain = script::remove_nikud(word);
        match self.lexicon.canonical_pointing(&plain) {
            Some(expected) if expected == word => NikudValidation::Matches,
            Some(expected) => NikudValidation::Mismatch { expected: expected.to_string() },
            None => NikudValidation::UnknownWord { suggested: self.assign_word(&plain, NikudLevel::Full, false) },
        }
    }

    /// Dictionary entries short enough for the age, as `(plain, pointed)`.
    pub fn common_words_with_nikud(&self, age: AgeGroup) -> Vec<(&str, &str)> {
        let max_letters = match age {
            AgeGroup::TwoToThree => 4,
            AgeGroup::ThreeToFour => 6,
            AgeGroup::FourToSix => 10,
        };
        self.lexicon.nikud_dictionary().filter(|(plain, _)| plain.chars().count() <= max_letters).collect()
    }
}

/// Default vowel after every non-final letter: holam before vav, hiriq
/// before yod, patach otherwise.
fn rule_based_pointing(plain: &str, use_simplified: bool) -> String {
    let letters: Vec<char> = plain.chars().collect();
    let mut out = String::with_capacity(plain.len() * 2);
    for (i, &c) in letters.iter().enumerate() {
        out.push(c);
        if !script::is_hebrew_letter(c) || i + 1 == letters.len() {
            continue;
        }
        let vowel = match letters[i + 1] {
            _ if use_simplified => PATACH,
            'ו' => HOLAM,
            'י' => HIRIQ,
            _ => PATACH,
        };
        out.push(vowel);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assigner() -> NikudAssigner {
        NikudAssigner::new(Arc::new(Lexicon::standard()))
    }

    #[test]
    fn auto_resolves_by_age() {
        assert_eq!(NikudLevel::Auto.resolve(AgeGroup::TwoToThree), NikudLevel::Full);
        assert_eq!(NikudLevel::Auto.resolve(AgeGroup::ThreeToFour), NikudLevel::Full);
        assert_eq!(NikudLevel::Auto.resolve(AgeGroup::FourToSix), NikudLevel::Partial);
        assert_eq!(NikudLevel::Minimal.resolve(AgeGroup::TwoToThree), NikudLevel::Minimal);
        assert_eq!("PARTIAL".parse::<NikudLevel>().unwrap(), NikudLevel::Partial);
        assert!("heavy".parse::<NikudLevel>().is_err());
    }

    #[test]
    fn dictionary_words_get_canonical_pointing() {
        let a = assigner();
        let full = NikudOptions::with_level(NikudLevel::Full);
        assert_eq!(a.assign("כלב", &full), "כֶּלֶב");
        assert_eq!(a.assign("ילד  ילדה", &full), "יֶלֶד יַלְדָּה");
    }

    #[test]
    fn partial_keeps_primary_vowels_only() {
        let a = assigner();
        let partial = NikudOptions::with_level(NikudLevel::Partial);
        // dagesh dropped
        assert_eq!(a.assign("כלב", &partial), "כֶלֶב");
        // shva and shin dot dropped
        assert_eq!(a.assign("שמונה", &partial), "שמוֹנֶה");
    }

    #[test]
    fn minimal_and_none_strip() {
        let a = assigner();
        assert_eq!(a.assign("כלב", &NikudOptions::with_level(NikudLevel::Minimal)), "כלב");
        assert_eq!(a.assign("זזז", &NikudOptions::with_level(NikudLevel::None)), "זזז");
        assert_eq!(a.assign("זזז", &NikudOptions::with_level(NikudLevel::Partial)), "זזז");
    }

    #[test]
    fn fallback_points_every_non_final_letter() {
        let a = assigner();
        let full = NikudOptions::with_level(NikudLevel::Full);
        assert_eq!(a.assign("גזר", &full), "גַזַר");
        assert_eq!(a.assign("דוד", &full), "דֹוַד");
        assert_eq!(a.assign("גיל", &full), "גִיַל");
        let simplified = NikudOptions { use_simplified: true, ..full };
        assert_eq!(a.assign("דוד", &simplified), "דַוַד");
    }

    #[test]
    fn pointed_text_is_preserved() {
        let a = assigner();
        let text = "דָג גדול";
        assert_eq!(a.assign(text, &NikudOptions::with_level(NikudLevel::None)), text);
        let overwrite = NikudOptions { preserve_existing: false, ..NikudOptions::with_level(NikudLevel::None) };
        assert_eq!(a.assign(text, &overwrite), "דג גדול");
    }

    #[test]
    fn coverage_is_marks_over_letters() {
        let stats = assigner().statistics("דָדָדָדָ דד דד ד ד");
        assert_eq!(stats.hebrew_letters, 10);
        assert_eq!(stats.nikud_marks, 4);
        assert_eq!(stats.coverage, 40.0);
        assert_eq!(stats.breakdown.get(&NikudMark::Kamatz), Some(&4));
    }

    #[test]
    fn coverage_is_not_capped() {
        // dagesh + segol on kaf, segol on lamed: 3 marks, 3 letters
        let stats = assigner().statistics("כֶּלֶב");
        assert_eq!(stats.coverage, 100.0);
        // dagesh + kamatz on a single letter
        let stats = assigner().statistics("דָּ");
        assert_eq!(stats.coverage, 200.0);
    }

    #[test]
    fn coverage_is_zero_without_letters_or_marks() {
        let a = assigner();
        assert_eq!(a.statistics("").coverage, 0.0);
        assert_eq!(a.statistics("hello").coverage, 0.0);
        assert_eq!(a.statistics("כלב").coverage, 0.0);
    }

    #[test]
    fn validation_is_ternary() {
        let a = assigner();
        assert_eq!(a.validate_nikud("כֶּלֶב"), NikudValidation::Matches);
        assert_eq!(a.validate_nikud("כָלֶב"), NikudValidation::Mismatch { expected: "כֶּלֶב".to_string() });
        assert_eq!(a.validate_nikud("גזר"), NikudValidation::UnknownWord { suggested: "גַזַר".to_string() });
    }

    #[test]
    fn common_words_grow_with_age() {
        let a = assigner();
        let young = a.common_words_with_nikud(AgeGroup::TwoToThree);
        assert!(young.iter().all(|(plain, _)| plain.chars().count() <= 4));
        assert!(young.len() < a.common_words_with_nikud(AgeGroup::FourToSix).len());
        assert_eq!(a.recommended_level(AgeGroup::FourToSix), NikudLevel::Partial);
    }
}
