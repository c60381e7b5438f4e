// src/lexicon/records.rs
use crate::core::types::{AgeGroup, Theme};
use serde::{Deserialize, Serialize};

/// A cataloged root (shoresh).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRecord {
    pub root: String,
    pub letters: Vec<char>,
    pub meaning: String,
    /// Surface forms built on this root.
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Pa'al
    Basic,
    /// Pi'el
    Intensive,
    /// Hif'il
    Causative,
    /// Hitpa'el
    Reflexive,
    /// Nif'al
    Passive,
    /// Pa'al/Pi'el participle with a leading mem
    Participle,
}

/// A verb/noun template (binyan or mishkal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub kind: PatternKind,
    pub key: String,
    pub name: String,
    pub template: String,
    pub syllable_structure: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffixDirection {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixCategory {
    Article,
    Conjunction,
    Preposition,
    Relative,
    Number,
    Possessive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

/// A prefix particle or an inflectional/possessive suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixRecord {
    pub letters: String,
    pub direction: AffixDirection,
    pub category: AffixCategory,
    /// Fine-grained label such as `plural_masculine` or `possessive_1sg`.
    pub label: String,
    pub meaning: Option<String>,
    pub person: Option<Person>,
    pub number: Option<GrammaticalNumber>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Manner {
    Stop,
    Fricative,
    Affricate,
    Nasal,
    Lateral,
    Trill,
    Glide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Place {
    Bilabial,
    Labiodental,
    Alveolar,
    PostAlveolar,
    Palatal,
    Velar,
    Uvular,
    Pharyngeal,
    Glottal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voicing {
    Voiced,
    Voiceless,
}

/// Age-of-acquisition band: the bracket by which most children produce a
/// sound correctly. Ordered from earliest to latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionBand {
    Early,
    Middle,
    Late,
    Complex,
}

impl AcquisitionBand {
    pub const ALL: [AcquisitionBand; 4] =
        [AcquisitionBand::Early, AcquisitionBand::Middle, AcquisitionBand::Late, AcquisitionBand::Complex];

    /// Bands whose letters are licensed for an age bucket, cumulatively.
    pub fn licensed_for(age: AgeGroup) -> &'static [AcquisitionBand] {
        match age {
            AgeGroup::TwoToThree => &[AcquisitionBand::Early],
            AgeGroup::ThreeToFour => &[AcquisitionBand::Early, AcquisitionBand::Middle],
            AgeGroup::FourToSix => &[AcquisitionBand::Early, AcquisitionBand::Middle, AcquisitionBand::Late],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandRecord {
    pub band: AcquisitionBand,
    pub max_age: u8,
    pub letters: Vec<String>,
    pub phonemes: Vec<String>,
    pub description: String,
}

/// A consonant grapheme with its articulatory description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeRecord {
    pub grapheme: String,
    pub symbol: String,
    pub ipa: String,
    pub manner: Manner,
    pub place: Place,
    pub voicing: Voicing,
    pub dagesh: bool,
    pub name: String,
    /// Latest band listing this grapheme, if any.
    pub band: Option<AcquisitionBand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelLength {
    Short,
    Long,
    Ultrashort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelRecord {
    pub mark: char,
    pub symbol: String,
    pub ipa: String,
    pub name: String,
    pub length: VowelLength,
}

/// A curated vocabulary entry. Never mutated once cataloged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub word: String,
    pub pointed: String,
    pub gloss: String,
    pub target_sounds: Vec<String>,
    pub themes: Vec<Theme>,
    pub age_group: AgeGroup,
    pub root: Option<String>,
}

/// Words exercising one phoneme, split by where the phoneme sits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeWordList {
    pub initial: Vec<String>,
    pub medial: Vec<String>,
    #[serde(rename = "final")]
    pub final_: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalPair {
    pub word1: String,
    pub word2: String,
    pub meaning1: String,
    pub meaning2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalPairSet {
    pub first: String,
    pub second: String,
    pub pairs: Vec<MinimalPair>,
}

/// A phonological simplification typical of young speakers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhonologicalProcess {
    pub name: String,
    pub description: String,
    pub substitutions: Vec<(String, String)>,
    pub typical_age_from: f32,
    pub typical_age_to: f32,
}
