// src/lexicon/mod.rs
//! The process-wide, read-only registry of lexical tables.
//!
//! A [`Lexicon`] is assembled once by [`LexiconBuilder`] and shared behind an
//! `Arc` by every analyzer. Nothing mutates it after `build()`.

mod data;
pub mod records;

use crate::core::script;
use crate::core::types::{AgeGroup, Theme};
use records::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    roots: BTreeMap<String, RootRecord>,
    patterns: Vec<PatternRecord>,
    prefixes: Vec<AffixRecord>,
    prefix_sequences: Vec<String>,
    suffixes: Vec<AffixRecord>,
    consonants: BTreeMap<String, PhonemeRecord>,
    vowels: BTreeMap<char, VowelRecord>,
    bands: Vec<BandRecord>,
    nikud_dictionary: BTreeMap<String, String>,
    vocabulary: Vec<VocabularyItem>,
    phoneme_index: BTreeMap<String, PhonemeWordList>,
    minimal_pairs: Vec<MinimalPairSet>,
    processes: Vec<PhonologicalProcess>,
}

impl Lexicon {
    /// The built-in tables.
    pub fn standard() -> Self {
        LexiconBuilder::standard().build()
    }

    pub fn root(&self, root: &str) -> Option<&RootRecord> {
        self.roots.get(root)
    }

    pub fn roots(&self) -> impl Iterator<Item = &RootRecord> {
        self.roots.values()
    }

    pub fn patterns(&self) -> &[PatternRecord] {
        &self.patterns
    }

    pub fn pattern(&self, kind: PatternKind) -> Option<&PatternRecord> {
        self.patterns.iter().find(|p| p.kind == kind)
    }

    pub fn prefix(&self, letter: char) -> Option<&AffixRecord> {
        self.prefixes.iter().find(|p| p.letters.chars().eq(std::iter::once(letter)))
    }

    pub fn prefix_sequences(&self) -> &[String] {
        &self.prefix_sequences
    }

    pub fn suffixes(&self) -> &[AffixRecord] {
        &self.suffixes
    }

    pub fn consonant(&self, grapheme: &str) -> Option<&PhonemeRecord> {
        self.consonants.get(grapheme)
    }

    pub fn consonant_for(&self, letter: char) -> Option<&PhonemeRecord> {
        let mut buf = [0u8; 4];
        self.consonants.get(&*letter.encode_utf8(&mut buf))
    }

    pub fn consonants(&self) -> impl Iterator<Item = &PhonemeRecord> {
        self.consonants.values()
    }

    pub fn vowel(&self, mark: char) -> Option<&VowelRecord> {
        self.vowels.get(&mark)
    }

    pub fn bands(&self) -> &[BandRecord] {
        &self.bands
    }

    pub fn band(&self, band: AcquisitionBand) -> Option<&BandRecord> {
        self.bands.iter().find(|b| b.band == band)
    }

    /// Graphemes licensed at `age`: the union of every band up to it.
    pub fn licensed_letters(&self, age: AgeGroup) -> BTreeSet<&str> {
        AcquisitionBand::licensed_for(age)
            .iter()
            .filter_map(|band| self.band(*band))
            .flat_map(|record| record.letters.iter().map(String::as_str))
            .collect()
    }

    pub fn canonical_pointing(&self, plain: &str) -> Option<&str> {
        self.nikud_dictionary.get(plain).map(String::as_str)
    }

    pub fn nikud_dictionary(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nikud_dictionary.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn vocabulary(&self) -> &[VocabularyItem] {
        &self.vocabulary
    }

    pub fn phoneme_words(&self, letter: &str) -> Option<&PhonemeWordList> {
        self.phoneme_index.get(letter)
    }

    pub fn indexed_phonemes(&self) -> impl Iterator<Item = (&str, &PhonemeWordList)> {
        self.phoneme_index.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn minimal_pairs(&self) -> &[MinimalPairSet] {
        &self.minimal_pairs
    }

    pub fn processes(&self) -> &[PhonologicalProcess] {
        &self.processes
    }
}

/// Assembles a [`Lexicon`]. Start from [`LexiconBuilder::standard`] and add
/// deployment- or test-specific entries before calling `build`.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    roots: Vec<RootRecord>,
    patterns: Vec<PatternRecord>,
    prefixes: Vec<AffixRecord>,
    prefix_sequences: Vec<String>,
    suffixes: Vec<AffixRecord>,
    consonants: Vec<PhonemeRecord>,
    vowels: Vec<VowelRecord>,
    bands: Vec<BandRecord>,
    nikud_dictionary: Vec<(String, String)>,
    vocabulary: Vec<VocabularyItem>,
    phoneme_index: Vec<(String, PhonemeWordList)>,
    minimal_pairs: Vec<MinimalPairSet>,
    processes: Vec<PhonologicalProcess>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl LexiconBuilder {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut builder = Self::empty();

        for (root, meaning, examples) in data::ROOTS {
            builder = builder.with_root(root, meaning, examples);
        }

        builder.patterns = data::PATTERNS
            .iter()
            .map(|(kind, key, name, template, syllables, examples)| PatternRecord {
                kind: *kind,
                key: key.to_string(),
                name: name.to_string(),
                template: template.to_string(),
                syllable_structure: syllables.to_string(),
                examples: owned(examples),
            })
            .collect();

        builder.prefixes = data::PREFIX_PARTICLES
            .iter()
            .map(|(letters, category, label, meaning)| AffixRecord {
                letters: letters.to_string(),
                direction: AffixDirection::Prefix,
                category: *category,
                label: label.to_string(),
                meaning: Some(meaning.to_string()),
                person: None,
                number: None,
                gender: None,
            })
            .collect();
        builder.prefix_sequences = owned(data::PREFIX_SEQUENCES);

        builder.suffixes = data::SUFFIXES
            .iter()
            .map(|(letters, category, label, person, number, gender)| AffixRecord {
                letters: letters.to_string(),
                direction: AffixDirection::Suffix,
                category: *category,
                label: label.to_string(),
                meaning: None,
                person: *person,
                number: *number,
                gender: *gender,
            })
            .collect();

        builder.consonants = data::CONSONANTS
            .iter()
            .map(|(grapheme, symbol, ipa, manner, place, voicing, dagesh, name)| PhonemeRecord {
                grapheme: grapheme.to_string(),
                symbol: symbol.to_string(),
                ipa: ipa.to_string(),
                manner: *manner,
                place: *place,
                voicing: *voicing,
                dagesh: *dagesh,
                name: name.to_string(),
                band: None,
            })
            .collect();

        builder.vowels = data::VOWELS
            .iter()
            .map(|(mark, symbol, ipa, name, length)| VowelRecord {
                mark: *mark,
                symbol: symbol.to_string(),
                ipa: ipa.to_string(),
                name: name.to_string(),
                length: *length,
            })
            .collect();

        builder.bands = data::BANDS
            .iter()
            .map(|(band, max_age, letters, phonemes, description)| BandRecord {
                band: *band,
                max_age: *max_age,
                letters: owned(letters),
                phonemes: owned(phonemes),
                description: description.to_string(),
            })
            .collect();

        for (plain, pointed) in data::NIKUD_DICTIONARY {
            builder = builder.with_dictionary_entry(plain, pointed);
        }

        for (theme, age, word, pointed, gloss, sounds, root) in data::VOCABULARY {
            builder = builder.with_vocabulary_item(VocabularyItem {
                word: word.to_string(),
                pointed: pointed.to_string(),
                gloss: gloss.to_string(),
                target_sounds: owned(sounds),
                themes: vec![*theme],
                age_group: *age,
                root: root.map(str::to_string),
            });
        }

        builder.phoneme_index = data::PHONEME_INDEX
            .iter()
            .map(|(letter, initial, medial, final_)| {
                let list = PhonemeWordList { initial: owned(initial), medial: owned(medial), final_: owned(final_) };
                (letter.to_string(), list)
            })
            .collect();

        builder.minimal_pairs = data::MINIMAL_PAIRS
            .iter()
            .map(|(first, second, pairs)| MinimalPairSet {
                first: first.to_string(),
                second: second.to_string(),
                pairs: pairs
                    .iter()
                    .map(|(w1, w2, m1, m2)| MinimalPair {
                        word1: w1.to_string(),
                        word2: w2.to_string(),
                        meaning1: m1.to_string(),
                        meaning2: m2.to_string(),
                    })
                    .collect(),
            })
            .collect();

        builder.processes = data::PHONOLOGICAL_PROCESSES
            .iter()
            .map(|(name, description, subs, from, to)| PhonologicalProcess {
                name: name.to_string(),
                description: description.to_string(),
                substitutions: subs.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect(),
                typical_age_from: *from,
                typical_age_to: *to,
            })
            .collect();

        builder
    }

    /// Adds or replaces a root. Its letters are the root's characters.
    pub fn with_root(mut self, root: &str, meaning: &str, examples: &[&str]) -> Self {
        self.roots.retain(|r| r.root != root);
        self.roots.push(RootRecord {
            root: root.to_string(),
            letters: root.chars().collect(),
            meaning: meaning.to_string(),
            examples: owned(examples),
        });
        self
    }

    /// Adds or replaces a canonical pointing. The key is always the stripped
    /// pointed form; when `plain` disagrees, the pointed form wins and the
    /// entry is filed under its own skeleton.
    pub fn with_dictionary_entry(mut self, plain: &str, pointed: &str) -> Self {
        let key = script::remove_nikud(pointed);
        if key != plain {
            warn!(plain, pointed, key = %key, "dictionary key does not match pointed form, keying by the pointed form");
        }
        self.nikud_dictionary.retain(|(k, _)| *k != key);
        self.nikud_dictionary.push((key, pointed.to_string()));
        self
    }

    pub fn with_vocabulary_item(mut self, item: VocabularyItem) -> Self {
        self.vocabulary.push(item);
        self
    }

    pub fn build(self) -> Lexicon {
        let bands = self.bands;
        let consonants = self
            .consonants
            .into_iter()
            .map(|mut record| {
                record.band = bands
                    .iter()
                    .filter(|b| b.letters.contains(&record.grapheme))
                    .map(|b| b.band)
                    .max();
                (record.grapheme.clone(), record)
            })
            .collect();

        Lexicon {
            roots: self.roots.into_iter().map(|r| (r.root.clone(), r)).collect(),
            patterns: self.patterns,
            prefixes: self.prefixes,
            prefix_sequences: self.prefix_sequences,
            suffixes: self.suffixes,
            consonants,
            vowels: self.vowels.into_iter().map(|v| (v.mark, v)).collect(),
            bands,
            nikud_dictionary: self.nikud_dictionary.into_iter().collect(),
            vocabulary: self.vocabulary,
            phoneme_index: self.phoneme_index.into_iter().collect(),
            minimal_pairs: self.minimal_pairs,
            processes: self.processes,
        }
    }
}

/// Counts for dashboards; pure read-throughs of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_words: usize,
    pub total_themes: usize,
    pub total_phonemes: usize,
    pub by_theme: BTreeMap<Theme, usize>,
    pub by_age: BTreeMap<AgeGroup, usize>,
    pub by_phoneme: BTreeMap<String, usize>,
}
