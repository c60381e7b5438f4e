// src/analysis/morphology.rs
//! Best-effort morphological decomposition: affix stripping, root guessing,
//! pattern (binyan) inference, syllabification and a phonological
//! complexity score used for age filtering.
//!
//! Root extraction from a surface form is ambiguous without a full lexicon,
//! so every guess carries a [`Confidence`] tier instead of failing.

use crate::core::script;
use crate::core::trie::AffixTrie;
use crate::core::types::{AgeGroup, Confidence};
use crate::lexicon::records::{AffixRecord, PatternKind, RootRecord};
use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const UNKNOWN_MEANING: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootGuess {
    pub letters: Vec<char>,
    pub meaning: String,
    pub confidence: Confidence,
}

impl RootGuess {
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGuess {
    pub kind: PatternKind,
    pub name: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphologicalAnalysis {
    pub original: String,
    pub cleaned: String,
    /// One record per prefix letter, in reading order.
    pub prefixes: Vec<AffixRecord>,
    pub suffix: Option<AffixRecord>,
    pub stem: String,
    /// `None` when the stem has fewer than three consonants.
    pub root: Option<RootGuess>,
    pub pattern: PatternGuess,
    pub syllables: Vec<String>,
    /// Phonological complexity, 0-10.
    pub complexity: u8,
}

/// Stateless analyzer over a shared lexicon. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MorphologicalAnalyzer {
    lexicon: Arc<Lexicon>,
    prefix_trie: Arc<AffixTrie>,
    suffix_trie: Arc<AffixTrie>,
}

impl MorphologicalAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let mut prefix_trie = AffixTrie::new();
        for (id, sequence) in lexicon.prefix_sequences().iter().enumerate() {
            prefix_trie.insert(sequence.chars(), id);
        }
        let mut suffix_trie = AffixTrie::new();
        for (id, suffix) in lexicon.suffixes().iter().enumerate() {
            suffix_trie.insert(suffix.letters.chars().rev(), id);
        }
        Self { lexicon, prefix_trie: Arc::new(prefix_trie), suffix_trie: Arc::new(suffix_trie) }
    }

    /// Decomposes a word. Returns `None` only for empty or letterless input;
    /// unrecognized words come back with low-confidence guesses.
    pub fn analyze(&self, word: &str) -> Option<MorphologicalAnalysis> {
        let cleaned = script::clean_word(word);
        if cleaned.is_empty() {
            return None;
        }
        let letters: Vec<char> = cleaned.chars().collect();

        // At most one prefix sequence and one suffix. A prefix may take the
        // whole word; a suffix must leave a non-empty stem.
        let (prefix_len, prefixes) = match self.prefix_trie.longest_match(letters.iter().copied(), letters.len()) {
            Some((len, id)) => {
                let sequence = &self.lexicon.prefix_sequences()[id];
                let records = sequence.chars().filter_map(|c| self.lexicon.prefix(c)).cloned().collect();
                (len, records)
            }
            None => (0, Vec::new()),
        };
        let rest = &letters[prefix_len..];

        let (suffix_len, suffix) = match self.suffix_trie.longest_match(rest.iter().rev().copied(), rest.len().saturating_sub(1)) {
            Some((len, id)) => (len, Some(self.lexicon.suffixes()[id].clone())),
            None => (0, None),
        };
        let stem: String = rest[..rest.len() - suffix_len].iter().collect();

        let root = self.identify_root(&stem);
        let pattern = self.identify_stem_pattern(&stem);
        let syllables = script::syllabify(&cleaned);
        let complexity = complexity_score(syllables.len(), prefixes.len(), usize::from(suffix.is_some()), &pattern);

        let analysis = MorphologicalAnalysis {
            original: word.to_string(),
            cleaned,
            prefixes,
            suffix,
            stem,
            root,
            pattern,
            syllables,
            complexity,
        };
        debug!(
            word,
            stem = %analysis.stem,
            root = ?analysis.root.as_ref().map(RootGuess::as_string),
            pattern = ?analysis.pattern.kind,
            complexity = analysis.complexity,
            "morphological analysis"
        );
        Some(analysis)
    }

    pub fn extract_root(&self, word: &str) -> Option<RootGuess> {
        self.analyze(word).and_then(|a| a.root)
    }

    pub fn identify_pattern(&self, word: &str) -> Option<PatternGuess> {
        self.analyze(word).map(|a| a.pattern)
    }

    pub fn syllabify(&self, word: &str) -> Vec<String> {
        script::syllabify(&script::clean_word(word))
    }

    /// Complexity of `word`, 0 when it cannot be analyzed.
    pub fn assess_complexity(&self, word: &str) -> u8 {
        self.analyze(word).map_or(0, |a| a.complexity)
    }

    /// Cataloged members of a root's word family; empty for unknown roots.
    pub fn word_family(&self, root: &str) -> &[String] {
        self.lexicon.root(root).map_or(&[], |r| r.examples.as_slice())
    }

    /// Words whose complexity fits the age ceiling, simplest first. Ties
    /// keep their input order.
    pub fn filter_by_complexity<S: AsRef<str>>(&self, words: &[S], age: AgeGroup) -> Vec<String> {
        let ceiling = age.max_complexity();
        let mut scored: Vec<(u8, &str)> = words
            .iter()
            .map(|w| (self.assess_complexity(w.as_ref()), w.as_ref()))
            .filter(|(complexity, _)| *complexity <= ceiling)
            .collect();
        scored.sort_by_key(|(complexity, _)| *complexity);
        scored.into_iter().map(|(_, w)| w.to_string()).collect()
    }

    pub fn all_roots(&self) -> Vec<&RootRecord> {
        self.lexicon.roots().collect()
    }

    /// Roots whose example words average within the age ceiling.
    pub fn roots_for_age(&self, age: AgeGroup) -> Vec<&RootRecord> {
        let ceiling = f64::from(age.max_complexity());
        self.lexicon
            .roots()
            .filter(|root| {
                if root.examples.is_empty() {
                    return false;
                }
                let total: u32 = root.examples.iter().map(|w| u32::from(self.assess_complexity(w))).sum();
                f64::from(total) / root.examples.len() as f64 <= ceiling
            })
            .collect()
    }

    fn identify_root(&self, stem: &str) -> Option<RootGuess> {
        if let Some(record) = self.lexicon.root(stem) {
            return Some(guess_from(record, Confidence::High));
        }

        let consonants = consonant_skeleton(stem);
        if consonants.len() < 3 {
            return None;
        }
        let candidate: String = consonants[..3].iter().collect();
        match self.lexicon.root(&candidate) {
            Some(record) => Some(guess_from(record, Confidence::Medium)),
            None => Some(RootGuess {
                letters: consonants[..3].to_vec(),
                meaning: UNKNOWN_MEANING.to_string(),
                confidence: Confidence::Low,
            }),
        }
    }

    fn identify_stem_pattern(&self, stem: &str) -> PatternGuess {
        let len = stem.chars().count();
        let (kind, confidence) = if stem.starts_with("הת") && len >= 5 {
            (PatternKind::Reflexive, Confidence::High)
        } else if stem.starts_with('מ') && len >= 4 {
            (PatternKind::Participle, Confidence::Medium)
        } else if stem.starts_with('ה') && len >= 4 {
            (PatternKind::Causative, Confidence::Medium)
        } else if stem.starts_with('נ') && len >= 4 {
            (PatternKind::Passive, Confidence::Medium)
        } else {
            (PatternKind::Basic, Confidence::Low)
        };
        let name = self.lexicon.pattern(kind).map_or_else(|| format!("{kind:?}"), |p| p.name.clone());
        PatternGuess { kind, name, confidence }
    }
}

fn guess_from(record: &RootRecord, confidence: Confidence) -> RootGuess {
    RootGuess { letters: record.letters.clone(), meaning: record.meaning.clone(), confidence }
}

/// Stem letters with word-internal vav/yod dropped, since those usually
/// carry a vowel rather than a root consonant.
pub fn consonant_skeleton(stem: &str) -> Vec<char> {
    let letters: Vec<char> = stem.chars().collect();
    let last = letters.len().saturating_sub(1);
    letters
        .iter()
        .enumerate()
        .filter(|&(i, &c)| !((c == 'ו' || c == 'י') && i > 0 && i < last))
        .map(|(_, &c)| c)
        .collect()
}

/// `round(1.5 × (syllables + 0.5·prefixes + 0.5·suffixes + low-pattern penalty))`, capped at 10.
fn complexity_score(syllables: usize, prefixes: usize, suffixes: usize, pattern: &PatternGuess) -> u8 {
    let penalty = if pattern.confidence == Confidence::Low { 1.0 } else { 0.0 };
    let raw = syllables as f64 + 0.5 * prefixes as f64 + 0.5 * suffixes as f64 + penalty;
    (raw * 1.5).round().clamp(0.0, 10.0) as u8
}
