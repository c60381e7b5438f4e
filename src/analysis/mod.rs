// src/analysis/mod.rs
//! The three per-word analyzers. Each holds a shared handle to the
//! read-only [`Lexicon`](crate::lexicon::Lexicon) and is `Send + Sync`.

pub mod morphology;
pub mod nikud;
pub mod phonetics;

pub use morphology::{MorphologicalAnalysis, MorphologicalAnalyzer, PatternGuess, RootGuess};
pub use nikud::{NikudAssigner, NikudLevel, NikudMark, NikudOptions, NikudStatistics, NikudValidation};
pub use phonetics::{AgeAppropriateness, ConsonantOccurrence, PhoneticAnalysis, PhoneticAnalyzer, SoundPositions};
