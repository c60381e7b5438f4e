// src/lib.rs

pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod interfaces;
pub mod lexicon;
pub mod persistence;
pub mod validator;
pub mod vocabulary;

pub use crate::config::{EngineConfig, ValidationRules};
pub use crate::core::engine::{ActivityMetadata, HebrewEngine, VocabularyCriteria, WordBundle};
pub use crate::core::types::{AgeGroup, Confidence, Language, SoundPosition, TargetAge, Theme};
pub use crate::error::{EngineError, Result};
pub use crate::lexicon::{Lexicon, LexiconBuilder};
pub use crate::validator::content::{ActivityParams, GeneratedContent};
pub use crate::validator::report::{FlatReport, ValidationReport};
