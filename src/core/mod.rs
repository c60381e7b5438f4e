// src/core/mod.rs
pub mod context;
pub mod engine;
pub mod script;
pub mod transcription;
pub mod trie;
pub mod types;
