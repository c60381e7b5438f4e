// src/interfaces.rs
//! Seams to the collaborators around the engine. The engine only ever sees
//! these traits; HTTP clients, databases and dashboards live elsewhere.

use crate::core::engine::ActivityMetadata;
use crate::error::Result;
use crate::validator::content::{ActivityParams, GeneratedContent};
use crate::validator::report::FlatReport;

/// Supplies raw generated activity text for a locale, age and target sound.
pub trait ContentSource {
    fn fetch(&self, params: &ActivityParams) -> Result<GeneratedContent>;
}

/// Stores the linguistic metadata computed for an activity record.
pub trait PersistenceSink {
    fn store(&mut self, activity_id: &str, metadata: &ActivityMetadata) -> Result<()>;
}

/// Reads flattened scores for analytics and reporting.
pub trait ReportConsumer {
    fn consume(&mut self, activity_id: &str, record: &FlatReport);
}

/// Content that is already at hand.
impl ContentSource for GeneratedContent {
    fn fetch(&self, _params: &ActivityParams) -> Result<GeneratedContent> {
        Ok(self.clone())
    }
}

/// Keeps everything in memory; handy for batch jobs and tests.
impl PersistenceSink for Vec<(String, ActivityMetadata)> {
    fn store(&mut self, activity_id: &str, metadata: &ActivityMetadata) -> Result<()> {
        self.push((activity_id.to_string(), metadata.clone()));
        Ok(())
    }
}

impl ReportConsumer for Vec<(String, FlatReport)> {
    fn consume(&mut self, activity_id: &str, record: &FlatReport) {
        self.push((activity_id.to_string(), record.clone()));
    }
}
