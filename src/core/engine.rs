use crate::analysis::morphology::{MorphologicalAnalysis, MorphologicalAnalyzer};
use crate::analysis::nikud::{NikudAssigner, NikudLevel, NikudOptions, NikudStatistics};
use crate::analysis::phonetics::{PhoneticAnalysis, PhoneticAnalyzer};
use crate::config::EngineConfig;
use crate::core::types::{AgeGroup, SoundPosition, Theme};
use crate::error::Result;
use crate::interfaces::{ContentSource, PersistenceSink, ReportConsumer};
use crate::lexicon::records::VocabularyItem;
use crate::lexicon::{CatalogStatistics, Lexicon};
use crate::persistence::{load_snapshot, save_snapshot};
use crate::validator::content::{ActivityParams, GeneratedContent};
use crate::validator::report::{ValidationReport, WordValidation};
use crate::validator::ContentValidator;
use crate::vocabulary::VocabularyBank;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything the engine knows about one word, for metadata enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBundle {
    pub word: String,
    pub morphology: Option<MorphologicalAnalysis>,
    pub phonetics: Option<PhoneticAnalysis>,
    pub pointed_form: String,
    pub validation: WordValidation,
}

/// What gets written back onto an activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetadata {
    pub report: ValidationReport,
    pub nikud: NikudStatistics,
    pub words: Vec<WordBundle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyCriteria {
    pub age_group: AgeGroup,
    pub theme: Option<Theme>,
    pub target_sound: Option<String>,
    pub position: SoundPosition,
    pub limit: Option<usize>,
}

// The engine composes the analyzers over one shared lexicon. It holds no
// mutable state, so a single instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct HebrewEngine {
    lexicon: Arc<Lexicon>,
    config: EngineConfig,
    pub morphology: MorphologicalAnalyzer,
    pub phonetics: PhoneticAnalyzer,
    pub nikud: NikudAssigner,
    pub vocabulary: VocabularyBank,
    validator: ContentValidator,
}

impl HebrewEngine {
    pub fn new(lexicon: Arc<Lexicon>, config: EngineConfig) -> Self {
        Self {
            morphology: MorphologicalAnalyzer::new(Arc::clone(&lexicon)),
            phonetics: PhoneticAnalyzer::new(Arc::clone(&lexicon)),
            nikud: NikudAssigner::new(Arc::clone(&lexicon)),
            vocabulary: VocabularyBank::new(Arc::clone(&lexicon)),
            validator: ContentValidator::new(Arc::clone(&lexicon), config.validation.clone()),
            lexicon,
            config,
        }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(Lexicon::standard()), EngineConfig::default())
    }

    /// Loads the lexicon from a snapshot, falling back to the built-in
    /// tables when the file is missing or unreadable.
    pub fn from_snapshot_or_standard(path: &Path, config: EngineConfig) -> Self {
        let lexicon = load_snapshot(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "snapshot unavailable, using built-in lexicon");
            Lexicon::standard()
        });
        Self::new(Arc::new(lexicon), config)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        save_snapshot(&self.lexicon, path)
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validator(&self) -> &ContentValidator {
        &self.validator
    }

    pub fn analyze_word(&self, word: &str) -> WordBundle {
        WordBundle {
            word: word.to_string(),
            morphology: self.morphology.analyze(word),
            phonetics: self.phonetics.analyze(word),
            pointed_form: self.nikud.assign_word(word, NikudLevel::Full, false),
            validation: self.validator.validate_word(word),
        }
    }

    /// Points `text` at the level recommended for the age group.
    pub fn prepare_text_for_age(&self, text: &str, age: AgeGroup) -> String {
        let options = NikudOptions { age_group: age, level: NikudLevel::Auto.resolve(age), ..NikudOptions::default() };
        self.nikud.assign(text, &options)
    }

    /// Catalog entries for the age matching the optional theme and target
    /// sound, in catalog order, capped at `limit`.
    pub fn vocabulary(&self, criteria: &VocabularyCriteria) -> Vec<&VocabularyItem> {
        let mut items: Vec<&VocabularyItem> = match criteria.theme {
            Some(theme) => self.vocabulary.by_theme(theme, criteria.age_group),
            None => self.vocabulary.all_for_age(criteria.age_group),
        };
        if let Some(sound) = criteria.target_sound.as_deref() {
            items.retain(|item| !self.phonetics.filter_by_sound(&[item.word.as_str()], sound, criteria.position).is_empty());
        }
        if let Some(limit) = criteria.limit {
            items.truncate(limit);
        }
        items
    }

    pub fn validate_activity(&self, content: &GeneratedContent, params: &ActivityParams) -> ValidationReport {
        self.validator.validate(content, params)
    }

    /// Validation report plus per-word bundles for every Hebrew word.
    pub fn enrich_activity(&self, content: &GeneratedContent, params: &ActivityParams) -> ActivityMetadata {
        let report = self.validate_activity(content, params);
        let words = self
            .validator
            .extract_hebrew_words(content)
            .iter()
            .map(|word| self.analyze_word(word))
            .collect();
        let nikud = self.nikud.statistics(&content.flattened_text());
        ActivityMetadata { report, nikud, words }
    }

    pub fn statistics(&self) -> CatalogStatistics {
        self.vocabulary.statistics()
    }

    /// Fetches content, enriches it, stores the metadata and hands the flat
    /// report to the consumer. Collaborator failures propagate; content
    /// defects only show up inside the report.
    pub fn process<S, P, C>(
        &self,
        activity_id: &str,
        params: &ActivityParams,
        source: &S,
        sink: &mut P,
        consumer: &mut C,
    ) -> Result<ActivityMetadata>
    where
        S: ContentSource + ?Sized,
        P: PersistenceSink + ?Sized,
        C: ReportConsumer + ?Sized,
    {
        let content = source.fetch(params)?;
        let metadata = self.enrich_activity(&content, params);
        sink.store(activity_id, &metadata)?;
        consumer.consume(activity_id, &metadata.report.to_record());
        info!(activity_id, is_valid = metadata.report.is_valid, words = metadata.words.len(), "activity processed");
        Ok(metadata)
    }
}

impl Default for HebrewEngine {
    fn default() -> Self {
        Self::standard()
    }
}
