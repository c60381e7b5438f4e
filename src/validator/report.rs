// src/validator/report.rs
use crate::analysis::morphology::MorphologicalAnalysis;
use crate::config::ScoreWeights;
use crate::core::types::SoundPosition;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingTitle,
    MissingInstructions,
    MissingItems,
    InsufficientItems,
    TooManyItems,
    InsufficientNikud,
    NoHebrewWords,
    InappropriateVocabulary,
    InsufficientTargetSound,
    WrongSoundPosition,
    NonHebrewCharacters,
    UnknownRoot,
    LowConfidenceRoot,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::MissingTitle => "missing_title",
            IssueKind::MissingInstructions => "missing_instructions",
            IssueKind::MissingItems => "missing_items",
            IssueKind::InsufficientItems => "insufficient_items",
            IssueKind::TooManyItems => "too_many_items",
            IssueKind::InsufficientNikud => "insufficient_nikud",
            IssueKind::NoHebrewWords => "no_hebrew_words",
            IssueKind::InappropriateVocabulary => "inappropriate_vocabulary",
            IssueKind::InsufficientTargetSound => "insufficient_target_sound",
            IssueKind::WrongSoundPosition => "wrong_sound_position",
            IssueKind::NonHebrewCharacters => "non_hebrew_characters",
            IssueKind::UnknownRoot => "unknown_root",
            IssueKind::LowConfidenceRoot => "low_confidence_root",
        }
    }
}

/// A typed content defect or observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    /// Words the issue is about, when it concerns specific words.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    AddNikud,
    SimplifyVocabulary,
    AddCulturalContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub message: String,
}

/// Per-axis scores, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub structure: f64,
    pub nikud: f64,
    pub vocabulary: f64,
    pub phonetics: f64,
}

impl Scores {
    pub fn weighted(&self, weights: &ScoreWeights) -> f64 {
        weights.structure * self.structure
            + weights.nikud * self.nikud
            + weights.vocabulary * self.vocabulary
            + weights.phonetics * self.phonetics
    }
}

/// Where a target sound was found across an activity's words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSoundSummary {
    pub target: String,
    pub position: SoundPosition,
    pub initial: usize,
    pub medial: usize,
    #[serde(rename = "final")]
    pub final_: usize,
    /// Words carrying the target anywhere.
    pub total: usize,
    pub required: usize,
    pub words_with_target: Vec<String>,
    pub words_without_target: Vec<String>,
}

impl TargetSoundSummary {
    /// Count relevant to the requested position.
    pub fn count_at_position(&self) -> usize {
        match self.position {
            SoundPosition::Initial => self.initial,
            SoundPosition::Medial => self.medial,
            SoundPosition::Final => self.final_,
            SoundPosition::Any => self.total,
        }
    }

    pub fn is_sufficient(&self) -> bool {
        self.count_at_position() >= self.required
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ContentIssue>,
    pub warnings: Vec<ContentIssue>,
    pub suggestions: Vec<Suggestion>,
    pub scores: Scores,
    pub overall_score: f64,
    /// Present only when the activity targets a sound.
    pub target_sound: Option<TargetSoundSummary>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
            scores: Scores::default(),
            overall_score: 0.0,
            target_sound: None,
        }
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: IssueKind, message: impl Into<String>) {
        self.errors.push(ContentIssue { kind, severity: Severity::Error, message: message.into(), words: Vec::new() });
    }

    pub fn warning(&mut self, kind: IssueKind, message: impl Into<String>, words: Vec<String>) {
        self.warnings.push(ContentIssue { kind, severity: Severity::Warning, message: message.into(), words });
    }

    pub fn suggest(&mut self, kind: SuggestionKind, priority: Priority, message: impl Into<String>) {
        self.suggestions.push(Suggestion { kind, priority, message: message.into() });
    }

    pub fn has_error(&self, kind: IssueKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn has_warning(&self, kind: IssueKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }

    pub fn has_suggestion(&self, kind: SuggestionKind) -> bool {
        self.suggestions.iter().any(|s| s.kind == kind)
    }

    /// Derives validity and the overall score from what has been recorded.
    pub fn finalize(&mut self, weights: &ScoreWeights) {
        self.is_valid = self.errors.is_empty();
        self.overall_score = self.scores.weighted(weights);
    }

    /// A short human-readable rendering for logs and the inspect tool.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let status = if self.is_valid { "VALID" } else { "INVALID" };
        let _ = writeln!(out, "{status} (overall {:.1})", self.overall_score);
        let _ = writeln!(
            out,
            "  structure {:.0} | nikud {:.0} | vocabulary {:.0} | phonetics {:.0}",
            self.scores.structure, self.scores.nikud, self.scores.vocabulary, self.scores.phonetics
        );
        for issue in self.errors.iter().chain(&self.warnings) {
            let tag = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let _ = write!(out, "  [{tag}] {}: {}", issue.kind.as_str(), issue.message);
            if !issue.words.is_empty() {
                let _ = write!(out, " ({})", issue.words.join(", "));
            }
            out.push('\n');
        }
        for suggestion in &self.suggestions {
            let _ = writeln!(out, "  [suggest/{:?}] {}", suggestion.priority, suggestion.message);
        }
        if let Some(target) = &self.target_sound {
            let _ = writeln!(
                out,
                "  target {} @ {}: initial {}, medial {}, final {} (need {})",
                target.target, target.position, target.initial, target.medial, target.final_, target.required
            );
        }
        out
    }

    pub fn to_record(&self) -> FlatReport {
        let kinds = |issues: &[ContentIssue]| issues.iter().map(|i| i.kind.as_str()).collect::<Vec<_>>().join(",");
        FlatReport {
            is_valid: self.is_valid,
            error_count: self.errors.len(),
            warning_count: self.warnings.len(),
            suggestion_count: self.suggestions.len(),
            structure_score: self.scores.structure,
            nikud_score: self.scores.nikud,
            vocabulary_score: self.scores.vocabulary,
            phonetics_score: self.scores.phonetics,
            overall_score: self.overall_score,
            error_kinds: kinds(self.errors.as_slice()),
            warning_kinds: kinds(self.warnings.as_slice()),
            target_sound: self.target_sound.as_ref().map(|t| t.target.clone()),
            target_sound_count: self.target_sound.as_ref().map(TargetSoundSummary::count_at_position),
        }
    }
}

/// Column-friendly form of a [`ValidationReport`] for analytics stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatReport {
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub suggestion_count: usize,
    pub structure_score: f64,
    pub nikud_score: f64,
    pub vocabulary_score: f64,
    pub phonetics_score: f64,
    pub overall_score: f64,
    pub error_kinds: String,
    pub warning_kinds: String,
    pub target_sound: Option<String>,
    pub target_sound_count: Option<usize>,
}

/// Checks on a single word, independent of any activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordValidation {
    pub word: String,
    pub is_valid: bool,
    pub errors: Vec<ContentIssue>,
    pub warnings: Vec<ContentIssue>,
    pub morphology: Option<MorphologicalAnalysis>,
}
