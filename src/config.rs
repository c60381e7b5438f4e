// src/config.rs
//! Engine configuration. Every field has a default, so a JSON file only
//! needs to name what it overrides.

use crate::core::types::AgeGroup;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub validation: ValidationRules,
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub structure: StructureRules,
    pub nikud: NikudRules,
    pub vocabulary: VocabularyRules,
    pub phonetics: PhoneticsRules,
    pub weights: ScoreWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureRules {
    pub min_items: usize,
    pub max_items: usize,
    pub require_title: bool,
    pub require_instructions: bool,
}

impl Default for StructureRules {
    fn default() -> Self {
        Self { min_items: 3, max_items: 12, require_title: true, require_instructions: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NikudRequirement {
    pub required: bool,
    pub min_coverage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NikudRules {
    #[serde(rename = "2-3")]
    pub two_to_three: NikudRequirement,
    #[serde(rename = "3-4")]
    pub three_to_four: NikudRequirement,
    #[serde(rename = "4-6")]
    pub four_to_six: NikudRequirement,
    /// Coverage below which an "add nikud" suggestion is emitted.
    pub suggestion_threshold: f64,
}

impl Default for NikudRules {
    fn default() -> Self {
        Self {
            two_to_three: NikudRequirement { required: true, min_coverage: 90.0 },
            three_to_four: NikudRequirement { required: true, min_coverage: 80.0 },
            four_to_six: NikudRequirement { required: false, min_coverage: 50.0 },
            suggestion_threshold: 50.0,
        }
    }
}

impl NikudRules {
    pub fn for_age(&self, age: AgeGroup) -> NikudRequirement {
        match age {
            AgeGroup::TwoToThree => self.two_to_three,
            AgeGroup::ThreeToFour => self.three_to_four,
            AgeGroup::FourToSix => self.four_to_six,
        }
    }
}

/// Average-difficulty ceilings per age group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyRules {
    #[serde(rename = "2-3")]
    pub two_to_three: f64,
    #[serde(rename = "3-4")]
    pub three_to_four: f64,
    #[serde(rename = "4-6")]
    pub four_to_six: f64,
}

impl Default for VocabularyRules {
    fn default() -> Self {
        Self {
            two_to_three: f64::from(AgeGroup::TwoToThree.max_complexity()),
            three_to_four: f64::from(AgeGroup::ThreeToFour.max_complexity()),
            four_to_six: f64::from(AgeGroup::FourToSix.max_complexity()),
        }
    }
}

impl VocabularyRules {
    pub fn max_complexity(&self, age: AgeGroup) -> f64 {
        match age {
            AgeGroup::TwoToThree => self.two_to_three,
            AgeGroup::ThreeToFour => self.three_to_four,
            AgeGroup::FourToSix => self.four_to_six,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneticsRules {
    pub min_occurrences: usize,
    /// Share of words carrying the target at which the score reaches 100.
    pub saturation_frequency: f64,
}

impl Default for PhoneticsRules {
    fn default() -> Self {
        Self { min_occurrences: 3, saturation_frequency: 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub structure: f64,
    pub nikud: f64,
    pub vocabulary: f64,
    pub phonetics: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { structure: 0.3, nikud: 0.2, vocabulary: 0.3, phonetics: 0.2 }
    }
}
