// src/core/types.rs
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three age buckets every activity is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum AgeGroup {
    #[serde(rename = "2-3")]
    TwoToThree,
    #[default]
    #[serde(rename = "3-4")]
    ThreeToFour,
    #[serde(rename = "4-6")]
    FourToSix,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::TwoToThree, AgeGroup::ThreeToFour, AgeGroup::FourToSix];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::TwoToThree => "2-3",
            AgeGroup::ThreeToFour => "3-4",
            AgeGroup::FourToSix => "4-6",
        }
    }

    /// Upper age of the bucket, in years.
    pub fn max_age(self) -> u8 {
        match self {
            AgeGroup::TwoToThree => 3,
            AgeGroup::ThreeToFour => 4,
            AgeGroup::FourToSix => 6,
        }
    }

    /// Highest phonological complexity (0-10) a word may have for this bucket.
    pub fn max_complexity(self) -> u8 {
        match self {
            AgeGroup::TwoToThree => 3,
            AgeGroup::ThreeToFour => 5,
            AgeGroup::FourToSix => 8,
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2-3" => Ok(AgeGroup::TwoToThree),
            "3-4" => Ok(AgeGroup::ThreeToFour),
            "4-6" => Ok(AgeGroup::FourToSix),
            other => Err(EngineError::UnknownAgeGroup(other.to_string())),
        }
    }
}

/// Minimum age at which a word's sounds are expected to be produced.
/// Unlike [`AgeGroup`] this has an open-ended top bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetAge {
    #[serde(rename = "2-3")]
    TwoToThree,
    #[serde(rename = "3-4")]
    ThreeToFour,
    #[serde(rename = "4-6")]
    FourToSix,
    #[serde(rename = "6+")]
    SixPlus,
}

impl TargetAge {
    pub fn from_max_age(max_age: u8) -> Self {
        match max_age {
            0..=3 => TargetAge::TwoToThree,
            4 => TargetAge::ThreeToFour,
            5..=6 => TargetAge::FourToSix,
            _ => TargetAge::SixPlus,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetAge::TwoToThree => "2-3",
            TargetAge::ThreeToFour => "3-4",
            TargetAge::FourToSix => "4-6",
            TargetAge::SixPlus => "6+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    He,
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "he" => Ok(Language::He),
            other => Err(EngineError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Where a target sound sits in a word. Positions are assigned by index,
/// not by phonological syllable boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SoundPosition {
    Initial,
    Medial,
    Final,
    #[default]
    Any,
}

impl SoundPosition {
    /// Exclusive classification used when partitioning a word: the first
    /// index is initial, the last is final, everything else medial.
    pub fn classify(index: usize, len: usize) -> SoundPosition {
        if index == 0 {
            SoundPosition::Initial
        } else if index + 1 == len {
            SoundPosition::Final
        } else {
            SoundPosition::Medial
        }
    }

    /// Whether `index` of a `len`-long sequence occupies this position.
    /// Each position is checked on its own, so a lone letter is both
    /// initial and final.
    pub fn matches(self, index: usize, len: usize) -> bool {
        let is_first = index == 0;
        let is_last = index + 1 == len;
        match self {
            SoundPosition::Initial => is_first,
            SoundPosition::Final => is_last,
            SoundPosition::Medial => !is_first && !is_last,
            SoundPosition::Any => index < len,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SoundPosition::Initial => "initial",
            SoundPosition::Medial => "medial",
            SoundPosition::Final => "final",
            SoundPosition::Any => "any",
        }
    }
}

impl fmt::Display for SoundPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundPosition {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "initial" => Ok(SoundPosition::Initial),
            "medial" => Ok(SoundPosition::Medial),
            "final" => Ok(SoundPosition::Final),
            "any" => Ok(SoundPosition::Any),
            other => Err(EngineError::UnknownSoundPosition(other.to_string())),
        }
    }
}

/// How sure a derived linguistic guess is. `High` is reserved for exact
/// lexicon hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Vocabulary themes of the curated bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Animals,
    Food,
    Family,
    BodyParts,
    Actions,
    Colors,
    IsraeliCulture,
    Emotions,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Animals,
        Theme::Food,
        Theme::Family,
        Theme::BodyParts,
        Theme::Actions,
        Theme::Colors,
        Theme::IsraeliCulture,
        Theme::Emotions,
    ];

    /// Themes that make up the high-frequency functional subset.
    pub const HIGH_FREQUENCY: [Theme; 5] =
        [Theme::Family, Theme::Actions, Theme::BodyParts, Theme::Emotions, Theme::Food];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Animals => "animals",
            Theme::Food => "food",
            Theme::Family => "family",
            Theme::BodyParts => "body_parts",
            Theme::Actions => "actions",
            Theme::Colors => "colors",
            Theme::IsraeliCulture => "israeli_culture",
            Theme::Emotions => "emotions",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == key)
            .ok_or_else(|| EngineError::UnknownTheme(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_group_parses_and_displays() {
        assert_eq!("4-6".parse::<AgeGroup>().unwrap(), AgeGroup::FourToSix);
        assert_eq!(AgeGroup::TwoToThree.to_string(), "2-3");
        assert!(matches!("7-9".parse::<AgeGroup>(), Err(EngineError::UnknownAgeGroup(_))));
    }

    #[test]
    fn age_group_serializes_as_bucket_label() {
        let json = serde_json::to_string(&AgeGroup::ThreeToFour).unwrap();
        assert_eq!(json, "\"3-4\"");
    }

    #[test]
    fn target_age_buckets() {
        assert_eq!(TargetAge::from_max_age(2), TargetAge::TwoToThree);
        assert_eq!(TargetAge::from_max_age(4), TargetAge::ThreeToFour);
        assert_eq!(TargetAge::from_max_age(6), TargetAge::FourToSix);
        assert_eq!(TargetAge::from_max_age(8), TargetAge::SixPlus);
    }

    #[test]
    fn lone_letter_is_initial_and_final_by_separate_checks() {
        assert!(SoundPosition::Initial.matches(0, 1));
        assert!(SoundPosition::Final.matches(0, 1));
        assert!(!SoundPosition::Medial.matches(0, 1));
        assert_eq!(SoundPosition::classify(0, 1), SoundPosition::Initial);
    }

    #[test]
    fn theme_round_trips_through_its_label() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert!("dinosaurs".parse::<Theme>().is_err());
    }
}
