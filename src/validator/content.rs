// src/validator/content.rs
//! Loosely-typed activity payloads as they arrive from a generator.

use crate::core::types::{AgeGroup, Language, SoundPosition};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A generated activity. Only `title`, `instructions` and `items` are
/// inspected; activity-specific arrays are carried along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    /// Usually an array of strings or objects, but nothing is assumed.
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GeneratedContent {
    pub fn new(title: &str, instructions: &str, items: &[&str]) -> Self {
        Self {
            title: Some(title.to_string()),
            instructions: Some(instructions.to_string()),
            items: Some(Value::Array(items.iter().map(|s| Value::String(s.to_string())).collect())),
            extra: Map::new(),
        }
    }

    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Non-blank title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// The item list, when `items` is an array.
    pub fn items(&self) -> Option<&Vec<Value>> {
        self.items.as_ref().and_then(Value::as_array)
    }

    /// Title, instructions and items joined by spaces. String items are
    /// taken as-is, anything else as compact JSON.
    pub fn flattened_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.title.iter().cloned());
        parts.extend(self.instructions.iter().cloned());
        if let Some(items) = self.items() {
            parts.extend(items.iter().map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }));
        }
        parts.join(" ")
    }

    /// Title, instructions, string items and the string-valued fields of
    /// object items. Arrays and objects nested inside items are skipped.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        fields.extend(self.title.as_deref());
        fields.extend(self.instructions.as_deref());
        for item in self.items().into_iter().flatten() {
            match item {
                Value::String(s) => fields.push(s),
                Value::Object(map) => fields.extend(map.values().filter_map(Value::as_str)),
                _ => {}
            }
        }
        fields
    }
}

/// Generation parameters an activity was produced with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityParams {
    pub activity_type: String,
    pub age_group: AgeGroup,
    pub language: Language,
    pub target_sound: Option<String>,
    pub sound_position: SoundPosition,
    pub theme: Option<String>,
}

impl ActivityParams {
    pub fn hebrew(age_group: AgeGroup) -> Self {
        Self { age_group, language: Language::He, ..Self::default() }
    }

    pub fn with_target(mut self, sound: &str, position: SoundPosition) -> Self {
        self.target_sound = Some(sound.to_string());
        self.sound_position = position;
        self
    }

    pub fn with_theme(mut self, theme: &str) -> Self {
        self.theme = Some(theme.to_string());
        self
    }

    /// The target sound, when one is set and non-blank.
    pub fn target(&self) -> Option<&str> {
        self.target_sound.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_loose_payloads() {
        let content = GeneratedContent::from_json_str(
            r#"{"title": "חיות", "items": [{"word": "כלב", "options": ["חתול", 3]}, "דג", 7], "pairs": []}"#,
        )
        .unwrap();
        assert_eq!(content.title(), Some("חיות"));
        assert_eq!(content.instructions(), None);
        assert_eq!(content.items().map(Vec::len), Some(3));
        assert!(content.extra.contains_key("pairs"));
        assert_eq!(content.text_fields(), vec!["חיות", "כלב", "דג"]);
    }

    #[test]
    fn nested_arrays_inside_items_are_not_text() {
        let content = GeneratedContent::from_json_str(
            r#"{"title": "צבעים", "instructions": "בחרו", "items": [{"word": "אדום", "options": ["כחול", "ירוק"], "meta": {"hint": "שמש"}}]}"#,
        )
        .unwrap();
        assert_eq!(content.text_fields(), vec!["צבעים", "בחרו", "אדום"]);
    }

    #[test]
    fn non_array_items_are_not_a_list() {
        let content = GeneratedContent::from_json_str(r#"{"title": "x", "items": "כלב"}"#).unwrap();
        assert!(content.items().is_none());
        assert_eq!(content.flattened_text(), "x");
    }

    #[test]
    fn flattened_text_stringifies_objects() {
        let content = GeneratedContent::from_json_str(r#"{"title": "א", "instructions": "ב", "items": ["ג", {"w": "ד"}]}"#)
            .unwrap();
        assert_eq!(content.flattened_text(), r#"א ב ג {"w":"ד"}"#);
    }

    #[test]
    fn blank_title_counts_as_missing() {
        let content = GeneratedContent::new("  ", "הוראות", &[]);
        assert!(content.title().is_none());
    }

    #[test]
    fn params_from_json() {
        let params: ActivityParams =
            serde_json::from_str(r#"{"age_group": "2-3", "language": "he", "target_sound": "ש", "sound_position": "initial"}"#)
                .unwrap();
        assert_eq!(params.age_group, AgeGroup::TwoToThree);
        assert_eq!(params.target(), Some("ש"));
        assert_eq!(params.sound_position, SoundPosition::Initial);
        assert_eq!(ActivityParams::default().sound_position, SoundPosition::Any);
    }
}
