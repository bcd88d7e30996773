//! Character model for Star Wars API people resources.

use serde::Deserialize;

/// The fields of a `people` resource the demo prints.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl Character {
    /// Parses a JSON payload.
    pub fn from_payload(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// One-line description, e.g. `Luke Skywalker (male, born 19BBY)`.
    pub fn summary(&self) -> String {
        match (&self.gender, &self.birth_year) {
            (Some(gender), Some(born)) => format!("{} ({}, born {})", self.name, gender, born),
            (Some(gender), None) => format!("{} ({})", self.name, gender),
            (None, Some(born)) => format!("{} (born {})", self.name, born),
            (None, None) => self.name.clone(),
        }
    }
}

/// Summarizes a payload, falling back to a truncated raw form when it is not a character.
pub fn describe(payload: &str) -> String {
    const RAW_PREVIEW_CHARS: usize = 80;

    match Character::from_payload(payload) {
        Ok(character) => character.summary(),
        Err(_) => {
            let preview: String = payload.chars().take(RAW_PREVIEW_CHARS).collect();
            if preview.len() < payload.len() {
                format!("{}...", preview)
            } else {
                preview
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUKE: &str = r#"{
        "name": "Luke Skywalker",
        "height": "172",
        "birth_year": "19BBY",
        "gender": "male",
        "url": "https://swapi.dev/api/people/1/"
    }"#;

    #[test]
    fn test_character_deserialize() {
        let character = Character::from_payload(LUKE).unwrap();
        assert_eq!(character.name, "Luke Skywalker");
        assert_eq!(character.birth_year.as_deref(), Some("19BBY"));
        assert_eq!(character.summary(), "Luke Skywalker (male, born 19BBY)");
    }

    #[test]
    fn test_character_missing_optional_fields() {
        let character = Character::from_payload(r#"{"name": "R2-D2"}"#).unwrap();
        assert_eq!(character.summary(), "R2-D2");
    }

    #[test]
    fn test_describe_falls_back_to_raw() {
        assert_eq!(describe("not json"), "not json");

        let long = "x".repeat(200);
        let described = describe(&long);
        assert!(described.ends_with("..."));
        assert_eq!(described.len(), 83);
    }
}
