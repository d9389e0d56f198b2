//! Domain types for the vocabulary datasets.
//!
//! The remote JSON uses terse keys (`w`, `t`, `tp`, `d`, `s`). This module
//! decodes them into typed records and keeps the fixed per-collection
//! metadata in one place.

use std::fmt;

use serde_json::Value;

// ============================================================================
// Collection
// ============================================================================

/// Top-level dataset partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Essential,
    Beginner,
}

impl Collection {
    /// Display order: beginner on the left, essential on the right.
    pub const ALL: [Collection; 2] = [Collection::Beginner, Collection::Essential];

    pub fn id(self) -> &'static str {
        match self {
            Collection::Essential => "essential",
            Collection::Beginner => "beginner",
        }
    }

    pub fn max_levels(self) -> usize {
        match self {
            Collection::Essential => 6,
            Collection::Beginner => 4,
        }
    }

    pub fn max_units(self) -> usize {
        match self {
            Collection::Essential => 30,
            Collection::Beginner => 20,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Collection::Essential => "Essential Words",
            Collection::Beginner => "Beginner Words",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Collection::Essential => "4000 core English words",
            Collection::Beginner => "Words for the beginner level",
        }
    }

    /// Static word-total label shown on the collection card.
    pub fn word_total_label(self) -> &'static str {
        match self {
            Collection::Essential => "4000",
            Collection::Beginner => "1000+",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Collection::Essential => "📚",
            Collection::Beginner => "🌟",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Part of speech
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    /// Any code the dataset uses that we don't classify. Keeps the raw code.
    Other(String),
}

impl PartOfSpeech {
    /// The short code as it appears in the dataset.
    pub fn code(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
            PartOfSpeech::Preposition => "prep",
            PartOfSpeech::Conjunction => "conj",
            PartOfSpeech::Other(code) => code,
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(code: String) -> Self {
        match code.as_str() {
            "n" => PartOfSpeech::Noun,
            "v" => PartOfSpeech::Verb,
            "adj" => PartOfSpeech::Adjective,
            "adv" => PartOfSpeech::Adverb,
            "prep" => PartOfSpeech::Preposition,
            "conj" => PartOfSpeech::Conjunction,
            _ => PartOfSpeech::Other(code),
        }
    }
}

// ============================================================================
// Word record
// ============================================================================

/// One vocabulary entry.
///
/// Fields are decoded one by one and kept as they arrive, so a missing or
/// unusable definition stays missing without taking the rest of the entry
/// with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordRecord {
    pub headword: String,
    pub phonetic: Option<String>,
    pub part_of_speech: Option<PartOfSpeech>,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub translation: Option<String>,
}

/// Text of a scalar field. Numbers and booleans print the way a template
/// string would show them; arrays, objects and null count as absent.
fn text_field(entry: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            log::debug!("Ignoring non-text {:?} field: {}", key, other);
            None
        }
    }
}

impl WordRecord {
    /// Decodes one entry of a unit array (`{w, t, tp, d, s}`).
    ///
    /// Non-object entries decode to an empty record so indices stay aligned
    /// with the parallel translation tree.
    pub fn from_value(value: &Value) -> Self {
        let Some(entry) = value.as_object() else {
            return WordRecord::default();
        };
        WordRecord {
            headword: text_field(entry, "w").unwrap_or_default(),
            phonetic: text_field(entry, "t"),
            part_of_speech: text_field(entry, "tp").map(PartOfSpeech::from),
            definition: text_field(entry, "d"),
            example: text_field(entry, "s"),
            translation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_limits() {
        assert_eq!(Collection::Essential.max_levels(), 6);
        assert_eq!(Collection::Beginner.max_levels(), 4);
        assert_eq!(Collection::Essential.max_units(), 30);
        assert_eq!(Collection::Beginner.max_units(), 20);
    }

    #[test]
    fn test_collection_display_uses_id() {
        assert_eq!(Collection::Beginner.to_string(), "beginner");
        assert_eq!(Collection::Essential.to_string(), "essential");
    }

    #[test]
    fn test_display_order_puts_beginner_first() {
        assert_eq!(Collection::ALL, [Collection::Beginner, Collection::Essential]);
    }

    #[test]
    fn test_part_of_speech_codes() {
        assert_eq!(PartOfSpeech::from("adj".to_string()), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::from("conj".to_string()), PartOfSpeech::Conjunction);
        let other = PartOfSpeech::from("pron".to_string());
        assert_eq!(other, PartOfSpeech::Other("pron".to_string()));
        assert_eq!(other.code(), "pron");
    }

    #[test]
    fn test_word_record_decodes_short_keys() {
        let word = WordRecord::from_value(&json!({
            "w": "abandon",
            "t": "əˈbændən",
            "tp": "v",
            "d": "To leave behind.",
            "s": "They abandoned the car."
        }));
        assert_eq!(word.headword, "abandon");
        assert_eq!(word.phonetic.as_deref(), Some("əˈbændən"));
        assert_eq!(word.part_of_speech, Some(PartOfSpeech::Verb));
        assert_eq!(word.definition.as_deref(), Some("To leave behind."));
        assert_eq!(word.example.as_deref(), Some("They abandoned the car."));
        assert_eq!(word.translation, None);
    }

    #[test]
    fn test_missing_fields_stay_missing() {
        let word = WordRecord::from_value(&json!({ "w": "keen" }));
        assert_eq!(word.headword, "keen");
        assert!(word.definition.is_none());
        assert!(word.example.is_none());
        assert!(word.part_of_speech.is_none());
    }

    #[test]
    fn test_non_object_entry_is_empty_record() {
        assert_eq!(WordRecord::from_value(&json!(42)), WordRecord::default());
        assert_eq!(WordRecord::from_value(&json!(null)), WordRecord::default());
    }

    #[test]
    fn test_wrong_typed_field_keeps_the_others() {
        let word = WordRecord::from_value(&json!({
            "w": "abandon",
            "t": "x",
            "tp": "v",
            "d": "To leave.",
            "s": 5
        }));
        assert_eq!(word.headword, "abandon");
        assert_eq!(word.phonetic.as_deref(), Some("x"));
        assert_eq!(word.part_of_speech, Some(PartOfSpeech::Verb));
        assert_eq!(word.definition.as_deref(), Some("To leave."));
        assert_eq!(word.example.as_deref(), Some("5"));

        let nested = WordRecord::from_value(&json!({ "w": 7, "d": ["not", "text"] }));
        assert_eq!(nested.headword, "7");
        assert!(nested.definition.is_none());
    }
}
