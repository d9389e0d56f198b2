//! # DataStore
//!
//! Holds the two parallel word trees (English content and Uzbek
//! translations), each keyed by collection, then level index, then unit
//! index.
//!
//! ```text
//! DataStore
//! ├── english: HashMap<Collection, CollectionTree>
//! └── uzbek:   HashMap<Collection, CollectionTree>
//!
//! CollectionTree
//! └── levels: Vec<Option<LevelTree>>          // None = falsy slot
//!     └── units: BTreeMap<usize, UnitSlot>   // array index or object key
//!         └── Words(Vec<WordRecord>) | Invalid
//! ```
//!
//! Written once per collection pair by the loader, read by the view
//! renderer. There is no invalidation.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::data::types::{Collection, WordRecord};

/// A unit entry as found in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitSlot {
    Words(Vec<WordRecord>),
    /// Present but not an array. Counts as zero words and is never shown.
    Invalid,
}

impl UnitSlot {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(entries) => {
                UnitSlot::Words(entries.iter().map(WordRecord::from_value).collect())
            }
            _ => UnitSlot::Invalid,
        }
    }

    pub fn words(&self) -> Option<&[WordRecord]> {
        match self {
            UnitSlot::Words(words) => Some(words),
            UnitSlot::Invalid => None,
        }
    }

    pub fn len(&self) -> usize {
        self.words().map_or(0, <[WordRecord]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelTree {
    pub units: BTreeMap<usize, UnitSlot>,
    /// Words across every array-valued entry of the level, including object
    /// keys that are not unit indices.
    word_total: usize,
}

/// Parses an object key the way an index lookup would address it: only the
/// canonical decimal form (`"1"`, not `"01"` or `"+1"`) names a unit.
fn unit_index(key: &str) -> Option<usize> {
    key.parse::<usize>().ok().filter(|i| i.to_string() == key)
}

fn array_len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

impl LevelTree {
    /// Decodes a level from either an array or an object keyed by unit index.
    /// Object keys that are not unit indices are not addressable as units
    /// but still count towards the level's words.
    pub fn from_value(value: &Value) -> Self {
        let (units, word_total) = match value {
            Value::Array(items) => (
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(i, v)| (i, UnitSlot::from_value(v)))
                    .collect(),
                items.iter().map(array_len).sum(),
            ),
            Value::Object(map) => (
                map.iter()
                    .filter(|(_, v)| !v.is_null())
                    .filter_map(|(key, v)| unit_index(key).map(|i| (i, UnitSlot::from_value(v))))
                    .collect(),
                map.values().map(array_len).sum(),
            ),
            _ => (BTreeMap::new(), 0),
        };
        Self { units, word_total }
    }

    pub fn unit(&self, index: usize) -> Option<&UnitSlot> {
        self.units.get(&index)
    }

    /// Total words across all arrays in the level; non-array entries
    /// contribute 0.
    pub fn word_count(&self) -> usize {
        self.word_total
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionTree {
    pub levels: Vec<Option<LevelTree>>,
}

impl CollectionTree {
    /// Decodes the top-level array. A level slot is kept only if its JSON
    /// value is truthy; anything that isn't an array yields an empty tree.
    pub fn from_value(value: &Value) -> Self {
        let levels = match value {
            Value::Array(items) => items
                .iter()
                .map(|v| is_truthy(v).then(|| LevelTree::from_value(v)))
                .collect(),
            _ => Vec::new(),
        };
        Self { levels }
    }

    pub fn level(&self, index: usize) -> Option<&LevelTree> {
        self.levels.get(index).and_then(Option::as_ref)
    }

    /// Words of the given unit, if the slot is a word array.
    pub fn unit_words(&self, level: usize, unit: usize) -> Option<&[WordRecord]> {
        self.level(level)?.unit(unit)?.words()
    }
}

/// JavaScript-style truthiness, which is how the datasets mark empty slots.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The English tree and its Uzbek translation tree for one collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionPair {
    pub english: CollectionTree,
    pub uzbek: CollectionTree,
}

impl CollectionPair {
    pub fn from_values(english: &Value, uzbek: &Value) -> Self {
        Self {
            english: CollectionTree::from_value(english),
            uzbek: CollectionTree::from_value(uzbek),
        }
    }
}

#[derive(Debug, Default)]
pub struct DataStore {
    english: HashMap<Collection, CollectionTree>,
    uzbek: HashMap<Collection, CollectionTree>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_pair(&mut self, collection: Collection, pair: CollectionPair) {
        self.english.insert(collection, pair.english);
        self.uzbek.insert(collection, pair.uzbek);
    }

    pub fn english(&self, collection: Collection) -> Option<&CollectionTree> {
        self.english.get(&collection)
    }

    pub fn uzbek(&self, collection: Collection) -> Option<&CollectionTree> {
        self.uzbek.get(&collection)
    }

    pub fn is_collection_loaded(&self, collection: Collection) -> bool {
        self.english.contains_key(&collection)
    }

    /// True once every collection has its English data.
    pub fn is_loaded(&self) -> bool {
        Collection::ALL.iter().all(|c| self.is_collection_loaded(*c))
    }
}
