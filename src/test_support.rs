//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::core::speech::Speaker;
use crate::core::state::App;
use crate::data::{Collection, CollectionPair, DataStore, FetchError, JsonSource, Sources};

/// A speaker that stays silent.
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn name(&self) -> &str {
        "silent"
    }

    fn speak(&self, _text: &str, _locale: &str) {}
}

/// A speaker that remembers what it was asked to say.
#[derive(Default)]
pub struct RecordingSpeaker {
    spoken: Mutex<Vec<(String, String)>>,
}

impl RecordingSpeaker {
    pub fn spoken(&self) -> Vec<(String, String)> {
        self.spoken.lock().unwrap().clone()
    }
}

impl Speaker for RecordingSpeaker {
    fn name(&self) -> &str {
        "recording"
    }

    fn speak(&self, text: &str, locale: &str) {
        self.spoken
            .lock()
            .unwrap()
            .push((text.to_string(), locale.to_string()));
    }
}

/// In-memory JSON source. Unknown URLs answer like a 404.
#[derive(Default)]
pub struct MemorySource {
    documents: HashMap<String, Value>,
    requested: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, document: Value) -> Self {
        self.documents.insert(url.to_string(), document);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl JsonSource for MemorySource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.documents.get(url).cloned().ok_or_else(|| FetchError::Http {
            status: 404,
            url: url.to_string(),
        })
    }
}

/// A unit array of `count` words named `{prefix}{i}`.
pub fn words_json(prefix: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "w": format!("{prefix}{i}"),
                    "t": "tɛst",
                    "tp": "n",
                    "d": format!("Definition of {prefix}{i}."),
                    "s": format!("Example with {prefix}{i}.")
                })
            })
            .collect(),
    )
}

/// A unit array with the given headwords.
pub fn word_values(headwords: &[&str]) -> Value {
    Value::Array(headwords.iter().map(|w| json!({ "w": w })).collect())
}

/// A store with one collection decoded from raw JSON.
pub fn store_with(collection: Collection, english: Value, uzbek: Value) -> DataStore {
    let mut store = DataStore::new();
    store.insert_pair(collection, CollectionPair::from_values(&english, &uzbek));
    store
}

/// Creates a test App with a silent speaker and no data.
pub fn test_app() -> App {
    App::new(Arc::new(SilentSpeaker), Sources::default())
}

/// Creates a test App whose store already holds both collections,
/// each with two levels of three units of four words.
pub fn loaded_app() -> App {
    let mut app = test_app();
    let level = json!([words_json("w", 4), words_json("x", 4), words_json("y", 4)]);
    let tree = json!([level.clone(), level]);
    for collection in Collection::ALL {
        app.store
            .insert_pair(collection, CollectionPair::from_values(&tree, &tree));
    }
    app
}
