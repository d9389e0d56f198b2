//! # DataStore Loader
//!
//! Fetches the four resources in two pairs, essential first, then beginner.
//! Each pair is awaited together so at most two requests are in flight.
//! A pair is all-or-nothing; pairs that finished before a failure are kept.

use std::fmt;

use log::{error, info};

use crate::data::fetcher::{FetchError, JsonSource};
use crate::data::store::{CollectionPair, DataStore};
use crate::data::types::Collection;

pub const DEFAULT_ESSENTIAL_BASE_URL: &str = "https://assets.4000.uz/assets/en/essential";
pub const DEFAULT_BEGINNER_BASE_URL: &str = "https://assets.4000.uz/assets/en/beginner";

/// Order in which pairs are loaded.
const LOAD_ORDER: [Collection; 2] = [Collection::Essential, Collection::Beginner];

/// Base URLs of the datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub essential_base_url: String,
    pub beginner_base_url: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            essential_base_url: DEFAULT_ESSENTIAL_BASE_URL.to_string(),
            beginner_base_url: DEFAULT_BEGINNER_BASE_URL.to_string(),
        }
    }
}

impl Sources {
    pub fn base_url(&self, collection: Collection) -> &str {
        let url = match collection {
            Collection::Essential => &self.essential_base_url,
            Collection::Beginner => &self.beginner_base_url,
        };
        url.trim_end_matches('/')
    }

    pub fn english_url(&self, collection: Collection) -> String {
        format!("{}/words.json", self.base_url(collection))
    }

    pub fn uzbek_url(&self, collection: Collection) -> String {
        format!("{}/uz/words.json", self.base_url(collection))
    }

    /// Picture for a word, 0-indexed. Only the essential collection ships images.
    pub fn image_url(&self, collection: Collection, level: usize, unit: usize, index: usize) -> Option<String> {
        match collection {
            Collection::Essential => Some(format!(
                "{}/picture/{}/{}/{}.jpg",
                self.base_url(collection),
                level,
                unit,
                index
            )),
            Collection::Beginner => None,
        }
    }
}

/// The whole load failed because one pair could not be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    pub collection: Collection,
    pub source: FetchError,
}

impl LoadError {
    /// The single message shown to the user, with a hint to retry.
    pub fn user_message(&self) -> String {
        "Failed to load the word lists. Check your internet connection and retry.".to_string()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {} collection: {}", self.collection, self.source)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Fetches one collection's English and Uzbek trees concurrently.
pub async fn load_pair(
    source: &dyn JsonSource,
    sources: &Sources,
    collection: Collection,
) -> Result<CollectionPair, LoadError> {
    let english_url = sources.english_url(collection);
    let uzbek_url = sources.uzbek_url(collection);

    let (english, uzbek) = futures::try_join!(
        source.fetch_json(&english_url),
        source.fetch_json(&uzbek_url)
    )
    .map_err(|e| LoadError {
        collection,
        source: e,
    })?;

    Ok(CollectionPair::from_values(&english, &uzbek))
}

/// Loads every collection, handing each finished pair to `on_pair`.
///
/// Stops at the first failing pair; pairs delivered before that stay
/// delivered.
pub async fn load_all<F>(source: &dyn JsonSource, sources: &Sources, mut on_pair: F) -> Result<(), LoadError>
where
    F: FnMut(Collection, CollectionPair),
{
    for collection in LOAD_ORDER {
        match load_pair(source, sources, collection).await {
            Ok(pair) => {
                info!("Loaded {} collection", collection);
                on_pair(collection, pair);
            }
            Err(e) => {
                error!("Failed to load data: {}", e);
                return Err(e);
            }
        }
    }
    info!("All data loaded successfully");
    Ok(())
}

/// Whether `ensure_loaded` had to go to the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    AlreadyLoaded,
    Fetched,
}

impl DataStore {
    /// Populates the store unless both collections are already present.
    pub async fn ensure_loaded(
        &mut self,
        source: &dyn JsonSource,
        sources: &Sources,
    ) -> Result<LoadOutcome, LoadError> {
        if self.is_loaded() {
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        load_all(source, sources, |collection, pair| self.insert_pair(collection, pair)).await?;
        Ok(LoadOutcome::Fetched)
    }
}
