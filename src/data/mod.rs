//! # Data Layer
//!
//! Network retrieval and the in-memory word trees.
//!
//! - [`fetcher`]: GET with retry and exponential backoff
//! - [`loader`]: fetches the collection pairs into a [`DataStore`]
//! - [`store`]: the parallel English/Uzbek trees
//! - [`types`]: `Collection`, `WordRecord`, `PartOfSpeech`

pub mod fetcher;
pub mod loader;
pub mod store;
pub mod types;

pub use fetcher::{FetchError, HttpFetcher, JsonSource, RetryPolicy, retry_with_backoff};
pub use loader::{LoadError, LoadOutcome, Sources, load_all, load_pair};
pub use store::{CollectionPair, CollectionTree, DataStore, LevelTree, UnitSlot};
pub use types::{Collection, PartOfSpeech, WordRecord};
