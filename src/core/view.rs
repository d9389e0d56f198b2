//! # View Renderer
//!
//! Projects `(NavigationState, DataStore)` into a [`ViewModel`]: a header and
//! a list of card descriptors. No formatting or terminal types live here;
//! the TUI draws whatever this returns.

use std::fmt;

use crate::core::navigation::{NavigationState, View};
use crate::data::{Collection, DataStore, PartOfSpeech, Sources};

/// Words surfaced per unit.
pub const MAX_WORDS_SHOWN: usize = 20;

/// Visual accent hint for a card. The presentation layer maps it to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Pink,
}

impl Accent {
    pub fn for_collection(collection: Collection) -> Self {
        match collection {
            Collection::Essential => Accent::Blue,
            Collection::Beginner => Accent::Pink,
        }
    }

    /// Unit cards cycle through three accents by rendered position.
    fn for_unit_position(position: usize) -> Self {
        match position % 3 {
            0 => Accent::Blue,
            1 => Accent::Green,
            _ => Accent::Purple,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionCard {
    pub collection: Collection,
    pub name: &'static str,
    pub tagline: &'static str,
    pub word_total: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelCard {
    /// 0-indexed slot, used as the selector.
    pub level: usize,
    pub number: usize,
    pub word_count: usize,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitCard {
    pub unit: usize,
    pub number: usize,
    pub word_count: usize,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordCard {
    pub index: usize,
    pub headword: String,
    /// Uzbek headword at the same index, empty when there is none.
    pub translation: String,
    pub phonetic: Option<String>,
    pub part_of_speech: Option<PartOfSpeech>,
    pub definition: Option<String>,
    pub example: Option<String>,
    /// `None` means the image is hidden.
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Collections(Vec<CollectionCard>),
    Levels(Vec<LevelCard>),
    Units(Vec<UnitCard>),
    Words(Vec<WordCard>),
}

impl ViewBody {
    pub fn len(&self) -> usize {
        match self {
            ViewBody::Collections(cards) => cards.len(),
            ViewBody::Levels(cards) => cards.len(),
            ViewBody::Units(cards) => cards.len(),
            ViewBody::Words(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub title: String,
    pub subtitle: String,
    pub body: ViewBody,
}

// ============================================================================
// Errors
// ============================================================================

/// A requested slot is absent from already-loaded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataNotFound {
    Collection(Collection),
    Level { collection: Collection, level: usize },
    Unit { collection: Collection, level: usize, unit: usize },
}

/// A slot resolved but has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    Units { collection: Collection, level: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    NotFound(DataNotFound),
    Empty(EmptyState),
}

impl RenderError {
    /// Text for the shared error surface.
    pub fn user_message(&self) -> &'static str {
        match self {
            RenderError::NotFound(DataNotFound::Collection(_)) => "No data found",
            RenderError::NotFound(DataNotFound::Level { .. }) => "No data found for this level",
            RenderError::NotFound(DataNotFound::Unit { .. }) => "No words found",
            RenderError::Empty(EmptyState::Units { .. }) => "This level has no units",
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotFound(DataNotFound::Collection(c)) => {
                write!(f, "collection {c} not loaded")
            }
            RenderError::NotFound(DataNotFound::Level { collection, level }) => {
                write!(f, "level {level} missing in {collection}")
            }
            RenderError::NotFound(DataNotFound::Unit { collection, level, unit }) => {
                write!(f, "unit {unit} of level {level} missing in {collection}")
            }
            RenderError::Empty(EmptyState::Units { collection, level }) => {
                write!(f, "level {level} of {collection} has no units")
            }
        }
    }
}

impl std::error::Error for RenderError {}

// ============================================================================
// Rendering
// ============================================================================

/// Builds the view model for the current navigation state.
pub fn render(nav: &NavigationState, store: &DataStore, sources: &Sources) -> Result<ViewModel, RenderError> {
    match (nav.view(), nav.collection(), nav.level(), nav.unit()) {
        (View::Levels, Some(c), _, _) => render_levels(store, c),
        (View::Units, Some(c), Some(l), _) => render_units(store, c, l),
        (View::Words, Some(c), Some(l), Some(u)) => render_words(store, sources, c, l, u),
        _ => Ok(render_collections()),
    }
}

pub fn render_collections() -> ViewModel {
    let cards = Collection::ALL
        .iter()
        .map(|&collection| CollectionCard {
            collection,
            name: collection.display_name(),
            tagline: collection.tagline(),
            word_total: collection.word_total_label(),
            icon: collection.icon(),
            accent: Accent::for_collection(collection),
        })
        .collect();

    ViewModel {
        title: "Word Collections".to_string(),
        subtitle: "Choose a collection to study".to_string(),
        body: ViewBody::Collections(cards),
    }
}

pub fn render_levels(store: &DataStore, collection: Collection) -> Result<ViewModel, RenderError> {
    let tree = store
        .english(collection)
        .ok_or(RenderError::NotFound(DataNotFound::Collection(collection)))?;

    let cards = (0..collection.max_levels())
        .filter_map(|i| {
            tree.level(i).map(|level| LevelCard {
                level: i,
                number: i + 1,
                word_count: level.word_count(),
                accent: Accent::for_collection(collection),
            })
        })
        .collect();

    Ok(ViewModel {
        title: format!("{} - Levels", collection.display_name()),
        subtitle: "Choose a level to study".to_string(),
        body: ViewBody::Levels(cards),
    })
}

pub fn render_units(store: &DataStore, collection: Collection, level: usize) -> Result<ViewModel, RenderError> {
    let tree = store
        .english(collection)
        .ok_or(RenderError::NotFound(DataNotFound::Collection(collection)))?;
    let level_tree = tree
        .level(level)
        .ok_or(RenderError::NotFound(DataNotFound::Level { collection, level }))?;

    let cards: Vec<UnitCard> = (0..collection.max_units())
        .filter_map(|j| level_tree.unit(j).filter(|slot| !slot.is_empty()).map(|slot| (j, slot.len())))
        .enumerate()
        .map(|(position, (unit, word_count))| UnitCard {
            unit,
            number: unit + 1,
            word_count,
            accent: Accent::for_unit_position(position),
        })
        .collect();

    if cards.is_empty() {
        return Err(RenderError::Empty(EmptyState::Units { collection, level }));
    }

    Ok(ViewModel {
        title: format!("{} - Level {}", collection.display_name(), level + 1),
        subtitle: "Choose a unit to study".to_string(),
        body: ViewBody::Units(cards),
    })
}

pub fn render_words(
    store: &DataStore,
    sources: &Sources,
    collection: Collection,
    level: usize,
    unit: usize,
) -> Result<ViewModel, RenderError> {
    let words = store
        .english(collection)
        .ok_or(RenderError::NotFound(DataNotFound::Collection(collection)))?
        .unit_words(level, unit)
        .ok_or(RenderError::NotFound(DataNotFound::Unit { collection, level, unit }))?;

    let translations = store
        .uzbek(collection)
        .and_then(|tree| tree.unit_words(level, unit))
        .unwrap_or_default();

    let cards = words
        .iter()
        .take(MAX_WORDS_SHOWN)
        .enumerate()
        .map(|(index, word)| WordCard {
            index,
            headword: word.headword.clone(),
            translation: translations
                .get(index)
                .map(|t| t.headword.clone())
                .unwrap_or_default(),
            phonetic: word.phonetic.clone(),
            part_of_speech: word.part_of_speech.clone(),
            definition: word.definition.clone(),
            example: word.example.clone(),
            image_url: sources.image_url(collection, level, unit, index),
        })
        .collect();

    Ok(ViewModel {
        title: format!(
            "{} - Level {}, Unit {}",
            collection.display_name(),
            level + 1,
            unit + 1
        ),
        subtitle: "Study the words and remember them".to_string(),
        body: ViewBody::Words(cards),
    })
}
