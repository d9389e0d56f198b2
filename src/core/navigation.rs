//! # Navigation State Machine
//!
//! Four drill-down views with their selectors:
//!
//! ```text
//! Collections ──collection──► Levels ──level──► Units ──unit──► Words
//!      ▲                        │                 │               │
//!      └────────── back ────────┴──── back ───────┴──── back ─────┘
//! ```
//!
//! Entering a view clears every selector deeper than it. `go_back` only ever
//! moves to the parent of the current view; there is no history stack.

use crate::data::Collection;

/// Which top-level page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Learning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Collections,
    Levels,
    Units,
    Words,
}

/// Current view plus the selectors that lead to it.
///
/// Fields are private so the invariants hold: `level` is only set in
/// `Units`/`Words`, `unit` only in `Words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    view: View,
    collection: Option<Collection>,
    level: Option<usize>,
    unit: Option<usize>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn collection(&self) -> Option<Collection> {
        self.collection
    }

    pub fn level(&self) -> Option<usize> {
        self.level
    }

    pub fn unit(&self) -> Option<usize> {
        self.unit
    }

    pub fn go_to_collections(&mut self) {
        *self = Self::default();
    }

    pub fn go_to_levels(&mut self, collection: Collection) {
        *self = Self {
            view: View::Levels,
            collection: Some(collection),
            level: None,
            unit: None,
        };
    }

    pub fn go_to_units(&mut self, collection: Collection, level: usize) {
        *self = Self {
            view: View::Units,
            collection: Some(collection),
            level: Some(level),
            unit: None,
        };
    }

    pub fn go_to_words(&mut self, collection: Collection, level: usize, unit: usize) {
        *self = Self {
            view: View::Words,
            collection: Some(collection),
            level: Some(level),
            unit: Some(unit),
        };
    }

    /// Moves to the parent view. A no-op at `Collections`.
    pub fn go_back(&mut self) {
        match (self.view, self.collection, self.level) {
            (View::Words, Some(c), Some(l)) => self.go_to_units(c, l),
            (View::Units, Some(c), _) => self.go_to_levels(c),
            _ => self.go_to_collections(),
        }
    }

    /// True when `go_back` would change anything.
    pub fn can_go_back(&self) -> bool {
        self.view != View::Collections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reachable_states() -> Vec<NavigationState> {
        let mut states = vec![NavigationState::new()];
        for c in Collection::ALL {
            let mut s = NavigationState::new();
            s.go_to_levels(c);
            states.push(s);
            s.go_to_units(c, 2);
            states.push(s);
            s.go_to_words(c, 2, 5);
            states.push(s);
        }
        states
    }

    #[test]
    fn test_initial_state_is_collections() {
        let nav = NavigationState::new();
        assert_eq!(nav.view(), View::Collections);
        assert_eq!(nav.collection(), None);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_entering_shallower_view_clears_selectors() {
        let mut nav = NavigationState::new();
        nav.go_to_words(Collection::Essential, 1, 4);
        assert_eq!(nav.unit(), Some(4));

        nav.go_to_units(Collection::Essential, 1);
        assert_eq!(nav.level(), Some(1));
        assert_eq!(nav.unit(), None);

        nav.go_to_levels(Collection::Essential);
        assert_eq!(nav.collection(), Some(Collection::Essential));
        assert_eq!(nav.level(), None);

        nav.go_to_collections();
        assert_eq!(nav, NavigationState::new());
    }

    #[test]
    fn test_back_is_inverse_of_forward_step() {
        for start in reachable_states() {
            let mut forward = start;
            match start.view() {
                View::Collections => forward.go_to_levels(Collection::Beginner),
                View::Levels => forward.go_to_units(start.collection().unwrap(), 0),
                View::Units => {
                    forward.go_to_words(start.collection().unwrap(), start.level().unwrap(), 3)
                }
                View::Words => continue,
            }
            forward.go_back();
            assert_eq!(forward, start, "back from {:?} did not restore {:?}", forward, start);
        }
    }

    #[test]
    fn test_back_chain_reaches_collections() {
        let mut nav = NavigationState::new();
        nav.go_to_words(Collection::Beginner, 3, 19);

        nav.go_back();
        assert_eq!(nav.view(), View::Units);
        assert_eq!(nav.level(), Some(3));
        nav.go_back();
        assert_eq!(nav.view(), View::Levels);
        assert_eq!(nav.collection(), Some(Collection::Beginner));
        nav.go_back();
        assert_eq!(nav.view(), View::Collections);
        nav.go_back();
        assert_eq!(nav, NavigationState::new());
    }

    #[test]
    fn test_invariants_hold_in_every_state() {
        for s in reachable_states() {
            let level_allowed = matches!(s.view(), View::Units | View::Words);
            assert_eq!(s.level().is_some(), level_allowed);
            assert_eq!(s.unit().is_some(), s.view() == View::Words);
        }
    }
}
