//! # Core Application Logic
//!
//! This module contains lexitree's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (views)     │
//!                    │                         │
//!                    │  No terminal. No DOM.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Data    │      │   Speech   │
//!     │  Adapter   │      │  (fetch +  │      │  (speak)   │
//!     │ (ratatui)  │      │   store)   │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct holding all application state in one place
//! - [`action`]: The `Action` enum for everything that can happen in the app
//! - [`navigation`]: The four-view drill-down state machine
//! - [`view`]: Pure projection of state into card descriptors
//! - [`speech`]: The text-to-speech capability
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod navigation;
pub mod speech;
pub mod state;
pub mod view;
