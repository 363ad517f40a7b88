//! GrowthHub engine: derived metrics, filtering, and state reduction for a
//! personal growth and recipe planning dashboard.
//!
//! Everything here is pure request/response over caller-supplied snapshots:
//! the presentation layer owns the collections and the clock, calls into the
//! engine for completion rates, streaks, deadline countdowns, search and
//! grouping, ingredient scaling, and rollups, and applies user intents
//! through the [`store`] reducer to get the next state. No persistence, no
//! I/O, no shared mutable state.

pub mod dashboard;
pub mod error;
pub mod goals;
pub mod habits;
pub mod ingredient;
pub mod mealplan;
pub mod metrics;
pub mod mood;
pub mod quotes;
pub mod recipes;
pub mod seed;
pub mod shopping;
pub mod store;
pub mod types;
