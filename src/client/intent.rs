use crate::inventory::{Item, SortField, SortOrder};

use super::state::CategoryFilter;

/// User actions and API-call outcomes that drive view transitions.
#[derive(Debug, Clone)]
pub enum ViewIntent {
    /// An API call is in flight.
    LoadStarted,
    /// A fresh copy of the full collection arrived.
    ItemsLoaded(Vec<Item>),
    /// An API call failed; the message is the single user-visible error.
    LoadFailed(String),
    /// Select the category filter.
    SetFilter(CategoryFilter),
    /// Sort by a field: re-selecting the current field flips the
    /// direction, a new field resets to ascending.
    SortBy(SortField),
    /// Select field and direction directly (non-toggling).
    SetSort { field: SortField, order: SortOrder },
}
