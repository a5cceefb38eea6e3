use crate::inventory::SortOrder;

use super::intent::ViewIntent;
use super::state::ViewState;

/// Pure state transitions for the inventory view.
///
/// The reducer is the only place view state changes; side effects (API
/// calls) live in the controller, which feeds their outcomes back in as
/// intents.
pub struct ViewReducer;

impl ViewReducer {
    pub fn reduce(state: ViewState, intent: ViewIntent) -> ViewState {
        match intent {
            ViewIntent::LoadStarted => ViewState {
                loading: true,
                error: None,
                ..state
            },
            ViewIntent::ItemsLoaded(items) => ViewState {
                items,
                loading: false,
                ..state
            },
            ViewIntent::LoadFailed(message) => ViewState {
                loading: false,
                error: Some(message),
                ..state
            },
            ViewIntent::SetFilter(filter) => ViewState { filter, ..state },
            ViewIntent::SetSort { field, order } => ViewState {
                sort_field: field,
                sort_order: order,
                ..state
            },
            ViewIntent::SortBy(field) => {
                if field == state.sort_field {
                    ViewState {
                        sort_order: state.sort_order.flipped(),
                        ..state
                    }
                } else {
                    ViewState {
                        sort_field: field,
                        sort_order: SortOrder::Asc,
                        ..state
                    }
                }
            }
        }
    }
}
