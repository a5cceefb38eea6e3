use crate::inventory::{ItemPatch, NewItem};

use super::api::ApiClient;
use super::intent::ViewIntent;
use super::reducer::ViewReducer;
use super::state::ViewState;

/// Drives the view state against the API.
///
/// Every mutation round-trips: mutate, re-fetch the full list, leave the
/// new state ready to render. There is no optimistic local patching and
/// no retry; a failed call stores its message in the state and aborts
/// the operation without rolling anything back.
pub struct Controller {
    api: ApiClient,
    state: ViewState,
}

impl Controller {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply a pure view intent (filter/sort changes).
    pub fn apply(&mut self, intent: ViewIntent) {
        self.state = ViewReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Fetch a fresh copy of the full collection.
    pub async fn refresh(&mut self) {
        self.apply(ViewIntent::LoadStarted);
        match self.api.fetch_items().await {
            Ok(items) => self.apply(ViewIntent::ItemsLoaded(items)),
            Err(e) => self.apply(ViewIntent::LoadFailed(e.to_string())),
        }
    }

    /// Create a record, then re-fetch. Returns the created id on success.
    pub async fn add(&mut self, new: NewItem) -> Option<String> {
        self.apply(ViewIntent::LoadStarted);
        match self.api.create_item(&new).await {
            Ok(item) => {
                let id = item.id.clone();
                self.refresh().await;
                Some(id)
            }
            Err(e) => {
                self.apply(ViewIntent::LoadFailed(e.to_string()));
                None
            }
        }
    }

    /// Patch a record, then re-fetch.
    pub async fn update(&mut self, id: &str, patch: ItemPatch) {
        self.apply(ViewIntent::LoadStarted);
        match self.api.update_item(id, &patch).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.apply(ViewIntent::LoadFailed(e.to_string())),
        }
    }

    /// Delete a record, then re-fetch.
    pub async fn remove(&mut self, id: &str) {
        self.apply(ViewIntent::LoadStarted);
        match self.api.delete_item(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.apply(ViewIntent::LoadFailed(e.to_string())),
        }
    }
}
