use reqwest::Client;
use thiserror::Error;

use crate::inventory::{Item, ItemPatch, NewItem};

/// Errors from talking to the inventory API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Typed client for the inventory API.
///
/// One method per endpoint; non-success statuses are turned into
/// [`ClientError::Status`] carrying the server's error message.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}", self.base_url, id)
    }

    pub async fn fetch_items(&self) -> Result<Vec<Item>, ClientError> {
        let resp = self.http.get(self.items_url()).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn create_item(&self, new: &NewItem) -> Result<Item, ClientError> {
        let resp = self.http.post(self.items_url()).json(new).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<(), ClientError> {
        let resp = self.http.put(self.item_url(id)).json(patch).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.http.delete(self.item_url(id)).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

/// Pass successful responses through; extract the server's error message
/// from `{"error": {"message": ...}}` bodies otherwise.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = match resp.json::<serde_json::Value>().await {
        Ok(body) => body
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => "unknown error".to_string(),
    };

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
