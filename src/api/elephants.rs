//! Elephants API
//!
//! Bindings for `/api/elephants`.

use crate::error::ApiError;
use crate::models::Elephant;

use super::ApiClient;

pub struct ElephantsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ElephantsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Elephant>, ApiError> {
        self.client.get("/api/elephants").await
    }

    pub async fn get(&self, elephant_id: u32) -> Result<Elephant, ApiError> {
        self.client.get(&format!("/api/elephants/{}", elephant_id)).await
    }

    /// URL of the image download; nothing is fetched here
    pub fn download_url(&self, elephant_id: u32) -> String {
        self.client.url(&format!("/api/elephants/{}/download", elephant_id))
    }
}
