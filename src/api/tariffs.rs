//! Tariffs API

use crate::error::ApiError;
use crate::models::Tariff;

use super::ApiClient;

pub struct TariffsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TariffsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Active tariffs, cheapest first as ordered by the backend
    pub async fn list(&self) -> Result<Vec<Tariff>, ApiError> {
        self.client.get("/api/tariffs").await
    }
}
