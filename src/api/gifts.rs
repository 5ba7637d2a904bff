//! Gifts API
//!
//! Bindings for `/api/gifts`. The public endpoints work without a session.

use crate::error::ApiError;
use crate::models::{ClaimResponse, CreateGiftRequest, Gift, PublicGift};

use super::ApiClient;

pub struct GiftsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> GiftsApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a gift link for one of the caller's elephants
    pub async fn create(&self, gift: &CreateGiftRequest) -> Result<Gift, ApiError> {
        self.client.post("/api/gifts/", Some(gift)).await
    }

    pub async fn list_sent(&self) -> Result<Vec<Gift>, ApiError> {
        self.client.get("/api/gifts/sent").await
    }

    pub async fn get_public(&self, uuid: &str) -> Result<PublicGift, ApiError> {
        self.client.get(&format!("/api/gifts/public/{}", uuid)).await
    }

    pub async fn claim(&self, uuid: &str) -> Result<ClaimResponse, ApiError> {
        self.client
            .post::<_, ()>(&format!("/api/gifts/public/{}/claim", uuid), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::error::ApiError;
    use crate::models::CreateGiftRequest;
    use crate::platform::Method;
    use crate::testing::{block_on, gift_json, FakePlatform, FakeTransport};

    #[test]
    fn test_create_gift_body() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "/api/gifts/", 201, &gift_json(1, "u-1"));
        let api = ApiClient::new("", transport.clone(), FakePlatform::new());

        let request = CreateGiftRequest {
            elephant_id: 7,
            sender_name: "Аня".into(),
            recipient_name: String::new(),
            message: String::new(),
        };
        let gift = block_on(api.gifts().create(&request)).unwrap();
        assert_eq!(gift.public_url, "/gift/u-1/");

        let sent = transport.last_request().unwrap();
        assert_eq!(
            sent.body.as_deref(),
            Some(r#"{"elephant_id":7,"sender_name":"Аня","recipient_name":"","message":""}"#)
        );
    }

    #[test]
    fn test_public_gift_not_found() {
        let transport = FakeTransport::new();
        transport.respond(Method::Get, "/api/gifts/public/missing", 404, r#"{"message":"Подарок не найден"}"#);
        let api = ApiClient::new("", transport.clone(), FakePlatform::new());

        let err = block_on(api.gifts().get_public("missing")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
        assert_eq!(err.user_message(), Some("Подарок не найден"));
    }
}
