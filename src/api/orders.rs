//! Orders API
//!
//! Bindings for `/api/orders`.

use crate::error::ApiError;
use crate::models::{CreateOrderRequest, DesiredColor, Order, TariffKind};

use super::ApiClient;

pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Place an order; `desired_color` is `None` for the basic tier
    pub async fn create(&self, tariff: TariffKind, desired_color: Option<DesiredColor>) -> Result<Order, ApiError> {
        let body = CreateOrderRequest {
            tariff_name: tariff,
            desired_color,
        };
        self.client.post("/api/orders", Some(&body)).await
    }

    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/api/orders").await
    }

    pub async fn get(&self, order_id: u32) -> Result<Order, ApiError> {
        self.client.get(&format!("/api/orders/{}", order_id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use crate::models::{DesiredColor, TariffKind};
    use crate::platform::Method;
    use crate::testing::{block_on, order_json, FakePlatform, FakeTransport};

    #[test]
    fn test_create_sends_tariff_and_color() {
        let transport = FakeTransport::new();
        let platform = FakePlatform::new();
        transport.respond(Method::Post, "/api/orders", 201, &order_json(3, "HUE:180"));
        let api = ApiClient::new("", transport.clone(), platform.clone());

        let order = block_on(api.orders().create(TariffKind::Advanced, Some(DesiredColor::Hue(180)))).unwrap();
        assert_eq!(order.id, 3);

        let request = transport.last_request().unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"tariff_name":"advanced","desired_color":"HUE:180"}"#));
    }
}
