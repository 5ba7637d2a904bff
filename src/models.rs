//! Frontend Models
//!
//! Data structures matching the backend API schemas.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ========================
// Orders & Tariffs
// ========================

/// Purchase tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TariffKind {
    Basic,
    Advanced,
}

impl TariffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TariffKind::Basic => "basic",
            TariffKind::Advanced => "advanced",
        }
    }

    /// Only the advanced tier lets the buyer pick a color
    pub fn allows_color(&self) -> bool {
        matches!(self, TariffKind::Advanced)
    }
}

/// Color the buyer asked for.
///
/// Wire form is either `HUE:{n}` or `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesiredColor {
    Hue(u16),
    Hex(String),
}

impl DesiredColor {
    /// Color payload for an order of the given tier
    pub fn for_tariff(tariff: TariffKind, hue: u16) -> Option<Self> {
        tariff.allows_color().then_some(DesiredColor::Hue(hue))
    }

    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(hue) = raw.strip_prefix("HUE:") {
            return hue.trim().parse().ok().map(DesiredColor::Hue);
        }
        let hex = raw.strip_prefix('#')?;
        (hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .then(|| DesiredColor::Hex(raw.to_string()))
    }
}

impl fmt::Display for DesiredColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesiredColor::Hue(hue) => write!(f, "HUE:{}", hue),
            DesiredColor::Hex(hex) => f.write_str(hex),
        }
    }
}

impl Serialize for DesiredColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `POST /api/orders` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    pub tariff_name: TariffKind,
    pub desired_color: Option<DesiredColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub id: u32,
    pub name: String,
    /// Decimal price, kept as text to avoid float rounding
    #[serde(deserialize_with = "decimal_as_string")]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub status: String,
    pub desired_color: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tariff: Option<Tariff>,
    /// Present when the backend starts an external checkout
    #[serde(default)]
    pub payment_url: Option<String>,
}

impl Order {
    pub fn color(&self) -> Option<DesiredColor> {
        self.desired_color.as_deref().and_then(DesiredColor::parse)
    }
}

// ========================
// Elephants
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elephant {
    pub id: u32,
    pub name: String,
    pub color_hex: String,
    #[serde(default)]
    pub color_r: u8,
    #[serde(default)]
    pub color_g: u8,
    #[serde(default)]
    pub color_b: u8,
    #[serde(default)]
    pub color_display: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_gifted: bool,
    #[serde(default = "default_true")]
    pub is_owned_by_user: bool,
    #[serde(default)]
    pub gift_recipient: Option<String>,
    #[serde(default)]
    pub gift_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gift_uuid: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Only on the detail endpoint
    #[serde(default)]
    pub order_id: Option<u32>,
}

// ========================
// Gifts
// ========================

/// `POST /api/gifts/` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateGiftRequest {
    pub elephant_id: u32,
    pub sender_name: String,
    pub recipient_name: String,
    pub message: String,
}

/// Gift link as seen by its sender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: u32,
    pub uuid: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub message: String,
    pub is_claimed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub claimed_at: Option<DateTime<Utc>>,
    pub public_url: String,
    #[serde(default)]
    pub elephant_color: Option<String>,
}

/// Gift metadata shown on the public claim page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicGift {
    pub uuid: String,
    pub sender_name: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub message: String,
    pub is_claimed: bool,
    #[serde(default)]
    pub claimed_by_username: Option<String>,
    #[serde(default)]
    pub elephant_color: Option<String>,
    #[serde(default)]
    pub elephant_name: Option<String>,
    #[serde(default)]
    pub elephant_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResponse {
    #[serde(default)]
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub elephant_id: Option<u32>,
}

fn default_true() -> bool {
    true
}

/// Accepts a decimal either as JSON string or number
fn decimal_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Decimal::deserialize(deserializer)? {
        Decimal::Text(text) => text,
        Decimal::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_request_wire_format() {
        let basic = CreateOrderRequest { tariff_name: TariffKind::Basic, desired_color: None };
        assert_eq!(
            serde_json::to_string(&basic).unwrap(),
            r#"{"tariff_name":"basic","desired_color":null}"#
        );

        let advanced = CreateOrderRequest {
            tariff_name: TariffKind::Advanced,
            desired_color: DesiredColor::for_tariff(TariffKind::Advanced, 240),
        };
        assert_eq!(
            serde_json::to_string(&advanced).unwrap(),
            r#"{"tariff_name":"advanced","desired_color":"HUE:240"}"#
        );
    }

    #[test]
    fn test_basic_tariff_never_carries_color() {
        assert_eq!(DesiredColor::for_tariff(TariffKind::Basic, 120), None);
    }

    #[test]
    fn test_desired_color_parse() {
        assert_eq!(DesiredColor::parse("HUE:30"), Some(DesiredColor::Hue(30)));
        assert_eq!(DesiredColor::parse("#FF8800"), Some(DesiredColor::Hex("#FF8800".into())));
        assert_eq!(DesiredColor::parse("#FF88"), None);
        assert_eq!(DesiredColor::parse("HUE:abc"), None);
        assert_eq!(DesiredColor::parse("red"), None);
    }

    #[test]
    fn test_order_decodes_backend_payload() {
        let json = r#"{
            "id": 12,
            "status": "paid",
            "desired_color": "HUE:60",
            "created_at": "2025-03-01T10:15:00+03:00",
            "paid_at": null,
            "tariff": {"id": 2, "name": "advanced", "price": "990.00", "description": "", "is_active": true}
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 12);
        assert_eq!(order.color(), Some(DesiredColor::Hue(60)));
        assert_eq!(order.tariff.unwrap().price, "990.00");
        assert_eq!(order.payment_url, None);
    }

    #[test]
    fn test_tariff_price_accepts_number() {
        let json = r#"{"id": 1, "name": "basic", "price": 490.5}"#;
        let tariff: Tariff = serde_json::from_str(json).unwrap();
        assert_eq!(tariff.price, "490.5");
        assert!(tariff.is_active);
    }
}
