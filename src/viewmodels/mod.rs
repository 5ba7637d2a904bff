//! View Models
//!
//! Per-page state and behavior, independent of the rendering layer.
//! Each model owns an `Observable` state and is cheap to clone.

mod dashboard;
mod gift_claim;
mod observable;
mod tariff;

pub use dashboard::{DashboardModel, DashboardState, DashboardStateStoreFields, GiftForm};
pub use gift_claim::{GiftClaimModel, GiftClaimState, GiftClaimStateStoreFields};
pub use observable::{Observable, Subscription};
pub use tariff::{TariffModel, TariffState, TariffStateStoreFields};

/// Banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown in a page banner
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

/// Dashboard location used after purchases and claims
pub const DASHBOARD_PATH: &str = "/dashboard/";
