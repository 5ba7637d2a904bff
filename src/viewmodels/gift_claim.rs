//! Gift Claim View Model
//!
//! Public `/gift/{uuid}/` page: show the gift and let the visitor claim it.

use std::rc::Rc;

use reactive_stores::Store;

use super::{Observable, Subscription, DASHBOARD_PATH};
use crate::api::ApiClient;
use crate::models::PublicGift;
use crate::platform::Platform;

const CONFIRM_CLAIM: &str = "Вы уверены, что хотите принять этот подарок?";
const CLAIM_ERROR: &str = "Произошла ошибка при принятии подарка";
const GIFT_NOT_FOUND: &str = "Подарок не найден";

#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct GiftClaimState {
    pub claiming: bool,
    pub gift: Option<PublicGift>,
    pub load_error: Option<String>,
}

/// Gift identifier from a `/gift/{uuid}/` path
pub fn gift_uuid_from_path(pathname: &str) -> Option<&str> {
    pathname.split('/').nth(2).filter(|segment| !segment.is_empty())
}

#[derive(Clone)]
pub struct GiftClaimModel {
    api: ApiClient,
    platform: Rc<dyn Platform>,
    state: Observable<GiftClaimState>,
}

impl GiftClaimModel {
    pub fn new(api: ApiClient, platform: Rc<dyn Platform>) -> Self {
        Self {
            api,
            platform,
            state: Observable::new(GiftClaimState::default()),
        }
    }

    pub fn snapshot(&self) -> GiftClaimState {
        self.state.snapshot()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&GiftClaimState) + 'static) -> Subscription {
        self.state.subscribe(subscriber)
    }

    fn current_uuid(&self) -> Option<String> {
        gift_uuid_from_path(&self.platform.pathname()).map(str::to_owned)
    }

    /// Fetch the public gift metadata for display
    pub async fn load(&self) {
        let Some(uuid) = self.current_uuid() else {
            self.state.update(|s| s.load_error = Some(GIFT_NOT_FOUND.to_string()));
            return;
        };

        match self.api.gifts().get_public(&uuid).await {
            Ok(gift) => self.state.update(|s| {
                s.gift = Some(gift);
                s.load_error = None;
            }),
            Err(e) => {
                log::error!("[Gift] Failed to load gift {}: {}", uuid, e);
                let text = e.user_message().unwrap_or(GIFT_NOT_FOUND).to_string();
                self.state.update(|s| s.load_error = Some(text));
            }
        }
    }

    /// Claim the gift after an explicit confirmation
    pub async fn claim_gift(&self) {
        if !self.platform.confirm(CONFIRM_CLAIM) {
            return;
        }

        self.state.update(|s| s.claiming = true);

        let result = match self.current_uuid() {
            Some(uuid) => self.api.gifts().claim(&uuid).await.map_err(|e| e.to_string()),
            None => Err("no gift id in path".to_string()),
        };

        match result {
            Ok(claimed) => {
                log::info!("[Gift] Claimed, elephant {:?}", claimed.elephant_id);
                self.platform.alert(&format!("🎉 {}", claimed.message));
                self.platform.navigate(DASHBOARD_PATH);
            }
            Err(e) => {
                log::error!("[Gift] Claim failed: {}", e);
                self.platform.alert(CLAIM_ERROR);
            }
        }

        self.state.update(|s| s.claiming = false);
    }
}
