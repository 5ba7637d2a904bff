//! Tariff Selection View Model
//!
//! Landing page purchase flow. What happens after a successful order depends
//! on the deployment's `CheckoutFlow`.

use std::rc::Rc;

use reactive_stores::Store;

use super::{Notice, Observable, Subscription, DASHBOARD_PATH};
use crate::api::ApiClient;
use crate::config::{AppConfig, CheckoutFlow};
use crate::hue::DEFAULT_HUE;
use crate::models::{DesiredColor, Tariff, TariffKind};
use crate::platform::Platform;

const ORDER_ERROR: &str = "Произошла ошибка";
const ORDER_CREATED: &str = "Заказ успешно создан! Перенаправляем в личный кабинет...";
const NO_PAYMENT_URL: &str = "Не удалось получить ссылку на оплату";

#[derive(Debug, Clone, PartialEq, Store)]
pub struct TariffState {
    /// Backend tariff catalogue, empty until loaded
    pub tariffs: Vec<Tariff>,
    pub selected_hue: u16,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl Default for TariffState {
    fn default() -> Self {
        Self {
            tariffs: Vec::new(),
            selected_hue: DEFAULT_HUE,
            loading: false,
            notice: None,
        }
    }
}

impl TariffState {
    pub fn tariff(&self, kind: TariffKind) -> Option<&Tariff> {
        self.tariffs.iter().find(|t| t.name == kind.as_str())
    }
}

#[derive(Clone)]
pub struct TariffModel {
    api: ApiClient,
    platform: Rc<dyn Platform>,
    flow: CheckoutFlow,
    redirect_delay_ms: u32,
    state: Observable<TariffState>,
}

impl TariffModel {
    pub fn new(api: ApiClient, platform: Rc<dyn Platform>, config: &AppConfig) -> Self {
        Self {
            api,
            platform,
            flow: config.checkout_flow,
            redirect_delay_ms: config.dashboard_redirect_delay_ms,
            state: Observable::new(TariffState::default()),
        }
    }

    pub fn snapshot(&self) -> TariffState {
        self.state.snapshot()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&TariffState) + 'static) -> Subscription {
        self.state.subscribe(subscriber)
    }

    /// Fetch prices and descriptions; the page keeps its static labels on failure
    pub async fn load_tariffs(&self) {
        match self.api.tariffs().list().await {
            Ok(tariffs) => {
                log::debug!("[Tariff] Loaded {} tariffs", tariffs.len());
                self.state.update(|s| s.tariffs = tariffs);
            }
            Err(e) => log::error!("[Tariff] Failed to load tariffs: {}", e),
        }
    }

    pub fn select_hue(&self, hue: u16) {
        self.state.update(|s| s.selected_hue = hue);
    }

    pub fn dismiss_message(&self) {
        self.state.update(|s| s.notice = None);
    }

    pub async fn buy_basic(&self) {
        self.create_order(TariffKind::Basic).await;
    }

    pub async fn buy_advanced(&self) {
        self.create_order(TariffKind::Advanced).await;
    }

    /// Place the order, then leave the page. `loading` stays set on success
    /// since the page is about to unload.
    pub async fn create_order(&self, tariff: TariffKind) {
        self.state.update(|s| {
            s.loading = true;
            s.notice = None;
        });

        let hue = self.state.with(|s| s.selected_hue);
        let order = match self.api.orders().create(tariff, DesiredColor::for_tariff(tariff, hue)).await {
            Ok(order) => order,
            Err(e) => {
                log::error!("[Tariff] Order creation error: {}", e);
                self.fail(e.user_message().unwrap_or(ORDER_ERROR));
                return;
            }
        };

        match self.flow {
            CheckoutFlow::PaymentRedirect => match order.payment_url {
                Some(url) => {
                    log::info!("[Tariff] Order {} created, redirecting to payment", order.id);
                    self.platform.navigate(&url);
                }
                None => {
                    log::error!("[Tariff] Order {} has no payment_url", order.id);
                    self.fail(NO_PAYMENT_URL);
                }
            },
            CheckoutFlow::DashboardRedirect => {
                log::info!("[Tariff] Order {} created, redirecting to dashboard", order.id);
                self.state.update(|s| s.notice = Some(Notice::success(ORDER_CREATED)));
                self.platform.sleep(self.redirect_delay_ms).await;
                self.platform.navigate(DASHBOARD_PATH);
            }
        }
    }

    fn fail(&self, text: &str) {
        self.state.update(|s| {
            s.notice = Some(Notice::error(text));
            s.loading = false;
        });
    }
}
