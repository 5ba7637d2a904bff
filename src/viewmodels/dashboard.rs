//! Dashboard View Model
//!
//! The user's elephants, orders and sent gifts, plus the gift modal and the
//! inline purchase form.

use std::rc::Rc;

use futures::FutureExt;
use reactive_stores::Store;

use super::{Notice, Observable, Subscription};
use crate::api::ApiClient;
use crate::clipboard::copy_to_clipboard;
use crate::config::AppConfig;
use crate::hue::DEFAULT_HUE;
use crate::models::{CreateGiftRequest, DesiredColor, Elephant, Gift, Order, TariffKind};
use crate::platform::Platform;

const GIFT_ERROR: &str = "Произошла ошибка при создании подарка";
const LINK_COPIED: &str = "Ссылка скопирована!";
const LINK_COPY_FAILED: &str = "Не удалось скопировать ссылку";
const ORDER_CREATED: &str = "Заказ успешно создан! Генерация слона началась...";
const ORDER_ERROR: &str = "Произошла ошибка при создании заказа";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftForm {
    pub sender_name: String,
    pub recipient_name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Store)]
pub struct DashboardState {
    pub loading: bool,
    pub elephants: Vec<Elephant>,
    pub orders: Vec<Order>,
    pub sent_gifts: Vec<Gift>,

    pub show_gift_modal: bool,
    pub selected_elephant: Option<Elephant>,
    pub gift_form: GiftForm,
    pub gift_loading: bool,
    /// Shareable link once the gift is created
    pub gift_link: Option<String>,

    pub show_purchase: bool,
    pub selected_hue: u16,
    pub purchase_loading: bool,
    pub purchase_notice: Option<Notice>,
}

impl DashboardState {
    fn new(username: &str) -> Self {
        Self {
            loading: true,
            elephants: Vec::new(),
            orders: Vec::new(),
            sent_gifts: Vec::new(),
            show_gift_modal: false,
            selected_elephant: None,
            gift_form: GiftForm {
                sender_name: username.to_string(),
                ..GiftForm::default()
            },
            gift_loading: false,
            gift_link: None,
            show_purchase: false,
            selected_hue: DEFAULT_HUE,
            purchase_loading: false,
            purchase_notice: None,
        }
    }
}

#[derive(Clone)]
pub struct DashboardModel {
    api: ApiClient,
    platform: Rc<dyn Platform>,
    username: Rc<str>,
    order_refresh_delay_ms: u32,
    state: Observable<DashboardState>,
}

impl DashboardModel {
    pub fn new(api: ApiClient, platform: Rc<dyn Platform>, config: &AppConfig) -> Self {
        Self {
            api,
            platform,
            username: Rc::from(config.username.as_str()),
            order_refresh_delay_ms: config.order_refresh_delay_ms,
            state: Observable::new(DashboardState::new(&config.username)),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.snapshot()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&DashboardState) + 'static) -> Subscription {
        self.state.subscribe(subscriber)
    }

    // ========================
    // Loading
    // ========================

    /// Load all three lists concurrently; one failing list leaves the others intact
    pub async fn load_data(&self) {
        self.state.update(|s| s.loading = true);
        futures::join!(self.load_elephants(), self.load_orders(), self.load_sent_gifts());
        self.state.update(|s| s.loading = false);
    }

    pub async fn load_elephants(&self) {
        match self.api.elephants().list().await {
            Ok(elephants) => {
                log::debug!("[Dashboard] Loaded {} elephants", elephants.len());
                self.state.update(|s| s.elephants = elephants);
            }
            Err(e) => log::error!("[Dashboard] Failed to load elephants: {}", e),
        }
    }

    pub async fn load_orders(&self) {
        match self.api.orders().list().await {
            Ok(orders) => self.state.update(|s| s.orders = orders),
            Err(e) => log::error!("[Dashboard] Failed to load orders: {}", e),
        }
    }

    pub async fn load_sent_gifts(&self) {
        match self.api.gifts().list_sent().await {
            Ok(gifts) => self.state.update(|s| s.sent_gifts = gifts),
            Err(e) => log::error!("[Dashboard] Failed to load sent gifts: {}", e),
        }
    }

    pub fn download_url(&self, elephant_id: u32) -> String {
        self.api.elephants().download_url(elephant_id)
    }

    pub fn download_elephant(&self, elephant_id: u32) {
        self.platform.open_in_new_tab(&self.download_url(elephant_id));
    }

    // ========================
    // Gifts
    // ========================

    pub fn open_gift_modal(&self, elephant: Elephant) {
        let username = self.username.to_string();
        self.state.update(|s| {
            s.selected_elephant = Some(elephant);
            s.show_gift_modal = true;
            s.gift_link = None;
            s.gift_form = GiftForm {
                sender_name: username,
                ..GiftForm::default()
            };
        });
    }

    pub fn close_gift_modal(&self) {
        self.state.update(|s| {
            s.show_gift_modal = false;
            s.selected_elephant = None;
            s.gift_link = None;
        });
    }

    pub fn edit_gift_form(&self, edit: impl FnOnce(&mut GiftForm)) {
        self.state.update(|s| edit(&mut s.gift_form));
    }

    /// Create a gift link for the selected elephant, then refresh gifts and elephants
    pub async fn create_gift(&self) {
        let request = self.state.with(|s| {
            s.selected_elephant.as_ref().map(|elephant| CreateGiftRequest {
                elephant_id: elephant.id,
                sender_name: s.gift_form.sender_name.clone(),
                recipient_name: s.gift_form.recipient_name.clone(),
                message: s.gift_form.message.clone(),
            })
        });
        let Some(request) = request else {
            log::warn!("[Dashboard] Gift requested without a selected elephant");
            return;
        };

        self.state.update(|s| s.gift_loading = true);

        match self.api.gifts().create(&request).await {
            Ok(gift) => {
                let link = format!("{}{}", self.platform.origin(), gift.public_url);
                log::info!("[Dashboard] Gift {} created for elephant {}", gift.uuid, request.elephant_id);
                self.state.update(|s| s.gift_link = Some(link));
                self.load_sent_gifts().await;
                self.load_elephants().await;
            }
            Err(e) => {
                log::error!("[Dashboard] Gift creation failed: {}", e);
                self.platform.alert(GIFT_ERROR);
            }
        }

        self.state.update(|s| s.gift_loading = false);
    }

    /// Public claim page for a gift
    pub fn gift_page_url(&self, uuid: &str) -> String {
        format!("{}/gift/{}/", self.platform.origin(), uuid)
    }

    pub async fn copy_gift_link(&self, uuid: &str) {
        let link = self.gift_page_url(uuid);
        self.copy_link(&link).await;
    }

    pub async fn copy_gift_link_from_modal(&self) {
        let Some(link) = self.state.with(|s| s.gift_link.clone()) else {
            return;
        };
        self.copy_link(&link).await;
    }

    async fn copy_link(&self, link: &str) {
        match copy_to_clipboard(self.platform.as_ref(), link).await {
            Ok(()) => self.platform.alert(LINK_COPIED),
            Err(e) => {
                log::error!("[Dashboard] Failed to copy: {}", e);
                self.platform.alert(LINK_COPY_FAILED);
            }
        }
    }

    // ========================
    // Purchase
    // ========================

    pub fn toggle_purchase(&self) {
        self.state.update(|s| s.show_purchase = !s.show_purchase);
    }

    pub fn select_hue(&self, hue: u16) {
        self.state.update(|s| s.selected_hue = hue);
    }

    pub async fn buy_basic(&self) {
        self.create_order(TariffKind::Basic).await;
    }

    pub async fn buy_advanced(&self) {
        self.create_order(TariffKind::Advanced).await;
    }

    pub async fn create_order(&self, tariff: TariffKind) {
        self.state.update(|s| {
            s.purchase_loading = true;
            s.purchase_notice = None;
        });

        let hue = self.state.with(|s| s.selected_hue);
        match self.api.orders().create(tariff, DesiredColor::for_tariff(tariff, hue)).await {
            Ok(order) => {
                log::info!("[Dashboard] Order {} created ({})", order.id, tariff.as_str());
                self.state.update(|s| {
                    s.purchase_notice = Some(Notice::success(ORDER_CREATED));
                    s.show_purchase = false;
                });
                self.load_orders().await;
                self.schedule_refresh();
            }
            Err(e) => {
                log::error!("[Dashboard] Order creation failed: {}", e);
                let text = e.user_message().unwrap_or(ORDER_ERROR).to_string();
                self.state.update(|s| s.purchase_notice = Some(Notice::error(text)));
            }
        }

        self.state.update(|s| s.purchase_loading = false);
    }

    /// Elephant generation runs in the background; clear the banner and
    /// re-poll elephants after a delay
    fn schedule_refresh(&self) {
        let model = self.clone();
        let delay = self.platform.sleep(self.order_refresh_delay_ms);
        self.platform.spawn(
            async move {
                delay.await;
                model.state.update(|s| s.purchase_notice = None);
                model.load_elephants().await;
            }
            .boxed_local(),
        );
    }
}
