//! Notification badge polling
//!
//! The count is fetched once at install and then on a fixed interval. A
//! failed fetch leaves the badge as it was; the next tick is the retry.

use std::rc::Rc;

use page_bindings::{query_one, Bindings};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::api;
use crate::config::UiConfig;

/// What the badge should show after a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeUpdate {
    Show(String),
    Hide,
}

impl BadgeUpdate {
    pub fn from_count(count: i64) -> Self {
        if count > 0 {
            BadgeUpdate::Show(count.to_string())
        } else {
            BadgeUpdate::Hide
        }
    }

    pub fn apply(&self, badge: &HtmlElement) {
        let style = badge.style();
        match self {
            BadgeUpdate::Show(text) => {
                badge.set_text_content(Some(text));
                let _ = style.remove_property("display");
            }
            BadgeUpdate::Hide => {
                let _ = style.set_property("display", "none");
            }
        }
    }
}

fn current_badge() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    query_one(&document, ".notif-badge")
}

/// Fetch the count once and reflect it in `.notif-badge`
pub async fn refresh_badge(config: &UiConfig) {
    match api::fetch_notification_count(config).await {
        Ok(count) => {
            if let Some(badge) = current_badge() {
                BadgeUpdate::from_count(count).apply(&badge);
            }
        }
        Err(e) => log::debug!("[NOTIF] count fetch failed: {}", e),
    }
}

/// Running poll loop; dropping it stops polling
pub struct NotificationPoller {
    timer: Option<Bindings>,
}

impl NotificationPoller {
    /// Refresh now, then every `notification_poll_ms`
    pub fn start(config: Rc<UiConfig>) -> Self {
        spawn_refresh(config.clone());
        let period = config.notification_poll_ms;
        let mut timer = Bindings::new();
        timer.every(period, move || spawn_refresh(config.clone()));
        log::debug!("[NOTIF] polling every {} ms", period);
        Self { timer: Some(timer) }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.dispose();
            log::debug!("[NOTIF] polling stopped");
        }
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_refresh(config: Rc<UiConfig>) {
    spawn_local(async move {
        refresh_badge(&config).await;
    });
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::test_support::{document, fixture, FetchStub};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn test_positive_count_shows_badge() {
        let root = fixture(r#"<span class="notif-badge" style="display: none"></span>"#);
        let fetch = FetchStub::new(r#"{"count":3}"#);
        refresh_badge(&UiConfig::default()).await;

        let badge: HtmlElement = query_one(&document(), ".notif-badge").unwrap();
        assert!(fetch.last_url().ends_with("/api/notifications/count"));
        assert_eq!(badge.text_content().unwrap(), "3");
        assert_eq!(badge.style().get_property_value("display").unwrap(), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_zero_count_hides_badge() {
        let root = fixture(r#"<span class="notif-badge">4</span>"#);
        let _fetch = FetchStub::new(r#"{"count":0}"#);
        refresh_badge(&UiConfig::default()).await;

        let badge: HtmlElement = query_one(&document(), ".notif-badge").unwrap();
        assert_eq!(badge.style().get_property_value("display").unwrap(), "none");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_poller_fetches_on_start() {
        let root = fixture(r#"<span class="notif-badge" style="display: none"></span>"#);
        let _fetch = FetchStub::new(r#"{"count":2}"#);
        // Interval far beyond the wait: only the immediate refresh can run
        let mut poller = NotificationPoller::start(Rc::new(UiConfig::default()));
        TimeoutFuture::new(30).await;

        let badge: HtmlElement = query_one(&document(), ".notif-badge").unwrap();
        assert_eq!(badge.text_content().unwrap(), "2");
        assert_eq!(badge.style().get_property_value("display").unwrap(), "");
        poller.stop();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_poller_refreshes_each_period() {
        let root = fixture(r#"<span class="notif-badge"></span>"#);
        let config = Rc::new(UiConfig {
            notification_poll_ms: 20,
            ..UiConfig::default()
        });
        let first = FetchStub::new(r#"{"count":1}"#);
        let mut poller = NotificationPoller::start(config);
        TimeoutFuture::new(10).await;
        drop(first);

        let _second = FetchStub::new(r#"{"count":5}"#);
        TimeoutFuture::new(40).await;
        let badge: HtmlElement = query_one(&document(), ".notif-badge").unwrap();
        assert_eq!(badge.text_content().unwrap(), "5");
        poller.stop();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_apply_show_then_hide() {
        let root = fixture(r#"<span class="notif-badge" style="display: none"></span>"#);
        let badge: HtmlElement = query_one(&document(), ".notif-badge").unwrap();

        BadgeUpdate::from_count(3).apply(&badge);
        assert_eq!(badge.text_content().unwrap(), "3");
        assert_eq!(badge.style().get_property_value("display").unwrap(), "");

        BadgeUpdate::from_count(0).apply(&badge);
        assert_eq!(badge.style().get_property_value("display").unwrap(), "none");
        assert_eq!(badge.text_content().unwrap(), "3");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_failed_fetch_leaves_badge_untouched() {
        let root = fixture(r#"<span class="notif-badge">7</span>"#);
        let config = UiConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            ..UiConfig::default()
        };
        refresh_badge(&config).await;

        let badge: HtmlElement = query_one(&document(), ".notif-badge").unwrap();
        assert_eq!(badge.text_content().unwrap(), "7");
        assert_eq!(badge.style().get_property_value("display").unwrap(), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_stopped_poller_is_idle() {
        let config = Rc::new(UiConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            ..UiConfig::default()
        });
        let mut poller = NotificationPoller::start(config);
        assert!(poller.is_running());
        poller.stop();
        assert!(!poller.is_running());
        TimeoutFuture::new(10).await;
    }
}
