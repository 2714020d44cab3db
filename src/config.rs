//! Controller Configuration
//!
//! Defaults match the clinic tracker pages; `<body>` data attributes can
//! override the API base and log level.

use web_sys::Document;

pub const NOTIFICATION_POLL_MS: u32 = 60_000;
pub const FLASH_DELAY_MS: u32 = 4_000;
pub const FLASH_FADE_MS: u32 = 500;
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this? This cannot be undone.";

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Prefix for API paths, without trailing slash ("" = same origin)
    pub api_base: String,
    pub notification_poll_ms: u32,
    pub flash_delay_ms: u32,
    pub flash_fade_ms: u32,
    pub confirm_message: String,
    pub log_level: log::Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notification_poll_ms: NOTIFICATION_POLL_MS,
            flash_delay_ms: FLASH_DELAY_MS,
            flash_fade_ms: FLASH_FADE_MS,
            confirm_message: DELETE_CONFIRM_MESSAGE.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl UiConfig {
    /// Read `data-api-base` / `data-log-level` from `<body>`
    pub fn from_document(document: &Document) -> Self {
        let mut config = Self::default();
        let Some(body) = document.body() else {
            return config;
        };
        let data = body.dataset();
        if let Some(base) = data.get("apiBase") {
            config.api_base = normalize_base(&base);
        }
        if let Some(level) = data.get("logLevel").and_then(|l| parse_level(&l)) {
            config.log_level = level;
        }
        config
    }

    pub fn notification_count_url(&self) -> String {
        format!("{}/api/notifications/count", self.api_base)
    }

    /// `task_id` must already be path-encoded
    pub fn task_status_url(&self, task_id: &str) -> String {
        format!("{}/api/task/{}/status", self.api_base, task_id)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn parse_level(level: &str) -> Option<log::Level> {
    level.trim().parse().ok()
}
