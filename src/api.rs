//! Server API Bindings
//!
//! The two JSON endpoints the pages poll and update.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::models::{NotificationCount, StatusAck, StatusUpdate};

/// Fetch the unread notification count
pub async fn fetch_notification_count(config: &UiConfig) -> Result<i64> {
    let response = Request::get(&config.notification_count_url()).send().await?;

    if !response.ok() {
        return Err(UiError::Status(response.status()));
    }

    let body: NotificationCount = response.json().await?;
    Ok(body.count)
}

/// Ask the server to set a task's status; `Ok(true)` means it was accepted
pub async fn update_task_status(config: &UiConfig, task_id: &str, status: &str) -> Result<bool> {
    let path_id = utf8_percent_encode(task_id, NON_ALPHANUMERIC).to_string();

    let response = Request::post(&config.task_status_url(&path_id))
        .json(&StatusUpdate { status })?
        .send()
        .await?;

    if !response.ok() {
        return Err(UiError::Status(response.status()));
    }

    let ack: StatusAck = response.json().await?;
    Ok(ack.ok)
}
