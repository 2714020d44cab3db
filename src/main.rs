#![allow(warnings)]
//! Clinic Tracker Frontend Entry Point
//!
//! Attaches to the server-rendered pages once the document is parsed.

mod api;
mod behaviors;
mod config;
mod controller;
mod error;
mod models;

use std::cell::RefCell;

use config::UiConfig;
use controller::UiController;

thread_local! {
    /// Lives as long as the page
    static CONTROLLER: RefCell<Option<UiController>> = const { RefCell::new(None) };
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = start() {
        web_sys::console::error_1(&format!("[UI] not started: {}", e).into());
    }
}

fn start() -> error::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(error::UiError::MissingWindow)?;

    let config = UiConfig::from_document(&document);
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("[UI] logger already set: {}", e).into());
    }

    let ready_doc = document.clone();
    page_bindings::when_ready(&document, move || {
        // `<body>` exists only after parsing; re-read the overrides
        let config = UiConfig::from_document(&ready_doc);
        log::set_max_level(config.log_level.to_level_filter());
        match UiController::install(&ready_doc, config) {
            Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
            Err(e) => log::error!("[UI] install failed: {}", e),
        }
    });
    Ok(())
}
