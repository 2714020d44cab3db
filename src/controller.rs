//! UI Controller
//!
//! Installs every page behavior once and owns the resulting listeners,
//! timers and poller. Dropping the controller tears all of it down.

use std::rc::Rc;

use page_bindings::Bindings;
use web_sys::Document;

use crate::behaviors::{self, task_status, NotificationPoller};
use crate::config::UiConfig;
use crate::error::Result;

pub struct UiController {
    bindings: Bindings,
    poller: Option<NotificationPoller>,
}

impl UiController {
    /// Bind all behaviors to the elements currently in `document`
    pub fn install(document: &Document, config: UiConfig) -> Result<Self> {
        let config = Rc::new(config);
        let mut bindings = Bindings::new();

        behaviors::bind_menu(document, &mut bindings);
        behaviors::bind_flash(document, &mut bindings, &config);
        behaviors::bind_sections(document, &mut bindings);
        behaviors::bind_mentions(document);
        behaviors::bind_confirm_delete(document, &mut bindings, &config);
        task_status::bind(&mut bindings, config.clone())?;

        let poller = NotificationPoller::start(config);

        log::info!(
            "[UI] installed: {} listeners, {} timers",
            bindings.listener_count(),
            bindings.timer_count()
        );

        Ok(Self {
            bindings,
            poller: Some(poller),
        })
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(NotificationPoller::is_running)
    }

    pub fn stop_polling(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.stop();
        }
    }

    /// Remove every listener, cancel pending timers and stop polling
    pub fn dispose(mut self) {
        self.stop_polling();
        let bindings = std::mem::take(&mut self.bindings);
        bindings.dispose();
        log::info!("[UI] disposed");
    }
}
