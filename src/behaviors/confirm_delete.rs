//! Delete confirmation for `form.confirm-delete`

use std::rc::Rc;

use page_bindings::{query_all, Bindings};
use web_sys::{Document, Event};

use crate::config::UiConfig;

pub fn bind(document: &Document, bindings: &mut Bindings, config: &UiConfig) {
    let message: Rc<str> = Rc::from(config.confirm_message.as_str());
    for form in query_all(document, "form.confirm-delete") {
        let message = message.clone();
        bindings.listen(&form, "submit", move |ev: Event| {
            if !user_confirms(&message) {
                ev.prevent_default();
            }
        });
    }
}

/// A prompt that cannot be shown counts as a refusal
fn user_confirms(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
