//! Flash message auto-dismiss
//!
//! Each `.flash` fades out after `flash_delay_ms` and is removed once the
//! fade has had `flash_fade_ms` to run.

use page_bindings::{query_all_as, Bindings};
use web_sys::{Document, HtmlElement};

use crate::config::UiConfig;

pub fn bind(document: &Document, bindings: &mut Bindings, config: &UiConfig) {
    let flashes = query_all_as::<HtmlElement>(document, ".flash");
    if flashes.is_empty() {
        return;
    }
    log::debug!("[FLASH] scheduling dismissal of {} messages", flashes.len());

    let fade = format!("opacity {}s", config.flash_fade_ms as f64 / 1000.0);
    for flash in flashes {
        let fading = flash.clone();
        let transition = fade.clone();
        bindings.after(config.flash_delay_ms, move || {
            let style = fading.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transition", &transition);
        });
        bindings.after(config.flash_delay_ms + config.flash_fade_ms, move || {
            flash.remove();
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_support::{document, fixture};
    use gloo_timers::future::TimeoutFuture;
    use page_bindings::query_one;
    use wasm_bindgen_test::*;

    fn fast_config() -> UiConfig {
        UiConfig {
            flash_delay_ms: 40,
            flash_fade_ms: 20,
            ..UiConfig::default()
        }
    }

    #[wasm_bindgen_test]
    async fn test_flash_fades_then_is_removed() {
        let root = fixture(r#"<div class="flash">Saved</div><div class="flash">Again</div>"#);
        let mut bindings = Bindings::new();
        bind(&document(), &mut bindings, &fast_config());
        assert_eq!(bindings.timer_count(), 4);

        TimeoutFuture::new(50).await;
        let flash: HtmlElement = query_one(&document(), ".flash").unwrap();
        assert_eq!(flash.style().get_property_value("opacity").unwrap(), "0");

        TimeoutFuture::new(40).await;
        assert_eq!(root.query_selector_all(".flash").unwrap().length(), 0);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_default_timing_window() {
        let root = fixture(r#"<div class="flash">Saved</div>"#);
        let mut bindings = Bindings::new();
        bind(&document(), &mut bindings, &UiConfig::default());

        TimeoutFuture::new(4_250).await;
        let flash: HtmlElement = query_one(&document(), ".flash").unwrap();
        assert_eq!(flash.style().get_property_value("opacity").unwrap(), "0");

        TimeoutFuture::new(750).await;
        assert!(query_one::<HtmlElement>(&document(), ".flash").is_none());
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_dispose_cancels_dismissal() {
        let root = fixture(r#"<div class="flash">Stays</div>"#);
        let mut bindings = Bindings::new();
        bind(&document(), &mut bindings, &fast_config());
        bindings.dispose();

        TimeoutFuture::new(90).await;
        let flash: HtmlElement = query_one(&document(), ".flash").unwrap();
        assert_eq!(flash.style().get_property_value("opacity").unwrap(), "");
        root.remove();
    }
}
