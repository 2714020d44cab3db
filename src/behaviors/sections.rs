//! Collapsible department sections
//!
//! A `.dept-header` toggles the element right after it. The body's inline
//! `display` is the only state.

use page_bindings::{query_all, Bindings};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const EXPANDED_GLYPH: &str = "▼";
const COLLAPSED_GLYPH: &str = "▶";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Expanded,
    Collapsed,
}

impl SectionState {
    /// State implied by a body's inline `display` value
    pub fn from_display(display: &str) -> Self {
        if display.trim() == "none" {
            SectionState::Collapsed
        } else {
            SectionState::Expanded
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SectionState::Expanded => SectionState::Collapsed,
            SectionState::Collapsed => SectionState::Expanded,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SectionState::Expanded => EXPANDED_GLYPH,
            SectionState::Collapsed => COLLAPSED_GLYPH,
        }
    }
}

pub fn bind(document: &Document, bindings: &mut Bindings) {
    for header in query_all(document, ".dept-header") {
        let target = header.clone();
        bindings.listen(&header, "click", move |_| toggle_section(&target));
    }
}

fn toggle_section(header: &Element) {
    let Some(body) = header
        .next_element_sibling()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let style = body.style();
    let current = SectionState::from_display(&style.get_property_value("display").unwrap_or_default());
    let next = current.toggled();
    match next {
        SectionState::Expanded => {
            let _ = style.remove_property("display");
        }
        SectionState::Collapsed => {
            let _ = style.set_property("display", "none");
        }
    }

    if let Ok(Some(icon)) = header.query_selector(".collapse-icon") {
        icon.set_text_content(Some(next.glyph()));
    }
}
