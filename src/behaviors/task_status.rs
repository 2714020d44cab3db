//! Quick status update on the task table
//!
//! The status `<select>` in each task row calls `quickStatusUpdate(taskId, this)`.
//! The row and badge change only after the server accepts the new status.
//! On any failure the select snaps back to the last confirmed option, which
//! is tracked as the option's `defaultSelected` flag.

use std::rc::Rc;

use page_bindings::{Bindings, GlobalFunction};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::api;
use crate::config::UiConfig;
use crate::error::Result;
use crate::models::TaskStatus;

pub const GLOBAL_NAME: &str = "quickStatusUpdate";

const ROW_OVERDUE_CLASS: &str = "task-overdue";
const ROW_BLOCKED_CLASS: &str = "task-blocked";

/// Publish `window.quickStatusUpdate` for inline `onchange` handlers
pub fn bind(bindings: &mut Bindings, config: Rc<UiConfig>) -> Result<()> {
    let global = GlobalFunction::install(GLOBAL_NAME, move |task_id: JsValue, select: JsValue| {
        let Some(task_id) = task_id_from_js(&task_id) else {
            log::debug!("[STATUS] ignoring update with task id {:?}", task_id);
            return;
        };
        let Ok(select) = select.dyn_into::<HtmlSelectElement>() else {
            log::debug!("[STATUS] second argument is not a <select>");
            return;
        };
        quick_status_update(config.clone(), task_id, select);
    })?;
    bindings.publish(global);
    Ok(())
}

/// Send the select's current value for `task_id` and settle the row
pub fn quick_status_update(config: Rc<UiConfig>, task_id: String, select: HtmlSelectElement) {
    let status = TaskStatus::from_label(&select.value());
    spawn_local(async move {
        match api::update_task_status(&config, &task_id, status.label()).await {
            Ok(true) => {
                if let Err(e) = apply_confirmed_status(&select, &status) {
                    log::debug!("[STATUS] task {} confirmed but display update failed: {}", task_id, e);
                }
            }
            Ok(false) => {
                log::debug!("[STATUS] task {} update rejected", task_id);
                revert_to_confirmed(&select);
            }
            Err(e) => {
                log::debug!("[STATUS] task {} update failed: {}", task_id, e);
                revert_to_confirmed(&select);
            }
        }
    });
}

/// Reflect a server-confirmed status in the row, badge and select
pub fn apply_confirmed_status(select: &HtmlSelectElement, status: &TaskStatus) -> Result<()> {
    if let Some(row) = select.closest("tr")? {
        let classes = row.class_list();
        classes.remove_2(ROW_OVERDUE_CLASS, ROW_BLOCKED_CLASS)?;
        if status.is_blocked() {
            classes.add_1(ROW_BLOCKED_CLASS)?;
        }
    }

    if let Some(cell) = select.closest("td")? {
        if let Some(badge) = cell.query_selector(".badge")? {
            badge.set_class_name(&format!("badge {}", status.badge_class()));
            badge.set_text_content(Some(status.label()));
        }
    }

    for option in options(select) {
        option.set_default_selected(option.value() == status.label());
    }
    Ok(())
}

/// Put the select back on its last confirmed option, if it has one
pub fn revert_to_confirmed(select: &HtmlSelectElement) {
    if let Some(confirmed) = options(select).into_iter().find(|o| o.default_selected()) {
        select.set_value(&confirmed.value());
    }
}

fn options(select: &HtmlSelectElement) -> Vec<HtmlOptionElement> {
    let collection = select.options();
    (0..collection.length())
        .filter_map(|i| collection.get_with_index(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .collect()
}

/// Inline handlers pass the id as a number or a string.
/// Strings are used as given; an empty id has no route.
pub fn task_id_from_js(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        return (!s.is_empty()).then_some(s);
    }
    value.as_f64().and_then(format_task_number)
}

fn format_task_number(n: f64) -> Option<String> {
    if !n.is_finite() {
        return None;
    }
    if n == 0.0 {
        // covers -0.0
        return Some("0".to_string());
    }
    if n.fract() == 0.0 {
        Some(format!("{:.0}", n))
    } else {
        Some(n.to_string())
    }
}
