//! Browser side of scrolling and reveal animations.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::scroll::{ElementBounds, RevealLatch, ScrollMetrics};
use crate::view::{anchor_target, AnchorTarget};

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_KEY_ATTR: &str = "data-reveal";
pub const VISIBLE_CLASS: &str = "visible";

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls to the element with `id`. Returns `false` if there is none.
pub fn scroll_to_anchor(id: &str) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("No element #{} to scroll to", id);
            false
        }
    }
}

/// Handles an in-page `href`; other links are left to the browser.
pub fn follow_anchor(href: &str) {
    match anchor_target(href) {
        Some(AnchorTarget::Top) => scroll_to_top(),
        Some(AnchorTarget::Section(id)) => {
            scroll_to_anchor(id);
        }
        None => {}
    }
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let root = window()?.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: root.scroll_top() as f64,
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
    })
}

fn reveal_key(element: &Element, index: u32) -> String {
    element
        .get_attribute(REVEAL_KEY_ATTR)
        .filter(|k| !k.is_empty())
        .or_else(|| Some(element.id()).filter(|id| !id.is_empty()))
        .unwrap_or_else(|| format!("reveal-{}", index))
}

/// Marks every `.reveal` element that is (or ever was) in view. Returns how many were newly latched.
pub fn reveal_pass(latch: &mut RevealLatch) -> usize {
    let Some(window) = window() else { return 0 };
    let Some(document) = window.document() else { return 0 };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else { return 0 };

    let mut newly_revealed = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let key = reveal_key(&element, index);
        let rect = element.get_bounding_client_rect();
        let bounds = ElementBounds {
            top: rect.top(),
            height: rect.height(),
        };
        if latch.observe(&key, bounds, viewport_height) {
            newly_revealed += 1;
        }
        if latch.is_revealed(&key) {
            let _ = element.class_list().add_1(VISIBLE_CLASS);
        }
    }
    if newly_revealed > 0 {
        debug!("Revealed {} elements, {} in total", newly_revealed, latch.revealed_count());
    }
    newly_revealed
}
