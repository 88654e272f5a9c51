//! スムーズスクロール

use crate::dom;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

fn scroll_to(top: f64) {
    let Some(window) = dom::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

fn page_height() -> f64 {
    dom::document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// 同一ページ内アンカーの移動先ID（`#` のみは対象外）
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn wire() {
    if let Some(button) = dom::by_id("toTop") {
        dom::on(&button, "click", |_| scroll_to(0.0));
    }
    if let Some(button) = dom::by_id("toBottom") {
        dom::on(&button, "click", |_| scroll_to(page_height()));
    }

    let Some(document) = dom::document() else {
        return;
    };
    dom::on(&document, "click", |ev| {
        let Some(link) = dom::closest_target(&ev, "a[href^='#']") else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(target) = anchor_id(&href).and_then(dom::by_id) else {
            return;
        };
        ev.prevent_default();
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    });
}
