//! ドロワーメニューと検索オーバーレイ
//!
//! `[data-open="<id>"]` で開き、`[data-close="<id>"]` かEscキーで閉じる。

use crate::dom;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, KeyboardEvent};

struct Panel {
    id: &'static str,
    body_class: &'static str,
    /// 開いたときにフォーカスする要素
    focus: Option<&'static str>,
}

const PANELS: &[Panel] = &[
    Panel {
        id: "drawer",
        body_class: "is-drawer-open",
        focus: None,
    },
    Panel {
        id: "searchPanel",
        body_class: "is-search-open",
        focus: Some("searchInput"),
    },
];

fn find(id: &str) -> Option<&'static Panel> {
    PANELS.iter().find(|p| p.id == id)
}

fn set_open(panel: &Panel, open: bool) {
    let Some(el) = dom::by_id(panel.id) else {
        return;
    };
    dom::set_class(&el, "is-open", open);
    let _ = el.set_attribute("aria-hidden", if open { "false" } else { "true" });

    if let Some(body) = dom::document().and_then(|d| d.body()) {
        dom::set_class(&body, panel.body_class, open);
    }

    if open {
        if let Some(input) = panel
            .focus
            .and_then(dom::by_id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            let _ = input.focus();
        }
    }
}

fn close_all() {
    for panel in PANELS {
        set_open(panel, false);
    }
}

pub fn wire() {
    let Some(document) = dom::document() else {
        return;
    };

    dom::on(&document, "click", |ev| {
        if let Some(trigger) = dom::closest_target(&ev, "[data-open]") {
            if let Some(panel) = trigger.get_attribute("data-open").as_deref().and_then(find) {
                ev.prevent_default();
                set_open(panel, true);
            }
            return;
        }
        if let Some(trigger) = dom::closest_target(&ev, "[data-close]") {
            if let Some(panel) = trigger.get_attribute("data-close").as_deref().and_then(find) {
                ev.prevent_default();
                set_open(panel, false);
            }
            return;
        }
        // ドロワー内のリンクを押したら閉じる
        if dom::closest_target(&ev, "#drawer a").is_some() {
            if let Some(drawer) = find("drawer") {
                set_open(drawer, false);
            }
        }
    });

    dom::on(&document, "keydown", |ev| {
        let is_escape = ev
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Escape")
            .unwrap_or(false);
        if is_escape {
            close_all();
        }
    });
}
