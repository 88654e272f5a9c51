//! UI連携
//!
//! データに依存しない部分（パネル、スクロール、年表示、ナビ）は
//! 読み込み前に接続する。

pub mod panels;
pub mod reveal;
pub mod scroll;
pub mod skill;
pub mod tabs;

use crate::dom;
use folio_common::href::is_current_page;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;

/// `[data-year]` に今年を入れる
fn stamp_year() {
    let year = js_sys::Date::new_0().get_full_year().to_string();
    for el in dom::query_all("[data-year]") {
        el.set_text_content(Some(&year));
    }
}

/// 現在のページを指すナビリンクに active を付ける
fn mark_nav_active() {
    let current = dom::pathname();
    for link in dom::query_all(".nav a") {
        let Ok(anchor) = link.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        if is_current_page(&current, &anchor.pathname()) {
            dom::set_class(&anchor, "active", true);
            let _ = anchor.set_attribute("aria-current", "page");
        }
    }
}

/// hrefの無いカードはクリックしても移動しない
fn guard_disabled_cards() {
    let Some(document) = dom::document() else {
        return;
    };
    dom::on(&document, "click", |ev| {
        if dom::closest_target(&ev, ".card.is-disabled").is_some() {
            ev.prevent_default();
        }
    });
}

pub fn wire_static() {
    panels::wire();
    scroll::wire();
    stamp_year();
    mark_nav_active();
    guard_disabled_cards();
}
