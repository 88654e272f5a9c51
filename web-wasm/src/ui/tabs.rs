//! タブ/セグメントのDOM連携
//!
//! 状態は TabState が持ち、DOMには反映するだけ。

use crate::dom;
use folio_common::{escape_html, TabState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

const TAB_ATTR: &str = "data-tab";
const PANEL_ATTR: &str = "data-panel";
const ACTIVE_CLASS: &str = "is-active";

/// タグフィルタのボタン列
pub fn buttons_html(keys: &[String]) -> String {
    keys.iter()
        .map(|key| {
            let key = escape_html(key);
            format!(
                "<button type=\"button\" class=\"fbtn\" role=\"tab\" {}=\"{}\">{}</button>",
                TAB_ATTR, key, key
            )
        })
        .collect()
}

/// ボタンのアクティブ表示と、対応するパネルの表示/非表示を反映
fn apply(bar: &Element, panels: &[Element], state: &TabState) {
    for button in dom::query_all_in(bar, &format!("[{}]", TAB_ATTR)) {
        let key = button.get_attribute(TAB_ATTR).unwrap_or_default();
        let active = state.is_active(&key);
        dom::set_class(&button, ACTIVE_CLASS, active);
        let _ = button.set_attribute("aria-selected", if active { "true" } else { "false" });
    }

    for panel in panels {
        let key = panel.get_attribute(PANEL_ATTR).unwrap_or_default();
        if state.contains(&key) {
            dom::set_hidden(panel, !state.is_active(&key));
        }
    }
}

/// タブバーを接続
///
/// 初期状態をすぐに反映し、`on_change` をアクティブキーで1回呼ぶ。
/// 以降はクリックで選択が変わるたびに呼ぶ。
pub fn wire<F>(bar: Element, state: TabState, panels: Vec<Element>, on_change: F)
where
    F: Fn(&str) + 'static,
{
    apply(&bar, &panels, &state);
    if let Some(active) = state.active() {
        on_change(active);
    }

    let state = Rc::new(RefCell::new(state));
    let target = bar.clone();
    dom::on(&target, "click", move |ev| {
        let Some(button) = dom::closest_target(&ev, &format!("[{}]", TAB_ATTR)) else {
            return;
        };
        let Some(key) = button.get_attribute(TAB_ATTR) else {
            return;
        };
        if !state.borrow_mut().select(&key) {
            return;
        }
        apply(&bar, &panels, &state.borrow());
        on_change(&key);
    });
}

/// 作品ページのカテゴリパネル
pub fn category_panels() -> Vec<Element> {
    dom::query_all(&format!("[{}]", PANEL_ATTR))
}
