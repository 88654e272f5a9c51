//! DOM操作のヘルパー
//!
//! ページごとにある要素が違うので、見つからない要素はすべて None / 何もしない扱い。

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// 現在のパス名（取得できなければ "/"）
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(collect)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// コンテナの中身をHTMLで置き換える
pub fn mount_grid(id: &str, html: &str) -> Option<Element> {
    match by_id(id) {
        Some(container) => {
            container.set_inner_html(html);
            Some(container)
        }
        None => {
            log::debug!("#{} not on this page, skipped", id);
            None
        }
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_hidden(el: &Element, hidden: bool) {
    if hidden {
        let _ = el.set_attribute("hidden", "");
    } else {
        let _ = el.remove_attribute("hidden");
    }
    let _ = el.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
}

/// イベント発生元から selector に一致する最も近い祖先
pub fn closest_target(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// イベントリスナーを登録（ページが生きている間は解除しない）
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container(id: &str) -> Element {
        let document = document().expect("document");
        let el = document.create_element("div").expect("create div");
        el.set_id(id);
        document.body().expect("body").append_child(&el).expect("append");
        el
    }

    #[wasm_bindgen_test]
    fn wasm_mount_grid_replaces_content() {
        let el = container("mountGridTest");
        el.set_inner_html("<p>old</p>");

        assert!(mount_grid("mountGridTest", "<a class=\"card\"></a>").is_some());
        assert_eq!(query_all_in(&el, ".card").len(), 1);
        assert!(query_in(&el, "p").is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_mount_grid_missing_container_is_noop() {
        assert!(mount_grid("noSuchGrid", "<p></p>").is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_set_hidden_toggles_aria() {
        let el = container("hiddenTest");
        set_hidden(&el, true);
        assert!(el.has_attribute("hidden"));
        assert_eq!(el.get_attribute("aria-hidden").as_deref(), Some("true"));

        set_hidden(&el, false);
        assert!(!el.has_attribute("hidden"));
    }
}
