//! スクロール表示（IntersectionObserver）
//!
//! 要素はページ上で1回だけ登録し、初めて閾値を超えて見えたときに
//! `is-in` を付けて監視を外す。スキルバーならその場でアニメーション開始。

use super::skill;
use crate::dom;
use folio_common::{AnimationGuard, ElementId, RevealRegistry, SiteConfig, SkillTiming};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str = ".reveal, .skill[data-level]";
const REVEALED_CLASS: &str = "is-in";
const ID_ATTR: &str = "data-reveal-id";

fn element_id(el: &Element) -> Option<ElementId> {
    el.get_attribute(ID_ATTR)?.parse().ok()
}

fn reveal(el: &Element, id: ElementId, guard: &RefCell<AnimationGuard>, timing: SkillTiming) {
    dom::set_class(el, REVEALED_CLASS, true);
    if el.matches(skill::SKILL_SELECTOR).unwrap_or(false) {
        skill::animate(el, id, guard, timing);
    }
}

/// ページ全体で共有するスケジューラ
#[derive(Clone)]
pub struct Revealer {
    registry: Rc<RefCell<RevealRegistry>>,
    guard: Rc<RefCell<AnimationGuard>>,
    timing: SkillTiming,
    observer: Option<IntersectionObserver>,
}

impl Revealer {
    pub fn new(config: &SiteConfig) -> Self {
        let registry = Rc::new(RefCell::new(RevealRegistry::new(config.reveal_threshold)));
        let guard = Rc::new(RefCell::new(AnimationGuard::default()));
        let timing = config.skill;

        let observer = create_observer(registry.clone(), guard.clone(), timing);
        if observer.is_none() {
            log::warn!("IntersectionObserver unavailable, revealing everything immediately");
        }

        Self {
            registry,
            guard,
            timing,
            observer,
        }
    }

    /// 未登録の要素をすべて監視対象に加える
    pub fn observe_all(&self) {
        let mut added = 0;
        for el in dom::query_all(REVEAL_SELECTOR) {
            if element_id(&el).is_some() {
                continue;
            }
            let id = self.registry.borrow_mut().register();
            let _ = el.set_attribute(ID_ATTR, &id.to_string());
            added += 1;

            match &self.observer {
                Some(observer) => observer.observe(&el),
                None => {
                    if self.registry.borrow_mut().mark_triggered(id) {
                        reveal(&el, id, &self.guard, self.timing);
                    }
                }
            }
        }
        log::debug!(
            "observing {} new elements ({} registered)",
            added,
            self.registry.borrow().len()
        );
    }

    /// コンテナ内の登録済み要素を監視対象と登録から外す（中身を差し替える前に呼ぶ）
    pub fn release_in(&self, container: &Element) {
        let mut released = 0;
        for el in dom::query_all_in(container, &format!("[{}]", ID_ATTR)) {
            let Some(id) = element_id(&el) else {
                continue;
            };
            if let Some(observer) = &self.observer {
                observer.unobserve(&el);
            }
            if self.registry.borrow_mut().forget(id) {
                released += 1;
            }
        }
        log::debug!("released {} elements", released);
    }
}

fn create_observer(
    registry: Rc<RefCell<RevealRegistry>>,
    guard: Rc<RefCell<AnimationGuard>>,
    timing: SkillTiming,
) -> Option<IntersectionObserver> {
    let threshold = registry.borrow().threshold();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = element_id(&target) else {
                    continue;
                };

                let trigger = registry.borrow().should_trigger(id, entry.is_intersecting());
                if !trigger || !registry.borrow_mut().mark_triggered(id) {
                    continue;
                }

                observer.unobserve(&target);
                reveal(&target, id, &guard, timing);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    callback.forget();
    Some(observer)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn grid_with_cards(id: &str, count: usize) -> Element {
        let document = dom::document().expect("document");
        let grid = document.create_element("div").expect("create div");
        grid.set_id(id);
        grid.set_inner_html(&"<a class=\"card reveal\"></a>".repeat(count));
        document.body().expect("body").append_child(&grid).expect("append");
        grid
    }

    #[wasm_bindgen_test]
    fn wasm_release_in_forgets_replaced_cards() {
        let revealer = Revealer::new(&SiteConfig::default());
        let grid = grid_with_cards("releaseTest", 3);

        let before = revealer.registry.borrow().len();
        revealer.observe_all();
        assert_eq!(revealer.registry.borrow().len(), before + 3);

        revealer.release_in(&grid);
        assert_eq!(revealer.registry.borrow().len(), before);

        // 差し替え後の要素だけが登録される
        grid.set_inner_html("<a class=\"card reveal\"></a>");
        revealer.observe_all();
        assert_eq!(revealer.registry.borrow().len(), before + 1);
    }
}
