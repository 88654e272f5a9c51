//! スキルバーのアニメーション
//!
//! 幅はCSS transition（2段階）、数値は animation frame ごとに更新。

use crate::dom;
use folio_common::skill::{clamp_level, percent, SkillAnimation};
use folio_common::{AnimationGuard, ElementId, SkillPlan, SkillTiming};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

pub const SKILL_SELECTOR: &str = ".skill[data-level]";
const FILL_SELECTOR: &str = ".skill-fill";
const OUTPUT_SELECTOR: &str = ".skill-num";

fn prefers_reduced_motion() -> bool {
    dom::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// スキルバー1本を動かす（要素ごとに1回だけ）
pub fn animate(el: &Element, id: ElementId, guard: &RefCell<AnimationGuard>, timing: SkillTiming) {
    if !guard.borrow_mut().begin(id) {
        return;
    }

    let level = clamp_level(&el.get_attribute("data-level").unwrap_or_default());
    let fill = dom::query_in(el, FILL_SELECTOR).and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let output = dom::query_in(el, OUTPUT_SELECTOR);

    match SkillAnimation::plan(level, timing, prefers_reduced_motion()) {
        SkillAnimation::Instant { level } => show_final(fill.as_ref(), output.as_ref(), level),
        SkillAnimation::Animated(plan) => {
            if let Some(fill) = fill {
                run_width(fill, plan);
            }
            if let Some(output) = output {
                run_count(output, plan);
            }
        }
    }
}

/// 途中のフレームを出さずに最終状態へ（スタイルシート側のtransitionも止める）
fn show_final(fill: Option<&HtmlElement>, output: Option<&Element>, level: u8) {
    if let Some(fill) = fill {
        let style = fill.style();
        let _ = style.set_property("transition", "none");
        let _ = style.set_property("width", &percent(level));
    }
    if let Some(output) = output {
        output.set_text_content(Some(&percent(level)));
    }
}

fn run_width(fill: HtmlElement, plan: SkillPlan) {
    let style = fill.style();
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("width", "0%");
    // 0% を確定させてから遷移を開始
    let _ = fill.offset_width();
    let _ = style.set_property("transition", &plan.rise.transition_css());
    let _ = style.set_property("width", &percent(plan.peak));

    Timeout::new(plan.rise.duration_ms, move || {
        let style = fill.style();
        let _ = style.set_property("transition", &plan.settle.transition_css());
        let _ = style.set_property("width", &percent(plan.level));

        Timeout::new(plan.settle.duration_ms, move || {
            let _ = fill.style().remove_property("transition");
        })
        .forget();
    })
    .forget();
}

fn run_count(output: Element, plan: SkillPlan) {
    let slot = Rc::new(RefCell::new(None));
    schedule_count(output, plan, None, slot);
}

fn schedule_count(
    output: Element,
    plan: SkillPlan,
    start: Option<f64>,
    slot: Rc<RefCell<Option<AnimationFrame>>>,
) {
    let next = slot.clone();
    let frame = request_animation_frame(move |now| {
        let start = start.unwrap_or(now);
        let elapsed = now - start;
        output.set_text_content(Some(&percent(plan.count_at(elapsed))));

        if plan.count_finished(elapsed) {
            next.borrow_mut().take();
        } else {
            schedule_count(output, plan, Some(start), next);
        }
    });
    *slot.borrow_mut() = Some(frame);
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_show_final_disables_transition() {
        let document = dom::document().expect("document");
        let bar = document.create_element("div").expect("create div");
        bar.set_inner_html(
            "<div class=\"skill-fill\" style=\"transition: width 1s ease\"></div><span class=\"skill-num\"></span>",
        );
        let fill = dom::query_in(&bar, FILL_SELECTOR)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .expect("fill");
        let output = dom::query_in(&bar, OUTPUT_SELECTOR).expect("output");

        show_final(Some(&fill), Some(&output), 72);

        let style = fill.style();
        assert_eq!(style.get_property_value("transition-property").expect("transition"), "none");
        assert_eq!(style.get_property_value("width").expect("width"), "72%");
        assert_eq!(output.text_content().as_deref(), Some("72%"));
    }
}
