//! スキルバーのアニメーション計画
//!
//! 幅は 0% → オーバーシュート値 → 目標値 の2段階。
//! 数値表示は1段階目と同じ時間で 0 → 目標値 をカウントアップする。

use crate::reveal::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_LEVEL: u8 = 100;

/// アニメーション時間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillTiming {
    /// 0% → オーバーシュート
    pub rise_ms: u32,
    /// オーバーシュート → 目標値
    pub settle_ms: u32,
}

impl Default for SkillTiming {
    fn default() -> Self {
        Self {
            rise_ms: 900,
            settle_ms: 380,
        }
    }
}

/// data-level 属性値を 0..=100 に丸める（数値でなければ 0）
pub fn clamp_level(raw: &str) -> u8 {
    match raw.trim().trim_end_matches('%').parse::<f64>() {
        Ok(v) if v.is_finite() => v.round().clamp(0.0, MAX_LEVEL as f64) as u8,
        _ => 0,
    }
}

/// オーバーシュート先（目標が高いほど控えめ）
pub fn overshoot(level: u8) -> u8 {
    let bump = match level {
        0..=69 => 12,
        70..=84 => 9,
        _ => 6,
    };
    level.saturating_add(bump).min(MAX_LEVEL)
}

pub fn percent(value: u8) -> String {
    format!("{}%", value)
}

/// 幅の transition に使うイージング
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
    EaseOut,
}

impl Easing {
    /// CSS transition-timing-function
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseInOut => "ease-in-out",
            Easing::EaseOut => "ease-out",
        }
    }
}

/// 数値カウントアップのイージング
fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

fn progress(elapsed_ms: f64, duration_ms: u32) -> f64 {
    if duration_ms == 0 {
        1.0
    } else {
        (elapsed_ms / duration_ms as f64).clamp(0.0, 1.0)
    }
}

/// 幅アニメーションの1段階
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub from: u8,
    pub to: u8,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Phase {
    pub fn transition_css(&self) -> String {
        format!("width {}ms {}", self.duration_ms, self.easing.css())
    }
}

/// 1本のスキルバーの計画
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillPlan {
    pub level: u8,
    pub peak: u8,
    pub rise: Phase,
    pub settle: Phase,
}

impl SkillPlan {
    pub fn new(level: u8, timing: SkillTiming) -> Self {
        let level = level.min(MAX_LEVEL);
        let peak = overshoot(level);
        Self {
            level,
            peak,
            rise: Phase {
                from: 0,
                to: peak,
                duration_ms: timing.rise_ms,
                easing: Easing::EaseInOut,
            },
            settle: Phase {
                from: peak,
                to: level,
                duration_ms: timing.settle_ms,
                easing: Easing::EaseOut,
            },
        }
    }

    /// 開始からの経過時間での数値表示
    pub fn count_at(&self, elapsed_ms: f64) -> u8 {
        let eased = ease_out_cubic(progress(elapsed_ms, self.rise.duration_ms));
        (self.level as f64 * eased).round() as u8
    }

    pub fn count_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.rise.duration_ms as f64
    }
}

/// 動きを減らす設定を考慮したアニメーション
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillAnimation {
    /// 最終状態へ即座に移る
    Instant { level: u8 },
    Animated(SkillPlan),
}

impl SkillAnimation {
    pub fn plan(level: u8, timing: SkillTiming, reduced_motion: bool) -> Self {
        if reduced_motion {
            SkillAnimation::Instant {
                level: level.min(MAX_LEVEL),
            }
        } else {
            SkillAnimation::Animated(SkillPlan::new(level, timing))
        }
    }
}

/// 要素ごとに1回だけ実行するためのガード
#[derive(Debug, Clone, Default)]
pub struct AnimationGuard {
    animated: HashSet<ElementId>,
}

impl AnimationGuard {
    /// 初回のみ true
    pub fn begin(&mut self, id: ElementId) -> bool {
        self.animated.insert(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_level() {
        assert_eq!(clamp_level("72"), 72);
        assert_eq!(clamp_level(" 85% "), 85);
        assert_eq!(clamp_level("150"), 100);
        assert_eq!(clamp_level("-5"), 0);
        assert_eq!(clamp_level("66.6"), 67);
        assert_eq!(clamp_level("abc"), 0);
        assert_eq!(clamp_level(""), 0);
    }

    #[test]
    fn test_overshoot_table() {
        assert_eq!(overshoot(50), 62);
        assert_eq!(overshoot(69), 81);
        assert_eq!(overshoot(70), 79);
        assert_eq!(overshoot(72), 81);
        assert_eq!(overshoot(84), 93);
        assert_eq!(overshoot(85), 91);
        assert_eq!(overshoot(90), 96);
        assert_eq!(overshoot(97), 100);
        assert_eq!(overshoot(100), 100);
    }

    /// 幅は 0 → オーバーシュート → 目標値 の順に設定される
    #[test]
    fn test_width_phases_overshoot_then_settle() {
        for (level, peak) in [(72u8, 81u8), (90, 96), (50, 62)] {
            let plan = SkillPlan::new(level, SkillTiming::default());
            assert_eq!(plan.peak, peak);

            assert_eq!((plan.rise.from, plan.rise.to), (0, peak));
            assert_eq!(plan.rise.duration_ms, 900);
            assert_eq!(plan.rise.easing, Easing::EaseInOut);

            // 2段階目は1段階目の到達点から始まる
            assert_eq!((plan.settle.from, plan.settle.to), (peak, level));
            assert_eq!(plan.settle.duration_ms, 380);
            assert_eq!(plan.settle.easing, Easing::EaseOut);
        }
    }

    #[test]
    fn test_width_phase_css_targets() {
        let plan = SkillPlan::new(72, SkillTiming::default());
        assert_eq!(percent(plan.rise.to), "81%");
        assert_eq!(percent(plan.settle.to), "72%");
    }

    #[test]
    fn test_count_up_ends_at_exact_level() {
        for level in [0u8, 1, 50, 72, 90, 100] {
            let plan = SkillPlan::new(level, SkillTiming::default());
            assert_eq!(plan.count_at(0.0), 0);
            assert_eq!(plan.count_at(plan.rise.duration_ms as f64), level);
            assert_eq!(plan.count_at(5_000.0), level);
            assert!(plan.count_at(450.0) <= level);
        }
    }

    #[test]
    fn test_count_never_shows_overshoot() {
        let plan = SkillPlan::new(90, SkillTiming::default());
        let max = (0..=1300).map(|ms| plan.count_at(ms as f64)).max().unwrap();
        assert_eq!(max, 90);
    }

    #[test]
    fn test_phase_css() {
        let plan = SkillPlan::new(50, SkillTiming { rise_ms: 800, settle_ms: 300 });
        assert_eq!(plan.rise.transition_css(), "width 800ms ease-in-out");
        assert_eq!(plan.settle.transition_css(), "width 300ms ease-out");
    }

    #[test]
    fn test_zero_duration_jumps() {
        let plan = SkillPlan::new(40, SkillTiming { rise_ms: 0, settle_ms: 0 });
        assert_eq!(plan.count_at(0.0), 40);
        assert!(plan.count_finished(0.0));
    }

    #[test]
    fn test_reduced_motion_is_instant() {
        let anim = SkillAnimation::plan(72, SkillTiming::default(), true);
        assert_eq!(anim, SkillAnimation::Instant { level: 72 });

        let anim = SkillAnimation::plan(72, SkillTiming::default(), false);
        assert!(matches!(anim, SkillAnimation::Animated(p) if p.peak == 81));
    }

    #[test]
    fn test_count_easing_decelerates() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        // 前半で大きく進む
        assert!(ease_out_cubic(0.5) > 0.8);
    }

    #[test]
    fn test_guard_runs_once() {
        let mut guard = AnimationGuard::default();
        assert!(guard.begin(3));
        assert!(!guard.begin(3));
        assert!(guard.begin(4));
    }
}
