//! スクロール表示（reveal）の状態管理
//!
//! 要素ごとに `Pending → Triggered` の一方向遷移。
//! 判定（should_trigger）と遷移（mark_triggered）を分けているので、
//! 実際のビューポートなしでテストできる。

use std::collections::HashMap;

/// IntersectionObserver の閾値（要素面積の12%）
///
/// 判定には使わない。コールバックが呼ばれるタイミングを決めるだけ。
pub const DEFAULT_THRESHOLD: f64 = 0.12;

/// 登録された要素のID
pub type ElementId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Triggered,
}

/// 監視対象の要素と状態
#[derive(Debug, Clone)]
pub struct RevealRegistry {
    states: HashMap<ElementId, RevealState>,
    next_id: ElementId,
    threshold: f64,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealRegistry {
    pub fn new(threshold: f64) -> Self {
        Self {
            states: HashMap::new(),
            next_id: 1,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// 新しい要素を登録してIDを返す
    pub fn register(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        self.states.insert(id, RevealState::Pending);
        id
    }

    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.states.get(&id).copied()
    }

    /// 今この要素を表示状態にすべきか（交差していれば交差率は問わない）
    pub fn should_trigger(&self, id: ElementId, is_intersecting: bool) -> bool {
        is_intersecting && self.state(id) == Some(RevealState::Pending)
    }

    /// Pending → Triggered（遷移した場合のみ true）
    pub fn mark_triggered(&mut self, id: ElementId) -> bool {
        match self.states.get_mut(&id) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Triggered;
                true
            }
            _ => false,
        }
    }

    /// DOMから外れた要素の登録を消す（登録されていた場合のみ true）
    pub fn forget(&mut self, id: ElementId) -> bool {
        self.states.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
