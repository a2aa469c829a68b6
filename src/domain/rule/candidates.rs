// 重み付き操作候補

use rand::Rng;

use crate::domain::column::Action;

/// 1ステップ分の操作候補と重みのテーブル
///
/// 候補を複製して偏らせる代わりに、明示的な重みと累積和で抽選する。
#[derive(Clone, Debug, Default)]
pub struct ActionCandidates {
    items: Vec<(Action, u32)>,
    total_weight: u64,
}

impl ActionCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action, weight: u32) {
        if weight == 0 {
            return;
        }
        self.items.push((action, weight));
        self.total_weight += u64::from(weight);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, action: Action) -> bool {
        self.items.iter().any(|(a, _)| *a == action)
    }

    /// 候補の操作一覧（重みなし）
    pub fn actions(&self) -> Vec<Action> {
        self.items.iter().map(|(a, _)| *a).collect()
    }

    /// 累積重みによる一様抽選
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<Action> {
        if self.items.is_empty() {
            return None;
        }
        let mut rest = rng.gen_range(0..self.total_weight);
        for (action, weight) in &self.items {
            let w = u64::from(*weight);
            if rest < w {
                return Some(*action);
            }
            rest -= w;
        }
        // total_weight は push で同期しているため到達しない
        self.items.last().map(|(a, _)| *a)
    }
}
