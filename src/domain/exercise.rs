// 例題レコードの定義

use serde::{Deserialize, Serialize};

use super::column::{Action, ColumnState};

/// 1ステップの遷移記録
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub action: Action,
    pub from_state: ColumnState,
    pub to_state: ColumnState,
}

/// 生成された例題
///
/// 生成後は不変。`(start, steps, answer)` の組で同一性を判定する。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exercise {
    pub start: ColumnState,
    pub steps: Vec<Step>,
    pub answer: ColumnState,
}

impl Exercise {
    /// 操作列を開始状態から畳み込んだ答え
    pub fn recomputed_answer(&self) -> i32 {
        self.steps
            .iter()
            .fold(i32::from(self.start.get()), |acc, step| {
                acc + i32::from(step.action.get())
            })
    }

    /// 操作列のみを取り出す
    pub fn actions(&self) -> Vec<Action> {
        self.steps.iter().map(|s| s.action).collect()
    }

    pub fn steps_len(&self) -> usize {
        self.steps.len()
    }
}
