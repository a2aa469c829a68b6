// 例題の表示用射影

use serde::{Deserialize, Serialize};

use crate::domain::exercise::Exercise;
use crate::domain::rule::Rule;

/// 表示層へ渡す例題の射影
///
/// 例題は慣例として0から始まるため、開始値は0のときレコードから
/// 省く（元の `Exercise` には常に残る）。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayExercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u8>,
    pub steps: Vec<String>,
    pub answer: u8,
}

/// 例題を表示用レコードに変換する
pub fn to_display(rule: &Rule, exercise: &Exercise) -> DisplayExercise {
    let start = if exercise.start.is_zero() {
        None
    } else {
        Some(exercise.start.get())
    };
    let steps = exercise
        .steps
        .iter()
        .map(|s| rule.format_action(s.action))
        .collect();
    DisplayExercise {
        start,
        steps,
        answer: exercise.answer.get(),
    }
}

/// 操作列を1行の文字列にする（"+2 -1 +3 = 4"）
pub fn format_chain(rule: &Rule, exercise: &Exercise) -> String {
    let actions: Vec<String> = exercise
        .steps
        .iter()
        .map(|s| rule.format_action(s.action))
        .collect();
    format!("{} = {}", actions.join(" "), exercise.answer)
}
