// 完成した例題の検証

use crate::domain::exercise::Exercise;

use super::rule::Rule;

/// 検証結果（エラー文のリスト）
///
/// 生成側のリトライループがそのまま消費するため、Resultではなく
/// 全エラーを列挙して返す。
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Rule {
    /// 例題の全不変条件を検証する
    ///
    /// 開始状態から遷移を引き直し、各ステップの合法性を
    /// `available_actions` と同じ経路で再導出する。
    pub fn validate_example(&self, exercise: &Exercise) -> ValidationReport {
        let mut report = ValidationReport::new();

        // 開始は常に0
        if !exercise.start.is_zero() {
            report.push(format!("開始状態が0ではありません: {}", exercise.start));
        }

        // 先頭の操作は正
        if let Some(first) = exercise.steps.first() {
            if !first.action.is_positive() {
                report.push(format!("先頭の操作が正ではありません: {}", first.action));
            }
        }

        let mut current = exercise.start;
        let mut upper_toggles: u32 = 0;
        let mut has_upper_action = false;

        for (i, step) in exercise.steps.iter().enumerate() {
            let no = i + 1;

            if step.from_state != current {
                report.push(format!(
                    "ステップ{}: 遷移が連続していません（{} ≠ {}）",
                    no, step.from_state, current
                ));
            }

            let candidates = self.available_actions(current, i == 0);
            if !candidates.contains(step.action) {
                report.push(format!(
                    "ステップ{}: 状態{}から操作{}は許可されていません",
                    no, current, step.action
                ));
            }

            if step.action.is_upper() {
                upper_toggles += 1;
                has_upper_action = true;
            }

            match current.apply(step.action) {
                Some(next) => {
                    if step.to_state != next {
                        report.push(format!(
                            "ステップ{}: 記録された結果{}が計算{}と一致しません",
                            no, step.to_state, next
                        ));
                    }
                    if !self.is_valid_state(next) {
                        report.push(format!(
                            "ステップ{}: 状態{}が範囲0〜{}を外れます",
                            no,
                            next,
                            self.max_state()
                        ));
                    }
                    current = next;
                }
                None => {
                    report.push(format!("ステップ{}: 状態が桁の範囲を外れます", no));
                    break;
                }
            }
        }

        // 答えの再計算
        let recomputed = exercise.recomputed_answer();
        if i32::from(exercise.answer.get()) != recomputed {
            report.push(format!(
                "答え{}が再計算{}と一致しません",
                exercise.answer, recomputed
            ));
        }

        // 答えは途中状態より厳しい範囲に閉じる
        if exercise.answer.get() > self.max_final_state() {
            report.push(format!(
                "答え{}が0〜{}に閉じていません",
                exercise.answer,
                self.max_final_state()
            ));
        }

        // 五珠ルール固有の条件
        if self.requires_five() && !has_upper_action {
            report.push("±5の操作が1回も含まれていません".to_string());
        }
        if let Some(cap) = self.max_upper_toggles {
            if upper_toggles > cap {
                report.push(format!(
                    "五珠の切り替え{}回が上限{}回を超えています",
                    upper_toggles, cap
                ));
            }
        }

        report
    }
}
