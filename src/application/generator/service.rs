// 例題生成サービス

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::constants::{MAX_ATTEMPTS, UNIQUE_ATTEMPTS_FACTOR};
use crate::domain::exercise::Exercise;
use crate::domain::rule::Rule;
use crate::vlog;

use super::engine::{build_chain, AttemptOutcome};

/// 生成の失敗
#[derive(Debug, Error)]
pub enum GenerateError {
    /// 試行上限内で有効な例題が見つからなかった
    ///
    /// 部分的に組めた候補は返さない。`last_errors` には最後に
    /// 棄却された候補の検証エラーを診断用に載せる。
    #[error("{attempts}回の試行で有効な例題を生成できませんでした")]
    Exhausted {
        attempts: u32,
        last_errors: Vec<String>,
    },
}

/// ルールを駆動して例題を生成するサービス
///
/// ルールは読み取り専用。呼び出しごとに独立した乱数列を使うため、
/// 埋め込み側で並べて呼んでも共有状態はない。
pub struct ExerciseGenerator {
    rule: Rule,
}

impl ExerciseGenerator {
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// 例題を1つ生成する
    pub fn generate(&self) -> Result<Exercise, GenerateError> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// 乱数列を指定して例題を1つ生成する
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Exercise, GenerateError> {
        let mut last_errors = Vec::new();

        for attempt in 1..=MAX_ATTEMPTS {
            match build_chain(&self.rule, rng) {
                AttemptOutcome::DeadEnd { at_step } => {
                    vlog!("試行{}: ステップ{}で行き止まり", attempt, at_step);
                }
                AttemptOutcome::Built(candidate) => {
                    let report = self.rule.validate_example(&candidate);
                    if report.is_valid() {
                        vlog!(
                            "試行{}: 受理 {}ステップ 答え{}",
                            attempt,
                            candidate.steps_len(),
                            candidate.answer
                        );
                        return Ok(candidate);
                    }
                    vlog!("試行{}: 検証棄却 {:?}", attempt, report.errors());
                    last_errors = report.into_errors();
                }
            }
        }

        Err(GenerateError::Exhausted {
            attempts: MAX_ATTEMPTS,
            last_errors,
        })
    }

    /// 独立した生成を count 回繰り返す
    pub fn generate_many(&self, count: usize) -> Result<Vec<Exercise>, GenerateError> {
        self.generate_many_with_rng(count, &mut rand::thread_rng())
    }

    pub fn generate_many_with_rng<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Exercise>, GenerateError> {
        (0..count).map(|_| self.generate_with_rng(rng)).collect()
    }

    /// 重複を除いたバッチ生成
    ///
    /// `(start, steps, answer)` が一致する例題は捨てる。
    /// 総試行は count × 10 まで。目標に届かなければ見つかった分だけ
    /// 返す（重複で水増しはしない）。1つも生成できなかった場合のみ
    /// 失敗を返す。
    pub fn generate_unique(&self, count: usize) -> Result<Vec<Exercise>, GenerateError> {
        self.generate_unique_with_rng(count, &mut rand::thread_rng())
    }

    pub fn generate_unique_with_rng<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Exercise>, GenerateError> {
        let max_tries = count * UNIQUE_ATTEMPTS_FACTOR;
        let mut seen: HashSet<Exercise> = HashSet::new();
        let mut found = Vec::with_capacity(count);
        let mut last_failure = None;

        for _ in 0..max_tries {
            if found.len() >= count {
                break;
            }
            match self.generate_with_rng(rng) {
                Ok(exercise) => {
                    if seen.insert(exercise.clone()) {
                        found.push(exercise);
                    }
                }
                Err(e) => {
                    // 1回尽きたルールはこの後も尽きる
                    last_failure = Some(e);
                    break;
                }
            }
        }

        if found.is_empty() {
            if let Some(e) = last_failure {
                return Err(e);
            }
        }
        vlog!("重複なし生成: {}/{}", found.len(), count);
        Ok(found)
    }
}
