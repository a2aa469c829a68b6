// 例題チェーンの1試行組み立て

use rand::Rng;

use crate::domain::exercise::{Exercise, Step};
use crate::domain::rule::Rule;
use crate::vlog;

/// 1試行の結末
pub(crate) enum AttemptOutcome {
    /// 目標ステップ数まで組み上がった候補
    Built(Exercise),
    /// 候補が尽きた（行き止まり）
    DeadEnd { at_step: u32 },
}

/// ルールに従って1本のチェーンを組み立てる
///
/// 行き止まりでは部分的な巻き戻しをせず、試行全体をやり直す。
/// 分岐数が小さいため全再試行で足りる。
pub(crate) fn build_chain<R: Rng>(rule: &Rule, rng: &mut R) -> AttemptOutcome {
    let start = rule.start_state();
    let steps_count = rule.steps_count(rng);
    let mut steps = Vec::with_capacity(steps_count as usize);
    let mut current = start;

    for i in 0..steps_count {
        let candidates = rule.available_actions(current, i == 0);
        let Some(action) = candidates.pick(rng) else {
            vlog!("  行き止まり: ステップ{} 状態{}", i + 1, current);
            return AttemptOutcome::DeadEnd { at_step: i + 1 };
        };
        let Some(next) = current.apply(action) else {
            // available_actions が範囲内を保証するため通常は通らない
            return AttemptOutcome::DeadEnd { at_step: i + 1 };
        };
        vlog!("  ステップ{}: {} {} → {}", i + 1, current, action, next);
        steps.push(Step {
            action,
            from_state: current,
            to_state: next,
        });
        current = next;
    }

    AttemptOutcome::Built(Exercise {
        start,
        steps,
        answer: current,
    })
}
