// 生成ルール（タグ付きバリアント）

use anyhow::{anyhow, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_UPPER_TOGGLES;
use crate::domain::column::{Action, ColumnState};

use super::candidates::ActionCandidates;
use super::config::{DigitSet, FiveBias, StepRange};

/// ルールの種別
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// 一珠のみ（状態0〜4、±5禁止）
    LowerOnly,
    /// 一珠 + 五珠（途中状態0〜9、答えは0〜5に閉じる）
    LowerPlusUpper,
    /// 選択された数字から五珠の有無を自動判定
    Unified,
}

/// 例題生成の制約一式
///
/// 設定変更のたびにアダプタが作り直す。構築後は変更しない。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,
    pub steps: StepRange,
    pub digits: DigitSet,
    /// 許可された操作（選択数字の±閉包、制限フラグ適用後）
    pub allowed_actions: Vec<Action>,
    /// ±5候補に掛ける重み
    pub five_bias: FiveBias,
    /// 五珠切り替え回数の上限（五珠を使わないルールでは None）
    pub max_upper_toggles: Option<u32>,
}

/// 選択数字の±閉包を作る
fn signed_closure(digits: &DigitSet) -> Result<Vec<Action>> {
    let mut actions = Vec::with_capacity(digits.iter().count() * 2);
    for d in digits.iter() {
        actions.push(Action::new(d as i8)?);
        actions.push(Action::new(-(d as i8))?);
    }
    Ok(actions)
}

impl Rule {
    /// 一珠のみのルール（数字に5を含んではいけない）
    pub fn lower_only(digits: DigitSet, steps: StepRange) -> Result<Self> {
        let allowed = signed_closure(&digits)?;
        let rule = Self {
            kind: RuleKind::LowerOnly,
            steps,
            digits,
            allowed_actions: allowed,
            five_bias: FiveBias::default(),
            max_upper_toggles: None,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// 一珠 + 五珠のルール（数字に5が必須）
    pub fn lower_plus_upper(digits: DigitSet, steps: StepRange) -> Result<Self> {
        let allowed = signed_closure(&digits)?;
        let rule = Self {
            kind: RuleKind::LowerPlusUpper,
            steps,
            digits,
            allowed_actions: allowed,
            five_bias: FiveBias::default(),
            max_upper_toggles: Some(DEFAULT_MAX_UPPER_TOGGLES),
        };
        rule.validate()?;
        Ok(rule)
    }

    /// 選択数字から挙動を自動判定するルール
    pub fn unified(digits: DigitSet, steps: StepRange) -> Result<Self> {
        let allowed = signed_closure(&digits)?;
        let toggles = if digits.has_five() {
            Some(DEFAULT_MAX_UPPER_TOGGLES)
        } else {
            None
        };
        let rule = Self {
            kind: RuleKind::Unified,
            steps,
            digits,
            allowed_actions: allowed,
            five_bias: FiveBias::default(),
            max_upper_toggles: toggles,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// ±5の重みを差し替える
    pub fn with_five_bias(mut self, bias: FiveBias) -> Self {
        self.five_bias = bias;
        self
    }

    /// 五珠切り替え回数の上限を差し替える
    pub fn with_max_upper_toggles(mut self, cap: u32) -> Self {
        self.max_upper_toggles = Some(cap);
        self
    }

    /// 足し算のみに制限する
    pub fn with_addition_only(mut self) -> Result<Self> {
        self.allowed_actions.retain(|a| a.is_positive());
        self.validate()?;
        Ok(self)
    }

    /// 構成の整合性チェック
    pub fn validate(&self) -> Result<()> {
        if self.allowed_actions.is_empty() {
            return Err(anyhow!("許可された操作が空です"));
        }
        for a in &self.allowed_actions {
            if !self.digits.contains(a.magnitude()) {
                return Err(anyhow!("操作{}は選択数字に含まれていません", a));
            }
        }
        match self.kind {
            RuleKind::LowerOnly => {
                if self.digits.has_five() {
                    return Err(anyhow!("一珠のみのルールに5は選択できません"));
                }
            }
            RuleKind::LowerPlusUpper => {
                if !self.digits.has_five() {
                    return Err(anyhow!("五珠ルールには5の選択が必要です"));
                }
            }
            RuleKind::Unified => {}
        }
        if self.has_upper() && self.max_upper_toggles == Some(0) {
            return Err(anyhow!("五珠ルールで切り替え回数0は矛盾します"));
        }
        Ok(())
    }

    /// 五珠を使うルールか
    pub fn has_upper(&self) -> bool {
        match self.kind {
            RuleKind::LowerOnly => false,
            RuleKind::LowerPlusUpper => true,
            RuleKind::Unified => self.digits.has_five(),
        }
    }

    /// ±5を最低1回含むことを要求するか
    pub fn requires_five(&self) -> bool {
        self.has_upper()
    }

    pub fn min_state(&self) -> u8 {
        0
    }

    /// 途中状態の上限
    pub fn max_state(&self) -> u8 {
        if self.has_upper() {
            9
        } else {
            4
        }
    }

    /// 答えの上限（途中より厳しい。はみ出した分は最終ステップまでに閉じる）
    pub fn max_final_state(&self) -> u8 {
        if self.has_upper() {
            5
        } else {
            4
        }
    }

    pub fn is_valid_state(&self, state: ColumnState) -> bool {
        state.get() <= self.max_state()
    }

    /// 操作の適用（純粋な和。範囲外は上流で弾く）
    pub fn apply_action(&self, state: ColumnState, action: Action) -> Option<ColumnState> {
        state.apply(action)
    }

    /// 例題の開始状態（常に空の桁）
    pub fn start_state(&self) -> ColumnState {
        ColumnState::zero()
    }

    /// ステップ数を範囲から一様に引く
    ///
    /// ±5必須のルールでは2未満にならないよう切り上げる。
    pub fn steps_count<R: Rng>(&self, rng: &mut R) -> u32 {
        let n = rng.gen_range(self.steps.min()..=self.steps.max());
        if self.requires_five() {
            n.max(2)
        } else {
            n
        }
    }

    pub fn format_action(&self, action: Action) -> String {
        action.format()
    }

    /// 現在の状態から物理的・規則的に可能な操作の候補
    ///
    /// 含まれる条件:
    /// (a) 許可された操作であること
    /// (b) 珠の分解から物理的に実現できること
    /// (c) 結果が [min_state, max_state] に収まること
    /// (d) 先頭と状態0からは正の操作のみ
    pub fn available_actions(&self, current: ColumnState, is_first: bool) -> ActionCandidates {
        let positive_only = is_first || current.is_zero();
        let mut out = ActionCandidates::new();

        for &action in &self.allowed_actions {
            if positive_only && !action.is_positive() {
                continue;
            }

            let physically_legal = if action.is_upper() {
                if !self.has_upper() {
                    false
                } else if action.is_positive() {
                    !current.upper_engaged()
                } else {
                    current.upper_engaged()
                }
            } else if action.is_positive() {
                current.lower_free() >= action.magnitude()
            } else {
                current.lower_engaged() >= action.magnitude()
            };
            if !physically_legal {
                continue;
            }

            let Some(next) = current.apply(action) else {
                continue;
            };
            if !self.is_valid_state(next) {
                continue;
            }

            let weight = if action.is_upper() {
                self.five_bias.get()
            } else {
                1
            };
            out.push(action, weight);
        }

        out
    }
}
