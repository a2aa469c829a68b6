// 練習設定からルールへの変換

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_DIGITS, DEFAULT_MAX_STEPS, DEFAULT_MIN_STEPS, UPPER_VALUE};
use crate::domain::rule::{DigitSet, FiveBias, Rule, StepRange};

/// 設定画面から渡される練習設定
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingSettings {
    /// 選択された数字（空なら既定の {1,2,3,4}）
    #[serde(default)]
    pub selected_digits: Vec<u8>,
    /// 足し算のみ
    #[serde(default)]
    pub only_addition: bool,
    /// 引き算のみ
    #[serde(default)]
    pub only_subtraction: bool,
    pub min_steps: u32,
    pub max_steps: u32,
    /// ±5候補の重み（未指定なら既定値）
    #[serde(default)]
    pub five_bias: Option<u32>,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            selected_digits: DEFAULT_DIGITS.to_vec(),
            only_addition: false,
            only_subtraction: false,
            min_steps: DEFAULT_MIN_STEPS,
            max_steps: DEFAULT_MAX_STEPS,
            five_bias: None,
        }
    }
}

/// 設定の不備（生成を試みる前に弾く）
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("選択できる数字は1〜5です: {digit}")]
    DigitOutOfRange { digit: u8 },

    #[error("足し算のみと引き算のみは同時に指定できません")]
    ContradictoryRestriction,

    #[error("引き算のみでは先頭の正の操作が作れません")]
    NoOpeningAction,

    #[error("ステップ数の範囲が不正です: {min}..{max}")]
    InvalidStepRange { min: u32, max: u32 },

    #[error("ルール構成が不正です: {0}")]
    InvalidRule(String),
}

impl From<anyhow::Error> for SettingsError {
    fn from(e: anyhow::Error) -> Self {
        Self::InvalidRule(e.to_string())
    }
}

/// 設定からルールを構築する純関数
///
/// 同じ設定からは常に等価なルールが得られる。副作用なし。
/// 五珠の有無は5が選択されているかで自動判定する。
pub fn rule_from_settings(settings: &TrainingSettings) -> Result<Rule, SettingsError> {
    if settings.only_addition && settings.only_subtraction {
        return Err(SettingsError::ContradictoryRestriction);
    }
    // 例題は常に空の桁から正の操作で始まるため、引き算のみは成立しない
    if settings.only_subtraction {
        return Err(SettingsError::NoOpeningAction);
    }

    let raw_digits: Vec<u8> = if settings.selected_digits.is_empty() {
        DEFAULT_DIGITS.to_vec()
    } else {
        settings.selected_digits.clone()
    };
    for &digit in &raw_digits {
        if digit == 0 || digit > UPPER_VALUE {
            return Err(SettingsError::DigitOutOfRange { digit });
        }
    }

    if settings.min_steps == 0 || settings.min_steps > settings.max_steps {
        return Err(SettingsError::InvalidStepRange {
            min: settings.min_steps,
            max: settings.max_steps,
        });
    }

    let digits = DigitSet::new(&raw_digits)?;
    let steps = StepRange::new(settings.min_steps, settings.max_steps)?;

    let mut rule = Rule::unified(digits, steps)?;
    if let Some(weight) = settings.five_bias {
        rule = rule.with_five_bias(FiveBias::new(weight)?);
    }
    if settings.only_addition {
        rule = rule.with_addition_only()?;
    }
    Ok(rule)
}
