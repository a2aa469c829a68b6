// 桁状態のValue Object

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{LOWER_BEADS, MAX_STATE, UPPER_VALUE};

use super::action::Action;

/// 1桁に置かれている値（0〜9）を表すValue Object
///
/// `値 = 5 × 五珠 + 一珠` に分解でき、五珠は0か1、一珠は0〜4。
/// 物理的に可能な操作の判定はすべてこの分解に基づく。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnState(u8);

impl ColumnState {
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_STATE {
            return Err(anyhow!("桁状態は0〜{}の範囲: {}", MAX_STATE, value));
        }
        Ok(Self(value))
    }

    /// 空の桁（すべての珠が外れた状態）
    pub fn zero() -> Self {
        Self(0)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// 五珠が入っているか
    pub fn upper_engaged(&self) -> bool {
        self.0 >= UPPER_VALUE
    }

    /// 入っている一珠の本数
    pub fn lower_engaged(&self) -> u8 {
        if self.upper_engaged() {
            self.0 - UPPER_VALUE
        } else {
            self.0
        }
    }

    /// まだ入れられる一珠の本数
    pub fn lower_free(&self) -> u8 {
        LOWER_BEADS - self.lower_engaged()
    }

    /// 操作を適用した結果の状態
    ///
    /// 0〜9 を外れる場合は None。丸め込みはしない。
    pub fn apply(self, action: Action) -> Option<ColumnState> {
        let next = i16::from(self.0) + i16::from(action.get());
        if (0..=i16::from(MAX_STATE)).contains(&next) {
            Some(Self(next as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for ColumnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
