// ルール設定のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::UPPER_VALUE;

/// ステップ数の範囲を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRange {
    min: u32,
    max: u32,
}

impl StepRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min == 0 {
            return Err(anyhow!("ステップ数は1以上である必要があります"));
        }
        if min > max {
            return Err(anyhow!("ステップ数の範囲が逆転しています: {}..{}", min, max));
        }
        if max > 50 {
            return Err(anyhow!("ステップ数が大きすぎます: {}", max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

/// 選択された数字の集合を表すValue Object（1〜5、昇順・重複なし）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSet(Vec<u8>);

impl DigitSet {
    pub fn new(digits: &[u8]) -> Result<Self> {
        if digits.is_empty() {
            return Err(anyhow!("数字の選択が空です"));
        }
        let mut sorted: Vec<u8> = digits.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for &d in &sorted {
            if d == 0 || d > UPPER_VALUE {
                return Err(anyhow!("選択できる数字は1〜{}: {}", UPPER_VALUE, d));
            }
        }
        Ok(Self(sorted))
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// 5が選択されているか（五珠を使うか）
    pub fn has_five(&self) -> bool {
        self.contains(UPPER_VALUE)
    }

    /// 5だけが選択されているか（五珠専用ドリル）
    pub fn only_five(&self) -> bool {
        self.0 == [UPPER_VALUE]
    }
}

/// ±5候補に掛ける重みを表すValue Object
///
/// 1で無バイアス。大きいほど±5が選ばれやすくなり、
/// 「±5を最低1回含む」条件が試行上限内で満たしやすくなる。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveBias(u32);

impl FiveBias {
    pub fn new(weight: u32) -> Result<Self> {
        if weight == 0 {
            return Err(anyhow!("重みは1以上である必要があります"));
        }
        if weight > 100 {
            return Err(anyhow!("重みが大きすぎます: {}", weight));
        }
        Ok(Self(weight))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for FiveBias {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_FIVE_BIAS)
    }
}
