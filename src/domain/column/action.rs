// 操作のValue Object

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::UPPER_VALUE;

/// 1ステップで桁に加える操作（±1〜±5、0は不可）
///
/// +1〜+4 は一珠を入れる、-1〜-4 は外す。
/// +5 は五珠を入れる、-5 は外す。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action(i8);

impl Action {
    pub fn new(value: i8) -> Result<Self> {
        if value == 0 {
            return Err(anyhow!("操作に0は使えません"));
        }
        if value.unsigned_abs() > UPPER_VALUE {
            return Err(anyhow!("操作は±1〜±{}の範囲: {}", UPPER_VALUE, value));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i8 {
        self.0
    }

    /// 操作の大きさ（1〜5）
    pub fn magnitude(&self) -> u8 {
        self.0.unsigned_abs()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// 五珠の操作か（±5）
    pub fn is_upper(&self) -> bool {
        self.magnitude() == UPPER_VALUE
    }

    /// 符号付き10進表記（"+3" / "-2"）
    pub fn format(&self) -> String {
        if self.0 > 0 {
            format!("+{}", self.0)
        } else {
            format!("{}", self.0)
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}
