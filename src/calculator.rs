use serde::Deserialize;

use crate::error::CalculateError;

/// `POST /calculate` のリクエストボディ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "Op1")]
    pub op1: i64,
    #[serde(rename = "Op2")]
    pub op2: i64,
    #[serde(rename = "IsAdd")]
    pub is_add: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    /// オーバーフロー時は2の補数で折り返す。
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operation::Add => lhs.wrapping_add(rhs),
            Operation::Subtract => lhs.wrapping_sub(rhs),
        }
    }
}

impl CalculationRequest {
    /// ボディを検証済みのリクエストに変換する。
    ///
    /// 3つのフィールドがすべて揃い、型が正しい場合のみ `Ok` を返す。
    pub fn from_json(body: &[u8]) -> Result<Self, CalculateError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// `IsAdd` が true なら減算、false なら加算。
    // フラグ名とは逆の演算になる
    pub fn operation(&self) -> Operation {
        if self.is_add {
            Operation::Subtract
        } else {
            Operation::Add
        }
    }

    pub fn compute(&self) -> i64 {
        self.operation().apply(self.op1, self.op2)
    }
}
