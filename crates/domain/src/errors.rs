use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// 入力バリデーションエラー
///
/// フィールド名（JSON上の名前）ごとに失敗理由を保持する。
/// 一つでも失敗があれば入力全体を拒否する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", self.summary())]
pub struct ValidationError {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// 単一フィールドのエラーを作成
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.add(field, message);
        error
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    // "field: msg, msg; field: msg" 形式
    fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// エラーが無ければ `value` を返す
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// ストレージ層で発生するエラー
///
/// リトライはストレージクライアント側の責務であり、ここでは分類して上位へ伝搬するのみ。
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}
