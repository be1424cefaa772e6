use axum::extract::rejection::BytesRejection;
use thiserror::Error;

/// 計算リクエストの検証エラー。
///
/// JSON の構文エラー、キーの欠落、型の不一致、ボディの読み取り失敗
/// （サイズ上限超過を含む）はすべて同じ 401 応答になる。
#[derive(Debug, Error)]
pub enum CalculateError {
    #[error("Invalid JSON request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Invalid JSON request: {0}")]
    UnreadableBody(#[from] BytesRejection),
}
