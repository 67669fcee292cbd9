//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス `{"err": "<message>"}` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - エラーコードなどの構造化情報は持たない。メッセージは下位層のものをそのまま使う

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// ```
/// use customer_shared::ErrorResponse;
///
/// let body = serde_json::to_string(&ErrorResponse::new("failed")).unwrap();
/// assert_eq!(body, r#"{"err":"failed"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub err: String,
}

impl ErrorResponse {
    pub fn new(err: impl Into<String>) -> Self {
        Self { err: err.into() }
    }
}
