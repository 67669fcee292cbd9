//! # Customer Service エラー定義
//!
//! クライアントに見えるエラーは 2 種類のみ:
//!
//! | 種別 | HTTP ステータス | 発生源 |
//! |------|----------------|--------|
//! | [`ApiError::ClientInput`] | 400 | リクエストボディ・パスのバインド失敗 |
//! | [`ApiError::Operation`] | 500 | ストレージ障害、行が見つからない、制約違反 |
//!
//! いずれもレスポンスボディは `{"err": "<下位のメッセージ>"}`。

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use customer_infra::InfraError;
use customer_shared::ErrorResponse;
use thiserror::Error;

/// Customer Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストを解釈できない
    #[error("{0}")]
    ClientInput(String),

    /// ユースケース（リポジトリ）の失敗
    #[error(transparent)]
    Operation(#[from] InfraError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ClientInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::ClientInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ClientInput(msg) => {
                tracing::debug!(error = %msg, "リクエストのバインドに失敗しました");
                StatusCode::BAD_REQUEST
            }
            ApiError::Operation(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "ユースケースの実行に失敗しました"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_client_inputは400とメッセージを返す() {
        let response = ApiError::ClientInput("EOF".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, serde_json::json!({ "err": "EOF" }));
    }

    #[tokio::test]
    async fn test_operationは500と下位エラーのメッセージをそのまま返す() {
        let response = ApiError::from(InfraError::unexpected("failed")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "err": "failed" })
        );
    }
}
