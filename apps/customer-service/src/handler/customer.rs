//! # 顧客ハンドラ
//!
//! 顧客 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /customer` - 全顧客の取得
//! - `GET /customer/{id}` - ID による顧客の取得
//! - `POST /customer` - 顧客の登録
//!
//! ## レスポンス
//!
//! 成功時はエンベロープなしでレコード（または配列）をそのまま返す。
//! 失敗時は `{"err": "..."}` を返す（[`ApiError`] を参照）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use customer_domain::customer::{Customer, CustomerId};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, usecase::CustomerUseCase};

/// 顧客 API の共有状態
pub struct CustomerState {
    pub usecase: Arc<dyn CustomerUseCase>,
}

/// 顧客の JSON 表現
///
/// フィールド名は大文字始まり（`Id`, `Nama`, `Address`）。
/// 3 フィールドとも必須で、欠けている場合はバインドエラーとなる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(rename = "Id")]
    pub id:      CustomerId,
    #[serde(rename = "Nama")]
    pub nama:    String,
    #[serde(rename = "Address")]
    pub address: String,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id:      customer.id().clone(),
            nama:    customer.name().to_string(),
            address: customer.address().to_string(),
        }
    }
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Customer::new(dto.id, dto.nama, dto.address)
    }
}

/// GET /customer
///
/// 全顧客を取得する。該当がない場合は空配列を返す。
pub async fn get_all_customer(
    State(state): State<Arc<CustomerState>>,
) -> Result<impl IntoResponse, ApiError> {
    let customers = state.usecase.get_all_customer().await?;

    let items: Vec<CustomerDto> = customers.into_iter().map(CustomerDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// GET /customer/{id}
///
/// ID で顧客を取得する。
///
/// ## レスポンス
///
/// - `200 OK`: 顧客
/// - `500 Internal Server Error`: 取得失敗（該当なしを含む）
pub async fn get_customer_by_id(
    State(state): State<Arc<CustomerState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id?;
    let id = CustomerId::new(id);

    let customer = state.usecase.find_customer_by_id(&id).await?;

    Ok((StatusCode::OK, Json(CustomerDto::from(customer))))
}

/// POST /customer
///
/// 顧客を登録し、送信されたレコードをそのまま返す（再取得はしない）。
///
/// ## レスポンス
///
/// - `200 OK`: 登録したレコード
/// - `400 Bad Request`: ボディを顧客として解釈できない（ユースケースは呼ばれない）
/// - `500 Internal Server Error`: 登録失敗（重複 ID を含む）
pub async fn register_customer(
    State(state): State<Arc<CustomerState>>,
    payload: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(dto) = payload?;
    let customer = Customer::from(dto);

    state.usecase.register_customer(&customer).await?;

    Ok((StatusCode::OK, Json(CustomerDto::from(customer))))
}
