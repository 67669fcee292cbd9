//! # アプリケーション構築
//!
//! ルーター構築とレイヤー（Request ID、トレーシング）の適用を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use customer_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    CustomerState,
    ReadinessState,
    get_all_customer,
    get_customer_by_id,
    health_check,
    readiness_check,
    register_customer,
};

/// 顧客 API のルーター
pub fn customer_routes(state: Arc<CustomerState>) -> Router {
    Router::new()
        .route("/customer", get(get_all_customer).post(register_customer))
        .route("/customer/{id}", get(get_customer_by_id))
        .with_state(state)
}

/// アプリケーション全体のルーターを構築する
///
/// レイヤーは外側から SetRequestId → Trace → PropagateRequestId の順に適用される。
pub fn build_app(customer_state: Arc<CustomerState>, readiness_state: Arc<ReadinessState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(customer_routes(customer_state))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
