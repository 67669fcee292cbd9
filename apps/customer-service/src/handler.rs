//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラはリクエストのバインドとレスポンスの直列化のみを行い、処理はユースケースに委譲

pub mod customer;
pub mod health;

pub use customer::{
    CustomerDto,
    CustomerState,
    get_all_customer,
    get_customer_by_id,
    register_customer,
};
pub use health::{ReadinessState, health_check, readiness_check};
