//! # ユースケース層
//!
//! ハンドラとリポジトリの間に立つビジネスロジック層。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **トレイト境界**: ハンドラは [`CustomerUseCase`] トレイトにのみ依存する。
//!   検証や認可を追加する場合の挿入点はここ 1 箇所になる

pub mod customer;

pub use customer::{CustomerUseCase, CustomerUseCaseImpl};
