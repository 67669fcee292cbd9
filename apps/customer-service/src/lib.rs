//! # Customer Service ライブラリ
//!
//! Customer Service の設定・ユースケース・ハンドラ・ルーター構築を公開する。
//! `main.rs` と統合テストから利用される。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
