//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するテーブル定義とシードデータ。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use customer_domain::customer::{Customer, CustomerId};
use sqlx::PgPool;

/// `customer` テーブルを作成する
///
/// アプリケーションはマイグレーションを持たないため、テストごとに DDL を流す。
pub async fn create_customer_table(pool: &PgPool) {
    sqlx::query(
        r#"
        CREATE TABLE customer (
            id      VARCHAR(100) PRIMARY KEY CHECK (id <> ''),
            nama    VARCHAR(100) NOT NULL,
            address VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .expect("customer テーブルの作成に失敗");
}

/// ダミー顧客 2 件（C001, C002）
pub fn dummy_customers() -> Vec<Customer> {
    vec![
        Customer::new(CustomerId::new("C001"), "Dummy Name 1", "Dummy Address 1"),
        Customer::new(CustomerId::new("C002"), "Dummy Name 2", "Dummy Address 2"),
    ]
}
