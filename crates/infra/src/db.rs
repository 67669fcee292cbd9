//! # PostgreSQL データベース接続管理
//!
//! データベース接続プールの作成と疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 毎回接続を張り直すオーバーヘッドを避け、接続を再利用
//! - **プールがリクエスト間で唯一の共有リソース**: 同時実行の制御は sqlx のプールに任せる
//! - **マイグレーションなし**: `customer` テーブルは既に存在する前提
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use customer_infra::db;
//! use sqlx::postgres::PgConnectOptions;
//!
//! async fn example() -> Result<(), sqlx::Error> {
//!     let options = PgConnectOptions::new()
//!         .host("127.0.0.1")
//!         .port(5432)
//!         .database("customer");
//!     let pool = db::create_pool(options).await?;
//!
//!     db::ping(&pool).await?;
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// PostgreSQL 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。
///
/// # 設定値
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
///
/// # パニック
///
/// この関数はパニックしない。すべてのエラーは `Result` で返される。
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// データベースへの疎通を `SELECT 1` で確認する
///
/// Readiness Check から呼ばれる。
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
