//! # CustomerRepository
//!
//! 顧客レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 往復**: 各メソッドはストレージへのクエリを 1 回だけ発行する。
//!   リトライ、バッチ、キャッシュは行わない
//! - **存在チェックなし**: 重複 ID の検出はテーブルの主キー制約に任せる
//! - **not found を区別しない**: ID 検索で行がない場合も他のクエリ失敗と同じく
//!   [`InfraError`] を返す
//!
//! ## テーブル
//!
//! ```sql
//! CREATE TABLE customer (
//!     id      VARCHAR(100) PRIMARY KEY CHECK (id <> ''),
//!     nama    VARCHAR(100) NOT NULL,
//!     address VARCHAR(255) NOT NULL
//! );
//! ```

use async_trait::async_trait;
use customer_domain::customer::{Customer, CustomerId};
use sqlx::PgPool;

use crate::error::InfraError;

/// 顧客リポジトリトレイト
///
/// 全件取得・ID 検索・登録の 3 操作を定義する。
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 全顧客を取得する
    ///
    /// 並び順はストレージが返す順序のまま。失敗時に途中までの行を返すことはない。
    async fn retrieve_all(&self) -> Result<Vec<Customer>, InfraError>;

    /// ID で顧客を検索する
    ///
    /// 該当行がない場合もエラーを返す。
    async fn find_by_id(&self, id: &CustomerId) -> Result<Customer, InfraError>;

    /// 顧客を登録する
    ///
    /// パラメータは (id, nama, address) の順でバインドする。
    async fn create(&self, customer: &Customer) -> Result<(), InfraError>;
}

/// `customer` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id:      String,
    nama:    String,
    address: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(CustomerId::new(row.id), row.nama, row.address)
    }
}

/// PostgreSQL 実装の CustomerRepository
#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn retrieve_all(&self) -> Result<Vec<Customer>, InfraError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, nama, address
            FROM customer
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &CustomerId) -> Result<Customer, InfraError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, nama, address
            FROM customer
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %customer.id()))]
    async fn create(&self, customer: &Customer) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO customer (id, nama, address)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(customer.address())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
