//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! customer-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! PostgreSQL の `customer` テーブルと同じく、主キー重複と空 ID を拒否する。
//! [`MockCustomerRepository::fail_next`] で次の 1 操作をストレージ障害として失敗させられる。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use customer_domain::customer::{Customer, CustomerId};

use crate::{error::InfraError, repository::CustomerRepository};

#[derive(Clone, Default)]
pub struct MockCustomerRepository {
    customers: Arc<Mutex<Vec<Customer>>>,
    failure:   Arc<Mutex<Option<String>>>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存レコードを持つリポジトリを作成する
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(Mutex::new(customers)),
            failure:   Arc::default(),
        }
    }

    /// 次の 1 操作を指定メッセージのエラーで失敗させる
    pub fn fail_next(&self, msg: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(msg.into());
    }

    fn take_failure(&self) -> Result<(), InfraError> {
        match self.failure.lock().unwrap().take() {
            Some(msg) => Err(InfraError::unexpected(msg)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn retrieve_all(&self) -> Result<Vec<Customer>, InfraError> {
        self.take_failure()?;
        Ok(self.customers.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Customer, InfraError> {
        self.take_failure()?;
        self.customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned()
            .ok_or_else(|| {
                InfraError::unexpected(
                    "no rows returned by a query that expected to return at least one row",
                )
            })
    }

    async fn create(&self, customer: &Customer) -> Result<(), InfraError> {
        self.take_failure()?;
        if customer.id().as_str().is_empty() {
            return Err(InfraError::unexpected(
                "new row for relation \"customer\" violates check constraint \"customer_id_check\"",
            ));
        }
        let mut customers = self.customers.lock().unwrap();
        if customers.iter().any(|c| c.id() == customer.id()) {
            return Err(InfraError::unexpected(
                "duplicate key value violates unique constraint \"customer_pkey\"",
            ));
        }
        customers.push(customer.clone());
        Ok(())
    }
}
