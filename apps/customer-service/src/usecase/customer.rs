//! 顧客管理ユースケース
//!
//! 現時点ではリポジトリへの 1:1 の委譲のみを行う。
//! 入力の検証・変換・集約は行わず、リポジトリのエラーはそのまま返す。

use std::sync::Arc;

use async_trait::async_trait;
use customer_domain::customer::{Customer, CustomerId};
use customer_infra::{InfraError, repository::CustomerRepository};

/// 顧客管理ユースケーストレイト
#[async_trait]
pub trait CustomerUseCase: Send + Sync {
    /// 全顧客を取得する
    async fn get_all_customer(&self) -> Result<Vec<Customer>, InfraError>;

    /// ID で顧客を取得する
    async fn find_customer_by_id(&self, id: &CustomerId) -> Result<Customer, InfraError>;

    /// 顧客を登録する
    async fn register_customer(&self, customer: &Customer) -> Result<(), InfraError>;
}

/// 顧客管理ユースケースの実装
pub struct CustomerUseCaseImpl {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CustomerUseCaseImpl {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }
}

#[async_trait]
impl CustomerUseCase for CustomerUseCaseImpl {
    async fn get_all_customer(&self) -> Result<Vec<Customer>, InfraError> {
        self.customer_repository.retrieve_all().await
    }

    async fn find_customer_by_id(&self, id: &CustomerId) -> Result<Customer, InfraError> {
        self.customer_repository.find_by_id(id).await
    }

    async fn register_customer(&self, customer: &Customer) -> Result<(), InfraError> {
        self.customer_repository.create(customer).await
    }
}
