//! # 顧客
//!
//! 顧客レコード（ID・氏名・住所）のモデル。
//!
//! ## 設計判断
//!
//! ### ID は呼び出し側が採番する
//!
//! `CustomerId` はクライアントが送信した文字列をそのまま保持する。
//! サーバー側での採番や形式チェックは行わない。一意性はストレージの
//! 主キー制約に委ねる。
//!
//! ### 値の受け渡し
//!
//! 各層は `Customer` を参照で共有せず、所有権ごと受け渡す（またはクローンする）。
//!
//! ## 使用例
//!
//! ```rust
//! use customer_domain::customer::{Customer, CustomerId};
//!
//! let customer = Customer::new(CustomerId::new("C001"), "Dummy Name 1", "Dummy Address 1");
//!
//! assert_eq!(customer.id().as_str(), "C001");
//! assert_eq!(customer.name(), "Dummy Name 1");
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 顧客の一意識別子
///
/// 呼び出し側が割り当てる文字列 ID（例: `"C001"`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct CustomerId(String);

impl CustomerId {
    /// 文字列から顧客 ID を作成する
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 内部の文字列参照を取得する
    ///
    /// sqlx のバインドパラメータとして使用する。
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 内部の文字列を取り出す
    pub fn into_string(self) -> String {
        self.0
    }
}

/// 顧客エンティティ
///
/// 作成後に更新・削除されることはない。
/// 等価性は ID・氏名・住所すべての比較による。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id:      CustomerId,
    name:    String,
    address: String,
}

impl Customer {
    /// 新しい顧客レコードを作成する
    pub fn new(id: CustomerId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}
