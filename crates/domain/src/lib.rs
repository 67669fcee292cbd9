//! # Customer API ドメイン層
//!
//! 顧客（Customer）エンティティを定義する。
//!
//! ## 設計方針
//!
//! - **インフラ非依存**: DB や HTTP の詳細を持たない純粋なデータ型のみを置く
//! - **構造的等価性**: エンティティの等価判定は全フィールドの比較で行う
//!
//! ## 依存関係
//!
//! ```text
//! customer-service → infra → domain
//! ```
//!
//! ドメイン層はどのクレートにも依存しない。

pub mod customer;
