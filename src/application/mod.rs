//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせて審査フローを実現
//! - Repository traitに依存（実装には依存しない）
//! - 外部 API や PDF ライブラリの詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **error**: 審査フローの型付きエラー
//! - **use_cases**: ユースケース

pub mod dto;
pub mod error;
pub mod use_cases;
