//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **UploadedDocument**: アップロードされた書類（ファイル名・内容・役割）
//! - **TransactionMode**: 決済方式（L/C, T/T, CAD/DP）
//! - **ReviewRequest / ReviewPrompt**: 審査リクエストと組み立て済みプロンプト
//! - **SessionLedger**: セッション内の審査履歴

pub mod document;
pub mod ledger;
pub mod review;
pub mod transaction_mode;
