//! # Domain Layer
//!
//! このモジュールは貿易書類審査のビジネスルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTP クライアントや PDF ライブラリに依存しない
//! - フレームワークに依存しない
//! - 外部 API やファイル形式の詳細は知らない（trait のみ定義）
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（UploadedDocument, TransactionMode, SessionLedger など）
//! - **errors**: ドメインエラー（抽出エラー、上流 API エラー）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（テキスト抽出、プロンプト組み立て、リスク判定、アーカイブ命名）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
