//! # Tradecheck
//!
//! 貿易書類（契約書・信用状・インボイス・パッキングリスト・B/L）を外部の LLM で突き合わせ審査するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 書類・決済方式・審査履歴と、抽出・プロンプト組み立て・リスク判定・アーカイブ命名のルール
//! - **Application層**: 審査・テキスト抽出・アーカイブ化のユースケース
//! - **Adapter層**: 外部システムとの統合（チャット補完 API, lopdf, pdfium, Tesseract, DOCX, ZIP, ファイルシステム）
//! - **Driver層**: CLI、セッション状態、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
