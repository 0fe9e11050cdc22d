//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - セッション状態を所有し、利用者操作を 1 つずつ処理する
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **manifest**: バッチ実行用マニフェスト
//! - **session**: セッション状態と操作ハンドラ
//! - **view**: 端末表示と Markdown レポート
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod manifest;
pub mod session;
pub mod view;
pub mod workflow;

pub use cli::Args;
pub use workflow::ReviewWorkflow;
