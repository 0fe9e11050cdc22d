//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ExtractTextUseCase**: 書類群のテキスト抽出（ブロッキング処理を別スレッドで実行）
//! - **RunReviewUseCase**: 検証 → 抽出 → プロンプト組み立て → 審査依頼 → 履歴追加
//! - **PackageArchiveUseCase**: 書類の改名と ZIP 化

pub mod extract_text;
pub mod package_archive;
pub mod run_review;
