//! # Domain Services
//!
//! 複数のエンティティにまたがるビジネスルール
//!
//! - **text_extraction**: 書類からのテキスト抽出（OCR フォールバック付き）
//! - **prompt_assembly**: 審査プロンプトの組み立て
//! - **risk_classification**: 審査結果のリスク判定
//! - **archive_naming**: アーカイブ内のファイル命名

pub mod archive_naming;
pub mod prompt_assembly;
pub mod risk_classification;
pub mod text_extraction;
