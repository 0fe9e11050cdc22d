//! # Word Repository Trait
//!
//! Word (.docx) 文書の段落抽出を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::ExtractionError;

/// Word リポジトリ
#[cfg_attr(test, automock)]
pub trait WordRepository: Send + Sync {
    /// 本文の段落テキストを文書順に返す
    ///
    /// # Errors
    ///
    /// 文書を開けない場合に `ExtractionError::Word` を返す
    fn paragraphs(&self, content: &[u8]) -> Result<Vec<String>, ExtractionError>;
}
