//! # OCR Repository Trait
//!
//! ページ画像の文字認識を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::ExtractionError;

use super::pdf_repository::PageImage;

/// OCR リポジトリ
#[cfg_attr(test, automock)]
pub trait OcrRepository: Send + Sync {
    /// 1 ページ分の画像を認識してテキストを返す
    ///
    /// # Errors
    ///
    /// エンジンが使えない、または認識に失敗した場合に `ExtractionError::Ocr` を返す
    fn recognize(&self, page: &PageImage) -> Result<String, ExtractionError>;
}
