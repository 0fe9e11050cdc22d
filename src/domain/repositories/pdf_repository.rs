//! # PDF Repository Traits
//!
//! PDF の直接テキスト抽出とページ画像化を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::ExtractionError;

/// 画像化されたページ（PNG）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// 1 始まりのページ番号
    pub page_number: u32,
    pub png: Vec<u8>,
}

/// PDF テキストリポジトリ
#[cfg_attr(test, automock)]
pub trait PdfTextRepository: Send + Sync {
    /// ページごとのテキストを返す（テキストのないページは空文字列）
    ///
    /// # Errors
    ///
    /// PDF として読み込めない場合に `ExtractionError::Pdf` を返す
    fn page_texts(&self, content: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

/// ページ画像化リポジトリ
#[cfg_attr(test, automock)]
pub trait PageRasterRepository: Send + Sync {
    /// 全ページを PNG に描画する
    ///
    /// # Errors
    ///
    /// 描画エンジンの初期化や描画に失敗した場合に `ExtractionError::Render` を返す
    fn render_pages(&self, content: &[u8]) -> Result<Vec<PageImage>, ExtractionError>;
}
