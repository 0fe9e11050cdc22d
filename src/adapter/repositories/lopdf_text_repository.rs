//! lopdf Text Repository Implementation
//!
//! PdfTextRepositoryのlopdf実装

use log::debug;
use lopdf::Document;

use crate::domain::errors::ExtractionError;
use crate::domain::repositories::pdf_repository::PdfTextRepository;

/// lopdf による PDF テキスト抽出
///
/// テキスト層のないページ（スキャン画像など）は空文字列になる
pub struct LopdfTextRepository;

impl LopdfTextRepository {
    pub fn new() -> Self {
        Self
    }
}

impl PdfTextRepository for LopdfTextRepository {
    fn page_texts(&self, content: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let document =
            Document::load_mem(content).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        let texts = document
            .get_pages()
            .keys()
            .map(|&page_number| match document.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    debug!("No text layer on page {}: {}", page_number, e);
                    String::new()
                }
            })
            .collect();

        Ok(texts)
    }
}

impl Default for LopdfTextRepository {
    fn default() -> Self {
        Self::new()
    }
}
