//! Tesseract OCR Repository Implementation
//!
//! OcrRepositoryのTesseract実装。`tesseract` フィーチャー無効時は常に失敗する実装を使う

use crate::domain::errors::ExtractionError;
use crate::domain::repositories::ocr_repository::OcrRepository;
use crate::domain::repositories::pdf_repository::PageImage;

/// Tesseract による文字認識
#[cfg(feature = "tesseract")]
pub struct TesseractOcrRepository {
    language: String,
}

#[cfg(feature = "tesseract")]
impl TesseractOcrRepository {
    /// # Arguments
    ///
    /// * `language` - Tesseract の言語コード（例: `eng`, `eng+chi_sim`）
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(feature = "tesseract")]
impl OcrRepository for TesseractOcrRepository {
    fn recognize(&self, page: &PageImage) -> Result<String, ExtractionError> {
        use leptess::LepTess;

        // LepTess は Send ではないため呼び出しごとに作る
        let mut lt = LepTess::new(None, &self.language)
            .map_err(|e| ExtractionError::Ocr(format!("Tesseract 初始化失败: {}", e)))?;
        lt.set_image_from_mem(&page.png)
            .map_err(|e| ExtractionError::Ocr(format!("第 {} 页: {}", page.page_number, e)))?;
        lt.get_utf8_text()
            .map_err(|e| ExtractionError::Ocr(format!("第 {} 页: {}", page.page_number, e)))
    }
}

/// OCR エンジンなしでビルドされた場合の実装
pub struct UnavailableOcrRepository;

impl OcrRepository for UnavailableOcrRepository {
    fn recognize(&self, _page: &PageImage) -> Result<String, ExtractionError> {
        Err(ExtractionError::Ocr(
            "未启用 OCR 引擎 (需要 tesseract 功能)".to_string(),
        ))
    }
}
