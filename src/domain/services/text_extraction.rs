//! # Text Extraction Service
//!
//! 書類からテキストを取り出すサービス
//!
//! - PDF: ページごとの直接抽出。文字数が閾値未満ならスキャン画像とみなして OCR する
//! - Word: 段落を改行で連結
//! - 複数ファイルはそれぞれ `=== ファイル名 ===` の見出しを付けて連結
//!
//! 1 ファイルの失敗で全体を止めない。失敗したファイルの位置にはエラー文を埋め込む

use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::entities::document::{DocumentFormat, UploadedDocument};
use crate::domain::errors::ExtractionError;
use crate::domain::repositories::ocr_repository::OcrRepository;
use crate::domain::repositories::pdf_repository::{PageRasterRepository, PdfTextRepository};
use crate::domain::repositories::word_repository::WordRepository;

/// 直接抽出の結果がこの文字数未満なら OCR を試す
pub const DEFAULT_OCR_MIN_CHARS: usize = 50;

/// 書類が 1 つもない場合のテキスト
pub const NOT_UPLOADED: &str = "（未上传）";

/// テキスト抽出サービス
pub struct TextExtractionService {
    pdf_text: Arc<dyn PdfTextRepository>,
    rasterizer: Arc<dyn PageRasterRepository>,
    ocr: Arc<dyn OcrRepository>,
    word: Arc<dyn WordRepository>,
    ocr_min_chars: usize,
}

impl TextExtractionService {
    /// 新しいサービスを作成
    ///
    /// # Arguments
    ///
    /// * `pdf_text` - PDF の直接テキスト抽出
    /// * `rasterizer` - OCR 用のページ画像化
    /// * `ocr` - ページ画像の文字認識
    /// * `word` - DOCX の段落抽出
    pub fn new(
        pdf_text: Arc<dyn PdfTextRepository>,
        rasterizer: Arc<dyn PageRasterRepository>,
        ocr: Arc<dyn OcrRepository>,
        word: Arc<dyn WordRepository>,
    ) -> Self {
        Self {
            pdf_text,
            rasterizer,
            ocr,
            word,
            ocr_min_chars: DEFAULT_OCR_MIN_CHARS,
        }
    }

    /// OCR に切り替える文字数の閾値を変更する
    pub fn with_ocr_min_chars(mut self, ocr_min_chars: usize) -> Self {
        self.ocr_min_chars = ocr_min_chars;
        self
    }

    /// 書類群のテキストを 1 つに連結して返す
    ///
    /// 失敗しない。個々のファイルの失敗はインラインのエラー文になる
    pub fn extract(&self, documents: &[UploadedDocument]) -> String {
        if documents.is_empty() {
            return NOT_UPLOADED.to_string();
        }

        let mut combined = String::new();
        for document in documents {
            let body = match self.extract_one(document) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to extract {}: {}", document.filename(), e);
                    format!("[读取错误 {}: {}]", document.filename(), e)
                }
            };
            combined.push_str(&format!("=== {} ===\n{}\n", document.filename(), body));
        }

        info!(
            "Extracted {} chars from {} file(s)",
            combined.chars().count(),
            documents.len()
        );

        combined
    }

    /// 1 ファイル分のテキストを抽出する
    ///
    /// # Errors
    ///
    /// PDF / DOCX として読み込めない場合にエラーを返す
    pub fn extract_one(&self, document: &UploadedDocument) -> Result<String, ExtractionError> {
        match document.format() {
            DocumentFormat::Pdf => self.extract_pdf(document.content()),
            DocumentFormat::Word => Ok(self.word.paragraphs(document.content())?.join("\n")),
            DocumentFormat::Unsupported => {
                debug!("Unsupported format: {}", document.filename());
                Ok(format!("[不支持的文件格式: {}]", document.filename()))
            }
        }
    }

    fn extract_pdf(&self, content: &[u8]) -> Result<String, ExtractionError> {
        let direct = self.pdf_text.page_texts(content)?.join("\n");
        let direct_len = direct.chars().count();

        if direct_len >= self.ocr_min_chars {
            return Ok(direct);
        }

        info!(
            "Direct extraction yielded {} chars (< {}), trying OCR",
            direct_len, self.ocr_min_chars
        );

        let ocr = match self.ocr_pages(content) {
            Ok(ocr) => ocr,
            Err(e) => {
                warn!("OCR fallback failed: {}", e);
                return Ok(with_note(direct, &e));
            }
        };

        if ocr.recognized_chars > direct_len {
            return Ok(ocr.text);
        }

        match ocr.first_error {
            Some(e) => Ok(with_note(direct, &e)),
            None => {
                debug!("OCR result not longer than direct extraction, keeping direct text");
                Ok(direct)
            }
        }
    }

    /// 全ページを画像化して 1 ページずつ OCR する
    ///
    /// ページ単位の認識失敗はそのページの位置にエラー文を入れて続行する。
    /// 直接抽出との比較には実際に認識できた文字数だけを使う
    fn ocr_pages(&self, content: &[u8]) -> Result<OcrPages, ExtractionError> {
        let pages = self.rasterizer.render_pages(content)?;

        let mut result = OcrPages::default();
        for page in &pages {
            let page_text = match self.ocr.recognize(page) {
                Ok(t) => {
                    let t = t.trim_end().to_string();
                    result.recognized_chars += t.chars().count();
                    t
                }
                Err(e) => {
                    warn!("OCR failed on page {}: {}", page.page_number, e);
                    let note = format!("[{}]", e);
                    if result.first_error.is_none() {
                        result.first_error = Some(e);
                    }
                    note
                }
            };
            debug!(
                "OCR page {}: {} chars",
                page.page_number,
                page_text.chars().count()
            );
            result.text.push_str(&format!(
                "--- 第 {} 页 (OCR) ---\n{}\n",
                page.page_number, page_text
            ));
        }

        Ok(result)
    }
}

/// OCR の出力
#[derive(Debug, Default)]
struct OcrPages {
    /// ページ見出し付きの連結テキスト（失敗ページはエラー文）
    text: String,
    /// 認識に成功したテキストの文字数
    recognized_chars: usize,
    first_error: Option<ExtractionError>,
}

/// 直接抽出の結果に失敗理由を追記する
fn with_note(direct: String, error: &ExtractionError) -> String {
    if direct.is_empty() {
        format!("[{}]", error)
    } else {
        format!("{}\n[{}]", direct, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::document::DocumentRole;
    use crate::domain::repositories::ocr_repository::MockOcrRepository;
    use crate::domain::repositories::pdf_repository::{
        MockPageRasterRepository, MockPdfTextRepository, PageImage,
    };
    use crate::domain::repositories::word_repository::MockWordRepository;

    fn pdf(name: &str) -> UploadedDocument {
        UploadedDocument::new(name, b"%PDF-1.7".to_vec(), DocumentRole::ExportDocument)
    }

    fn pages(n: u32) -> Vec<PageImage> {
        (1..=n)
            .map(|page_number| PageImage {
                page_number,
                png: vec![0u8; 4],
            })
            .collect()
    }

    fn service(
        pdf_text: MockPdfTextRepository,
        rasterizer: MockPageRasterRepository,
        ocr: MockOcrRepository,
        word: MockWordRepository,
    ) -> TextExtractionService {
        TextExtractionService::new(
            Arc::new(pdf_text),
            Arc::new(rasterizer),
            Arc::new(ocr),
            Arc::new(word),
        )
    }

    #[test]
    fn test_empty_input_is_not_uploaded() {
        let svc = service(
            MockPdfTextRepository::new(),
            MockPageRasterRepository::new(),
            MockOcrRepository::new(),
            MockWordRepository::new(),
        );

        assert_eq!(svc.extract(&[]), NOT_UPLOADED);
    }

    #[test]
    fn test_pdf_with_enough_text_skips_ocr() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text.expect_page_texts().times(1).returning(|_| {
            Ok(vec![
                "COMMERCIAL INVOICE No. INV-2024-001".to_string(),
                "Seller: Seven O'Clock Resources Ltd.".to_string(),
            ])
        });
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().times(0);
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize().times(0);

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());
        let text = svc.extract_one(&pdf("invoice.pdf")).unwrap();

        assert_eq!(
            text,
            "COMMERCIAL INVOICE No. INV-2024-001\nSeller: Seven O'Clock Resources Ltd."
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec!["x".repeat(50)]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().times(0);
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize().times(0);

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());
        assert_eq!(svc.extract_one(&pdf("a.pdf")).unwrap(), "x".repeat(50));
    }

    #[test]
    fn test_short_pdf_runs_ocr_once_per_page() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec![String::new(), String::new(), String::new()]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer
            .expect_render_pages()
            .times(1)
            .returning(|_| Ok(pages(3)));
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize()
            .times(3)
            .returning(|page| Ok(format!("BILL OF LADING page {}", page.page_number)));

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());
        let text = svc.extract_one(&pdf("bl.pdf")).unwrap();

        assert!(text.contains("--- 第 1 页 (OCR) ---\nBILL OF LADING page 1"));
        assert!(text.contains("--- 第 3 页 (OCR) ---\nBILL OF LADING page 3"));
    }

    #[test]
    fn test_ocr_result_not_longer_keeps_direct_text() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec!["short but readable direct text".to_string()]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().returning(|_| Ok(vec![]));
        let ocr = MockOcrRepository::new();

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());
        // 0 ページの OCR 結果は空文字列なので直接抽出が残る
        assert_eq!(
            svc.extract_one(&pdf("a.pdf")).unwrap(),
            "short but readable direct text"
        );
    }

    #[test]
    fn test_ocr_result_longer_replaces_direct_text() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec!["ab".to_string()]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().returning(|_| Ok(pages(1)));
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize()
            .times(1)
            .returning(|_| Ok("PACKING LIST gross weight 1000kg".to_string()));

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());
        assert_eq!(
            svc.extract_one(&pdf("pl.pdf")).unwrap(),
            "--- 第 1 页 (OCR) ---\nPACKING LIST gross weight 1000kg\n"
        );
    }

    #[test]
    fn test_render_failure_keeps_direct_text_with_note() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec!["abc".to_string()]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer
            .expect_render_pages()
            .returning(|_| Err(ExtractionError::Render("pdfium not found".to_string())));
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize().times(0);

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());
        assert_eq!(
            svc.extract_one(&pdf("a.pdf")).unwrap(),
            "abc\n[页面渲染失败: pdfium not found]"
        );
    }

    #[test]
    fn test_page_ocr_failure_continues_with_next_page() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text.expect_page_texts().returning(|_| Ok(vec![]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().returning(|_| Ok(pages(2)));
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize().times(2).returning(|page| {
            if page.page_number == 1 {
                Err(ExtractionError::Ocr("blurry".to_string()))
            } else {
                Ok("page two text".to_string())
            }
        });

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());
        let text = svc.extract_one(&pdf("scan.pdf")).unwrap();

        assert!(text.contains("[OCR 识别失败: blurry]"));
        assert!(text.contains("page two text"));
    }

    #[test]
    fn test_ocr_failure_keeps_direct_text_with_note() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec!["INVOICE INV-1 USD 500".to_string()]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().returning(|_| Ok(pages(1)));
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize().times(1).returning(|_| {
            Err(ExtractionError::Ocr(
                "未启用 OCR 引擎 (需要 tesseract 功能)".to_string(),
            ))
        });

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());

        assert_eq!(
            svc.extract_one(&pdf("invoice.pdf")).unwrap(),
            "INVOICE INV-1 USD 500\n[OCR 识别失败: 未启用 OCR 引擎 (需要 tesseract 功能)]"
        );
    }

    #[test]
    fn test_failed_pages_do_not_count_towards_ocr_length() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec!["PO-7 USD 900".to_string()]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().returning(|_| Ok(pages(3)));
        let mut ocr = MockOcrRepository::new();
        ocr.expect_recognize().times(3).returning(|page| {
            if page.page_number == 2 {
                Ok("B/L".to_string())
            } else {
                Err(ExtractionError::Ocr("engine crashed".to_string()))
            }
        });

        let svc = service(pdf_text, rasterizer, ocr, MockWordRepository::new());

        // 認識できたのは 3 文字だけなので直接抽出が残る
        assert_eq!(
            svc.extract_one(&pdf("scan.pdf")).unwrap(),
            "PO-7 USD 900\n[OCR 识别失败: engine crashed]"
        );
    }

    #[test]
    fn test_word_paragraphs_joined_with_newline() {
        let mut word = MockWordRepository::new();
        word.expect_paragraphs()
            .returning(|_| Ok(vec!["第一段".to_string(), "第二段".to_string()]));

        let svc = service(
            MockPdfTextRepository::new(),
            MockPageRasterRepository::new(),
            MockOcrRepository::new(),
            word,
        );
        let doc = UploadedDocument::new("lc.docx", vec![1], DocumentRole::Requirement);

        assert_eq!(svc.extract_one(&doc).unwrap(), "第一段\n第二段");
    }

    #[test]
    fn test_unsupported_format_placeholder() {
        let svc = service(
            MockPdfTextRepository::new(),
            MockPageRasterRepository::new(),
            MockOcrRepository::new(),
            MockWordRepository::new(),
        );
        let doc = UploadedDocument::new("photo.jpg", vec![1], DocumentRole::ExportDocument);

        assert_eq!(
            svc.extract_one(&doc).unwrap(),
            "[不支持的文件格式: photo.jpg]"
        );
    }

    #[test]
    fn test_failure_in_one_file_does_not_abort_batch() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text.expect_page_texts().returning(|content| {
            if content == b"broken" {
                Err(ExtractionError::Pdf("invalid file header".to_string()))
            } else {
                Ok(vec!["INVOICE total amount USD 12,000.00 CIF Shanghai".repeat(2)])
            }
        });

        let svc = service(
            pdf_text,
            MockPageRasterRepository::new(),
            MockOcrRepository::new(),
            MockWordRepository::new(),
        );
        let docs = vec![
            UploadedDocument::new("broken.pdf", b"broken".to_vec(), DocumentRole::ExportDocument),
            pdf("invoice.pdf"),
        ];

        let text = svc.extract(&docs);

        assert!(text.contains("=== broken.pdf ===\n[读取错误 broken.pdf: PDF 解析失败: invalid file header]"));
        assert!(text.contains("=== invoice.pdf ===\nINVOICE total amount"));
        assert!(text.find("=== broken.pdf ===") < text.find("=== invoice.pdf ==="));
    }

    #[test]
    fn test_custom_threshold() {
        let mut pdf_text = MockPdfTextRepository::new();
        pdf_text
            .expect_page_texts()
            .returning(|_| Ok(vec!["0123456789".to_string()]));
        let mut rasterizer = MockPageRasterRepository::new();
        rasterizer.expect_render_pages().times(0);

        let svc = service(
            pdf_text,
            rasterizer,
            MockOcrRepository::new(),
            MockWordRepository::new(),
        )
        .with_ocr_min_chars(10);

        assert_eq!(svc.extract_one(&pdf("a.pdf")).unwrap(), "0123456789");
    }
}
