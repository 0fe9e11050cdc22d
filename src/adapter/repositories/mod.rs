//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod deepseek_review_repository;
pub mod docx_word_repository;
pub mod file_document_repository;
pub mod lopdf_text_repository;
pub mod pdfium_raster_repository;
pub mod tesseract_ocr_repository;
pub mod zip_archive_repository;
