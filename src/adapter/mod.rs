//! Adapter Layer
//!
//! 外部システム（チャット補完 API, PDF/OCR/DOCX ライブラリ, ファイルシステム）との統合

pub mod config;
pub mod deepseek;
pub mod repositories;
