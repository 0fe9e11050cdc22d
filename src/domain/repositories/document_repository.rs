//! # Document Repository Trait
//!
//! 書類ファイルの発見と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::entities::document::{DocumentRole, UploadedDocument};

/// 書類リポジトリ
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// ディレクトリ配下の対応形式（PDF / DOCX）の書類を発見する
    ///
    /// # Returns
    ///
    /// パス順にソートされた書類ファイルのリスト
    async fn discover_documents(&self, dir: &str) -> Result<Vec<PathBuf>>;

    /// 書類を読み込む
    ///
    /// # Errors
    ///
    /// ファイルの読み込みに失敗した場合にエラーを返す
    async fn load_document(&self, path: &Path, role: DocumentRole) -> Result<UploadedDocument>;
}
