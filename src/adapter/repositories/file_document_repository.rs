//! File Document Repository Implementation
//!
//! DocumentRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::document::{DocumentFormat, DocumentRole, UploadedDocument};
use crate::domain::repositories::document_repository::DocumentRepository;

/// ファイルシステムベースの書類リポジトリ
pub struct FileDocumentRepository;

impl FileDocumentRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 書類ファイルを発見する（内部実装）
    fn discover_documents_internal(dir: &str) -> Result<Vec<PathBuf>> {
        let expanded_path = shellexpand::tilde(dir);
        let dir = PathBuf::from(expanded_path.as_ref());

        if !dir.exists() {
            warn!("Document directory does not exist: {}", dir.display());
            return Ok(Vec::new());
        }

        let mut documents: Vec<PathBuf> = WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| {
                let name = entry.file_name().to_string_lossy();
                DocumentFormat::from_filename(&name) != DocumentFormat::Unsupported
            })
            .map(|entry| entry.path().to_path_buf())
            .collect();
        documents.sort();

        info!("Found {} document(s) in {}", documents.len(), dir.display());

        Ok(documents)
    }

    /// 書類を読み込む（内部実装）
    fn load_document_internal(path: &Path, role: DocumentRole) -> Result<UploadedDocument> {
        let content = fs::read(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .with_context(|| format!("Invalid document path: {}", path.display()))?;

        Ok(UploadedDocument::new(filename, content, role))
    }
}

#[async_trait]
impl DocumentRepository for FileDocumentRepository {
    async fn discover_documents(&self, dir: &str) -> Result<Vec<PathBuf>> {
        let dir = dir.to_string();
        tokio::task::spawn_blocking(move || Self::discover_documents_internal(&dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn load_document(&self, path: &Path, role: DocumentRole) -> Result<UploadedDocument> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).to_string();
        let path = PathBuf::from(expanded);
        tokio::task::spawn_blocking(move || Self::load_document_internal(&path, role))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileDocumentRepository {
    fn default() -> Self {
        Self::new()
    }
}
