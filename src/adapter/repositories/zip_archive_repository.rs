//! ZIP Archive Repository Implementation
//!
//! ArchiveRepositoryのzip実装

use anyhow::{Context, Result};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::repositories::archive_repository::ArchiveRepository;
use crate::domain::services::archive_naming::ArchiveEntry;

/// Deflate 圧縮の ZIP をメモリ上に作る
pub struct ZipArchiveRepository;

impl ZipArchiveRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveRepository for ZipArchiveRepository {
    fn pack(&self, entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in entries {
            writer
                .start_file(entry.name.as_str(), options)
                .with_context(|| format!("Failed to add archive entry: {}", entry.name))?;
            writer
                .write_all(entry.content)
                .with_context(|| format!("Failed to write archive entry: {}", entry.name))?;
        }

        let cursor = writer.finish().context("Failed to finalize archive")?;
        Ok(cursor.into_inner())
    }
}

impl Default for ZipArchiveRepository {
    fn default() -> Self {
        Self::new()
    }
}
