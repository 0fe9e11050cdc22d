//! # Archive Repository Trait
//!
//! 圧縮アーカイブの書き出しを抽象化

use anyhow::Result;

use crate::domain::services::archive_naming::ArchiveEntry;

/// アーカイブリポジトリ
pub trait ArchiveRepository: Send + Sync {
    /// エントリをメモリ上の圧縮アーカイブにまとめる
    ///
    /// # Errors
    ///
    /// アーカイブの書き込みに失敗した場合にエラーを返す
    fn pack(&self, entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>>;
}
