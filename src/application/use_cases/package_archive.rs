//! # Package Archive Use Case
//!
//! 書類アーカイブ化ユースケース

use log::info;
use std::sync::Arc;

use crate::application::error::{ReviewError, ValidationError};
use crate::domain::entities::document::UploadedDocument;
use crate::domain::repositories::archive_repository::ArchiveRepository;
use crate::domain::services::archive_naming::{archive_file_name, plan_entries};

/// パッケージ化の結果
#[derive(Debug, Clone)]
pub struct ArchivePackage {
    /// ダウンロード時のファイル名
    pub file_name: String,
    /// アーカイブ内のエントリ名（書き込み順）
    pub entry_names: Vec<String>,
    pub bytes: Vec<u8>,
}

/// 書類アーカイブ化ユースケース
///
/// 書類を `{契約番号}_{役割}_已审核.{拡張子}` に改名して 1 つの ZIP にまとめる
pub struct PackageArchiveUseCase<A: ArchiveRepository> {
    archive_repository: Arc<A>,
}

impl<A: ArchiveRepository> PackageArchiveUseCase<A> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `archive_repository` - アーカイブリポジトリ
    pub fn new(archive_repository: Arc<A>) -> Self {
        Self { archive_repository }
    }

    /// 書類をアーカイブ化する
    ///
    /// # Arguments
    ///
    /// * `contract_id` - 契約番号
    /// * `documents` - 対象書類（空の書類は除外される）
    ///
    /// # Errors
    ///
    /// 契約番号が空の場合は `ReviewError::Validation`、対象がない場合や
    /// 書き込みに失敗した場合は `ReviewError::Archive` を返す
    pub fn execute(
        &self,
        contract_id: &str,
        documents: &[UploadedDocument],
    ) -> Result<ArchivePackage, ReviewError> {
        let contract_id = contract_id.trim();
        if contract_id.is_empty() {
            return Err(ValidationError::MissingContractId.into());
        }

        let entries = plan_entries(contract_id, documents);
        if entries.is_empty() {
            return Err(ReviewError::Archive("没有可打包的文件".to_string()));
        }

        let bytes = self
            .archive_repository
            .pack(&entries)
            .map_err(|e| ReviewError::Archive(format!("{:#}", e)))?;

        info!(
            "Packaged {} file(s) for {} ({} bytes)",
            entries.len(),
            contract_id,
            bytes.len()
        );

        Ok(ArchivePackage {
            file_name: archive_file_name(contract_id),
            entry_names: entries.into_iter().map(|e| e.name).collect(),
            bytes,
        })
    }
}
