//! # Review Submission DTO
//!
//! 利用者が 1 回の審査で送信する入力一式

use crate::application::error::ValidationError;
use crate::domain::entities::document::UploadedDocument;
use crate::domain::entities::transaction_mode::TransactionMode;

/// 審査の送信内容
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    /// API Key（ログに出さない）
    pub credential: String,
    /// 契約番号
    pub contract_id: String,
    pub mode: TransactionMode,
    pub contract: Option<UploadedDocument>,
    /// L/C または取立指図書（任意）。T/T では無視される
    pub requirement: Option<UploadedDocument>,
    pub documents: Vec<UploadedDocument>,
}

impl ReviewSubmission {
    /// 入力が揃っているか確認する
    ///
    /// 確認順: API Key → 契約番号 → 契約書 → 輸出書類。要求書類は任意
    ///
    /// # Errors
    ///
    /// 最初に見つかった不足を `ValidationError` で返す
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credential.trim().is_empty() {
            return Err(ValidationError::MissingCredential);
        }
        if self.contract_id.trim().is_empty() {
            return Err(ValidationError::MissingContractId);
        }
        if self.contract.as_ref().map_or(true, UploadedDocument::is_empty) {
            return Err(ValidationError::MissingContract);
        }
        if self.documents.iter().all(UploadedDocument::is_empty) {
            return Err(ValidationError::MissingDocuments);
        }
        Ok(())
    }

    /// アーカイブ対象の全書類（契約書 → 要求書類 → 輸出書類の順）
    pub fn all_documents(&self) -> Vec<UploadedDocument> {
        let requirement = if self.mode.uses_requirement_document() {
            self.requirement.clone()
        } else {
            None
        };

        self.contract
            .iter()
            .cloned()
            .chain(requirement)
            .chain(self.documents.iter().cloned())
            .collect()
    }
}
