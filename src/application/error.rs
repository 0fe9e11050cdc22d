//! # Review Errors
//!
//! 審査フローの型付きエラー。表示方法は Driver 層が種別ごとに決める

use thiserror::Error;

use crate::domain::errors::{ExtractionError, UpstreamError};

/// 入力不足による検証エラー。API は呼ばれない
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("请先输入 API Key")]
    MissingCredential,

    #[error("请填写合同编号")]
    MissingContractId,

    #[error("请至少上传销售合同！")]
    MissingContract,

    #[error("请上传出口单据！")]
    MissingDocuments,
}

/// 審査フローのエラー
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("打包失败: {0}")]
    Archive(String),
}

impl ReviewError {
    /// エラー種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Extraction(_) => "ExtractionError",
            Self::Upstream(_) => "UpstreamError",
            Self::Archive(_) => "ArchiveError",
        }
    }
}
