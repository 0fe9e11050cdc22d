//! # Review Request / Prompt
//!
//! 審査リクエストと、そこから組み立てたプロンプトのバリューオブジェクト

use serde::{Deserialize, Serialize};

use super::transaction_mode::TransactionMode;

/// 各テキストをプロンプトに埋め込む前の最大文字数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationLimits {
    pub contract: usize,
    pub requirement: usize,
    pub documents: usize,
}

impl TruncationLimits {
    pub const DEFAULT_CONTRACT: usize = 5000;
    pub const DEFAULT_REQUIREMENT: usize = 5000;
    pub const DEFAULT_DOCUMENTS: usize = 8000;
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            contract: Self::DEFAULT_CONTRACT,
            requirement: Self::DEFAULT_REQUIREMENT,
            documents: Self::DEFAULT_DOCUMENTS,
        }
    }
}

/// 審査リクエスト
///
/// 送信ごとに作り直し、永続化しない
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub contract_text: String,
    pub requirement_text: String,
    pub documents_text: String,
    pub mode: TransactionMode,
    pub limits: TruncationLimits,
}

impl ReviewRequest {
    pub fn new(
        contract_text: String,
        requirement_text: String,
        documents_text: String,
        mode: TransactionMode,
        limits: TruncationLimits,
    ) -> Self {
        Self {
            contract_text,
            requirement_text,
            documents_text,
            mode,
            limits,
        }
    }
}

/// 組み立て済みプロンプト（system / user メッセージ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPrompt {
    pub system: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = TruncationLimits::default();
        assert_eq!(limits.contract, 5000);
        assert_eq!(limits.requirement, 5000);
        assert_eq!(limits.documents, 8000);
    }
}
