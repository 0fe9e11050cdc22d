//! # Session Ledger
//!
//! セッション内で完了した審査の履歴。プロセスの生存期間だけ保持し、永続化しない

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction_mode::TransactionMode;

/// リスク区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTag {
    HighRisk,
    Safe,
}

impl RiskTag {
    #[inline]
    pub fn is_high_risk(&self) -> bool {
        matches!(self, Self::HighRisk)
    }
}

impl fmt::Display for RiskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighRisk => write!(f, "🔴 高风险"),
            Self::Safe => write!(f, "🟢 安全"),
        }
    }
}

/// 履歴エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub timestamp: DateTime<Utc>,
    pub contract_id: String,
    pub mode: TransactionMode,
    pub risk: RiskTag,
}

impl LedgerEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        contract_id: impl Into<String>,
        mode: TransactionMode,
        risk: RiskTag,
    ) -> Self {
        Self {
            timestamp,
            contract_id: contract_id.into(),
            mode,
            risk,
        }
    }
}

/// セッション履歴
///
/// 追加順を保持する。`reset` で空に戻る
#[derive(Debug, Clone, Default)]
pub struct SessionLedger {
    entries: Vec<LedgerEntry>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// 追加順のエントリ一覧
    pub fn all(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 高リスクのエントリ数
    pub fn high_risk_count(&self) -> usize {
        self.entries.iter().filter(|e| e.risk.is_high_risk()).count()
    }
}
