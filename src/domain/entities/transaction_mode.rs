//! # TransactionMode Value Object
//!
//! 決済方式。受け付ける要求書類とプロンプトの重点項目を決める

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 決済方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionMode {
    /// 信用状 (L/C)
    #[serde(alias = "lc")]
    LetterOfCredit,
    /// 電信送金 (T/T)
    #[serde(alias = "tt")]
    TelegraphicTransfer,
    /// 取立 (CAD/DP)
    #[serde(alias = "dc", alias = "cad")]
    DocumentaryCollection,
}

impl TransactionMode {
    pub const ALL: [TransactionMode; 3] = [
        Self::LetterOfCredit,
        Self::TelegraphicTransfer,
        Self::DocumentaryCollection,
    ];

    /// 画面およびプロンプトに表示するラベル
    pub fn label(&self) -> &'static str {
        match self {
            Self::LetterOfCredit => "信用证 (L/C)",
            Self::TelegraphicTransfer => "电汇 (T/T)",
            Self::DocumentaryCollection => "托收 (CAD/DP)",
        }
    }

    /// プロンプトに埋め込む重点比較項目
    pub fn focus(&self) -> &'static str {
        match self {
            Self::LetterOfCredit => {
                "重点比对：1.【单据】是否完全符合【信用证】的所有条款（特别是46A/47A条款）。2.【单据】金额和数量是否在【合同】允许范围内。"
            }
            Self::TelegraphicTransfer => {
                "重点比对：【单据】内容（品名、金额、收货人）是否与【销售合同】完全一致。"
            }
            Self::DocumentaryCollection => {
                "重点比对：1.【单据】是否符合【银行托收指示】的要求。2. 提单收货人（Consignee）是否按指示填写（防止无单放货）。"
            }
        }
    }

    /// 要求書類を受け付けるかどうか（T/T は要求書類なし）
    ///
    /// どのモードでも任意。未提出なら「要求なし」の定型文で審査する
    pub fn uses_requirement_document(&self) -> bool {
        !matches!(self, Self::TelegraphicTransfer)
    }

    /// 要求書類の見出し。T/T では `None`
    pub fn requirement_title(&self) -> Option<&'static str> {
        match self {
            Self::LetterOfCredit => Some("信用证 (L/C)"),
            Self::TelegraphicTransfer => None,
            Self::DocumentaryCollection => Some("托收指示/银行信息"),
        }
    }
}

impl fmt::Display for TransactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransactionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lc" | "l/c" | "letter_of_credit" | "letter-of-credit" => Ok(Self::LetterOfCredit),
            "tt" | "t/t" | "telegraphic_transfer" | "telegraphic-transfer" => {
                Ok(Self::TelegraphicTransfer)
            }
            "dc" | "cad" | "dp" | "cad/dp" | "documentary_collection"
            | "documentary-collection" => Ok(Self::DocumentaryCollection),
            _ => Err(format!(
                "unknown transaction mode '{s}'. Valid options: lc, tt, dc"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_document_rules() {
        assert!(TransactionMode::LetterOfCredit.uses_requirement_document());
        assert!(TransactionMode::DocumentaryCollection.uses_requirement_document());
        assert!(!TransactionMode::TelegraphicTransfer.uses_requirement_document());
        assert!(TransactionMode::TelegraphicTransfer.requirement_title().is_none());
    }

    #[test]
    fn test_focus_strings_are_distinct() {
        let focuses: Vec<&str> = TransactionMode::ALL.iter().map(|m| m.focus()).collect();
        for (i, a) in focuses.iter().enumerate() {
            for b in focuses.iter().skip(i + 1) {
                assert!(!a.contains(b) && !b.contains(a));
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("lc".parse::<TransactionMode>(), Ok(TransactionMode::LetterOfCredit));
        assert_eq!("T/T".parse::<TransactionMode>(), Ok(TransactionMode::TelegraphicTransfer));
        assert_eq!(
            "cad".parse::<TransactionMode>(),
            Ok(TransactionMode::DocumentaryCollection)
        );
        assert!("swift".parse::<TransactionMode>().is_err());
    }

    #[test]
    fn test_serde_alias() {
        let mode: TransactionMode = serde_json::from_str("\"lc\"").unwrap();
        assert_eq!(mode, TransactionMode::LetterOfCredit);

        let mode: TransactionMode = serde_json::from_str("\"documentary_collection\"").unwrap();
        assert_eq!(mode, TransactionMode::DocumentaryCollection);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TransactionMode::TelegraphicTransfer.to_string(), "电汇 (T/T)");
    }
}
