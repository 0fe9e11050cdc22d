//! # Risk Classification Service
//!
//! 審査結果の Markdown からリスク区分を判定する
//!
//! 致命的エラーの見出し文字列が含まれるかどうかだけを見る。否定文や例示の中に
//! 出てきても高リスクになる

use crate::domain::entities::ledger::RiskTag;

/// 致命的エラーを示すマーカー
pub const FATAL_MARKER: &str = "致命错误";

/// リスク判定サービス
pub struct RiskClassifier;

impl RiskClassifier {
    /// マーカーを含めば高リスク、含まなければ安全
    pub fn classify(report: &str) -> RiskTag {
        if report.contains(FATAL_MARKER) {
            RiskTag::HighRisk
        } else {
            RiskTag::Safe
        }
    }
}
