//! Terminal Views
//!
//! 表示内容を端末向けテキストと Markdown レポートに変換する

use std::fmt::Write;

use crate::application::use_cases::run_review::ReviewOutcome;
use crate::domain::entities::document::DocumentRole;
use crate::domain::entities::ledger::SessionLedger;
use crate::domain::entities::transaction_mode::TransactionMode;

use super::session::ViewModel;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// 決済方式ごとの見出し（タイトルと要求書類欄）
pub fn mode_banner(mode: TransactionMode) -> String {
    let requirement = match mode.requirement_title() {
        Some(title) => format!("2️⃣ {}（可选）", title),
        None => "🚫 (T/T 无需此项) 电汇模式主要比对合同和单据。".to_string(),
    };
    format!(
        "🛡️ 智能单证风控 Pro - {} 模式\n1️⃣ {} | {} | 3️⃣ {}",
        mode.label(),
        DocumentRole::Contract.display_name(),
        requirement,
        DocumentRole::ExportDocument.display_name()
    )
}

/// 表示内容を端末向けテキストにする
pub fn render_view(view: &ViewModel) -> String {
    match view {
        ViewModel::Report(outcome) => {
            format!("✓ 审核完成！ {}\n\n{}\n", outcome.risk, outcome.report)
        }
        ViewModel::Cleared { batch } => {
            format!("✓ 已清空，开始第 {} 批单据\n", batch)
        }
        ViewModel::Archive(package) => {
            let mut out = format!(
                "✓ 已打包 {} ({} 个文件, {} bytes)\n",
                package.file_name,
                package.entry_names.len(),
                package.bytes.len()
            );
            for name in &package.entry_names {
                let _ = writeln!(out, "  - {}", name);
            }
            out
        }
        ViewModel::Error {
            kind,
            message,
            hint,
        } => {
            let mut out = format!("✗ [{}] {}\n", kind, message);
            if let Some(hint) = hint {
                let _ = writeln!(out, "  提示: {}", hint);
            }
            out
        }
    }
}

/// 審査履歴を Markdown の表にする
pub fn render_ledger(ledger: &SessionLedger) -> String {
    if ledger.is_empty() {
        return "（本批次暂无审核记录）\n".to_string();
    }

    let mut out = String::from("| 时间 | 合同编号 | 模式 | 结果 |\n|---|---|---|---|\n");
    for entry in ledger.all() {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            entry.timestamp.format(TIME_FORMAT),
            entry.contract_id,
            entry.mode.label(),
            entry.risk
        );
    }
    let _ = writeln!(
        out,
        "\n共 {} 条，高风险 {} 条",
        ledger.len(),
        ledger.high_risk_count()
    );
    out
}

/// 審査結果を保存用の Markdown 文書にする
pub fn render_report_document(outcome: &ReviewOutcome) -> String {
    format!(
        "# 单证审核报告 {}\n\n- 合同编号: {}\n- 交易模式: {}\n- 审核时间: {}\n- 风险等级: {}\n\n---\n\n{}\n",
        outcome.contract_id,
        outcome.contract_id,
        outcome.mode.label(),
        outcome.reviewed_at.format(TIME_FORMAT),
        outcome.risk,
        outcome.report.trim_end()
    )
}
