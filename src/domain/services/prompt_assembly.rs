//! # Prompt Assembly Service
//!
//! 審査リクエストから system / user メッセージを組み立てる
//!
//! 同じ入力からは常に同じプロンプトを生成する（時刻や乱数を埋め込まない）

use crate::domain::entities::review::{ReviewPrompt, ReviewRequest};

/// T/T など要求書類がない場合の要求テキスト
pub const NO_REQUIREMENT: &str = "（无额外要求，以合同为准）";

/// プロンプト組み立てサービス
pub struct PromptAssembler;

impl PromptAssembler {
    /// プロンプトを組み立てる
    ///
    /// 3 つのテキストはそれぞれの上限文字数で切り詰めてから埋め込む
    pub fn build(request: &ReviewRequest) -> ReviewPrompt {
        let mode = request.mode;

        let system = format!(
            "你是 Seven O'Clock Resources 的首席单证专家。现在的任务是进行【多方单据交叉审核】。\n\
             \n\
             当前业务模式：{label}\n\
             {focus}\n\
             \n\
             请严格检查以下三个维度的逻辑一致性：\n\
             1. **销售合同 (PO)**：这是我们答应给客户的东西。\n\
             2. **要求文件 (L/C 或 托收指示)**：这是客户或银行要求我们必须怎么做。\n\
             3. **出口单据 (Docs)**：这是单证员实际做出来的文件（发票、箱单、提单等）。\n\
             \n\
             请找出“单证不符”、“单单不符”的错误，例如：\n\
             - 信用证要求 Latest Shipment 是 15号，但提单是 20号。\n\
             - 合同是 CIF 条款，但发票上没写保险费。\n\
             - 毛重在箱单上是 1000kg，提单上却是 1005kg。\n\
             \n\
             输出格式：\n\
             🚨 **致命错误** (影响收款的硬伤)\n\
             ⚠️ **一般疑点** (可能是笔误)\n\
             ✅ **一致性确认** (主要信息核对无误)\n",
            label = mode.label(),
            focus = mode.focus(),
        );

        let user = format!(
            "【1. 我们的销售合同 PO】:\n{contract}\n\n\
             【2. 客户/银行要求 (L/C 或 指示)】:\n{requirement}\n\n\
             【3. 我们做的出口单据 (发票/箱单/提单)】:\n{documents}\n",
            contract = truncate_chars(&request.contract_text, request.limits.contract),
            requirement = truncate_chars(&request.requirement_text, request.limits.requirement),
            documents = truncate_chars(&request.documents_text, request.limits.documents),
        );

        ReviewPrompt { system, user }
    }
}

/// 先頭から `limit` 文字（バイトではなく Unicode スカラー値）までを返す
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
