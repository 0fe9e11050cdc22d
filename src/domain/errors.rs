//! # Domain Errors
//!
//! 書類抽出と上流 API 呼び出しのエラー

use std::fmt;
use thiserror::Error;

/// 書類からのテキスト抽出エラー
///
/// 抽出サービス内で回復され、該当ファイルの位置にインラインで表示される
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("PDF 解析失败: {0}")]
    Pdf(String),

    #[error("Word 解析失败: {0}")]
    Word(String),

    #[error("页面渲染失败: {0}")]
    Render(String),

    #[error("OCR 识别失败: {0}")]
    Ocr(String),

    #[error("提取任务异常终止: {0}")]
    Worker(String),
}

/// 上流 API エラーの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// API Key が無効
    Authentication,
    /// 残高不足・レート制限
    Quota,
    /// 接続失敗・タイムアウト
    Network,
    /// その他の API エラー応答
    Api,
    /// 応答の形式が想定外
    MalformedResponse,
}

impl UpstreamErrorKind {
    /// 利用者向けのヒント
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Authentication => "请检查 API Key 是否正确",
            Self::Quota => "账户余额不足或请求过于频繁，请稍后再试",
            Self::Network => "网络连接失败，请检查网络后重试",
            Self::Api => "AI 服务返回错误",
            Self::MalformedResponse => "AI 服务返回了无法解析的内容",
        }
    }
}

impl fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authentication => "authentication",
            Self::Quota => "quota",
            Self::Network => "network",
            Self::Api => "api",
            Self::MalformedResponse => "malformed_response",
        };
        write!(f, "{name}")
    }
}

/// 上流 API（チャット補完）の呼び出しエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("AI 连接失败: {message}")]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub message: String,
}

impl UpstreamError {
    pub fn new(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
