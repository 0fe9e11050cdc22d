//! Chat Completion Error Classification
//!
//! API 呼び出しエラーの分類。HTTP 応答があればステータスコードで、
//! なければ reqwest のエラー種別と接続系のメッセージで判定する

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::{UpstreamError, UpstreamErrorKind};

/// 成功以外のステータスが返った
#[derive(Debug, Error)]
#[error("DeepSeek API error ({status}): {body}")]
pub struct ApiStatusError {
    pub status: StatusCode,
    pub body: String,
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    let mut messages = Vec::new();
    for cause in e.chain() {
        messages.push(cause.to_string());
    }
    messages.join(" | ")
}

/// Check if an error was raised before any HTTP response arrived
pub fn is_connection_error(error_msg: &str) -> bool {
    error_msg.contains("error sending request")
        || error_msg.contains("Broken pipe")
        || error_msg.contains("broken pipe")
        || error_msg.contains("Connection reset")
        || error_msg.contains("connection reset")
        || error_msg.contains("Connection refused")
        || error_msg.contains("connection refused")
        || error_msg.contains("dns error")
        || error_msg.contains("timed out")
        || error_msg.contains("unexpected end of file")
}

/// Check if the body could not be decoded
pub fn is_malformed_response(error_msg: &str) -> bool {
    error_msg.contains("Failed to parse chat completion response")
}

/// ステータスコードから種別を決める
pub fn status_kind(status: StatusCode) -> UpstreamErrorKind {
    match status.as_u16() {
        401 | 403 => UpstreamErrorKind::Authentication,
        402 | 429 => UpstreamErrorKind::Quota,
        _ => UpstreamErrorKind::Api,
    }
}

fn is_transport_error(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .any(|re| re.is_connect() || re.is_timeout() || re.is_request())
}

/// anyhow エラーを `UpstreamError` に分類する
///
/// メッセージには原因の連鎖をすべて含める
pub fn classify(e: &anyhow::Error) -> UpstreamError {
    let message = error_chain_to_string(e);

    let kind = if let Some(api) = e.downcast_ref::<ApiStatusError>() {
        status_kind(api.status)
    } else if is_malformed_response(&message) {
        UpstreamErrorKind::MalformedResponse
    } else if is_transport_error(e) || is_connection_error(&message) {
        UpstreamErrorKind::Network
    } else {
        UpstreamErrorKind::Api
    };

    UpstreamError::new(kind, message)
}
