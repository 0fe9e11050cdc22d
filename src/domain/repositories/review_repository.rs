//! # Review Repository Trait
//!
//! チャット補完 API への審査依頼を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::review::ReviewPrompt;
use crate::domain::errors::UpstreamError;

/// 審査リポジトリ
///
/// 組み立て済みプロンプトを外部モデルへ送り、返ってきた Markdown を返す
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// プロンプトを送信して審査結果を受け取る
    ///
    /// 1 回の呼び出しにつき 1 回だけ送信する（リトライしない）
    ///
    /// # Arguments
    ///
    /// * `prompt` - system / user メッセージ
    /// * `credential` - API Key（前後の空白は実装側で除去する）
    ///
    /// # Errors
    ///
    /// 認証・残高・通信・応答形式のいずれかで失敗した場合に `UpstreamError` を返す
    async fn review(&self, prompt: &ReviewPrompt, credential: &str) -> Result<String, UpstreamError>;
}
