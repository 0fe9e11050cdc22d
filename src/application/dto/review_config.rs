//! # Review Configuration DTO
//!
//! 審査設定のData Transfer Object

use crate::domain::entities::review::TruncationLimits;

/// 審査設定
///
/// プロンプト組み立てとレポート表示に必要な設定情報
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// モデル識別子（例: "deepseek-chat"）
    pub model: String,
    /// 各テキストの切り詰め上限
    pub limits: TruncationLimits,
}

impl ReviewConfig {
    /// 新しい審査設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use tradecheck::application::dto::review_config::ReviewConfig;
    /// use tradecheck::domain::entities::review::TruncationLimits;
    ///
    /// let config = ReviewConfig::new(
    ///     "deepseek-chat".to_string(),
    ///     TruncationLimits {
    ///         contract: 4000,
    ///         requirement: 4000,
    ///         documents: 6000,
    ///     },
    /// );
    ///
    /// assert_eq!(config.limits.documents, 6000);
    /// ```
    pub fn new(model: String, limits: TruncationLimits) -> Self {
        Self { model, limits }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            model: "deepseek-chat".to_string(),
            limits: TruncationLimits::default(),
        }
    }
}
