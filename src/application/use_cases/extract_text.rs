//! # Extract Text Use Case
//!
//! テキスト抽出ユースケース

use log::info;
use std::sync::Arc;

use crate::domain::entities::document::UploadedDocument;
use crate::domain::errors::ExtractionError;
use crate::domain::services::text_extraction::TextExtractionService;

/// テキスト抽出ユースケース
///
/// PDF 解析や OCR はブロッキング処理なので `spawn_blocking` で実行する
pub struct ExtractTextUseCase {
    service: Arc<TextExtractionService>,
}

impl ExtractTextUseCase {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `service` - テキスト抽出サービス
    pub fn new(service: Arc<TextExtractionService>) -> Self {
        Self { service }
    }

    /// 書類群のテキストを抽出する
    ///
    /// # Arguments
    ///
    /// * `documents` - 抽出対象の書類
    ///
    /// # Returns
    ///
    /// 見出し付きで連結されたテキスト（書類がなければ未アップロードの表示）
    ///
    /// # Errors
    ///
    /// 抽出タスク自体が異常終了した場合のみ `ExtractionError::Worker` を返す
    pub async fn execute(&self, documents: Vec<UploadedDocument>) -> Result<String, ExtractionError> {
        info!("Extracting text from {} file(s)", documents.len());

        let service = self.service.clone();
        tokio::task::spawn_blocking(move || service.extract(&documents))
            .await
            .map_err(|e| ExtractionError::Worker(e.to_string()))
    }
}
