//! # Run Review Use Case
//!
//! 書類審査ユースケース

use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::review_config::ReviewConfig;
use crate::application::dto::review_submission::ReviewSubmission;
use crate::application::error::ReviewError;
use crate::domain::entities::ledger::{LedgerEntry, RiskTag, SessionLedger};
use crate::domain::entities::review::ReviewRequest;
use crate::domain::entities::transaction_mode::TransactionMode;
use crate::domain::repositories::review_repository::ReviewRepository;
use crate::domain::services::prompt_assembly::{PromptAssembler, NO_REQUIREMENT};
use crate::domain::services::risk_classification::RiskClassifier;

use super::extract_text::ExtractTextUseCase;

/// 審査結果
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub contract_id: String,
    pub mode: TransactionMode,
    /// モデルが返した Markdown
    pub report: String,
    pub risk: RiskTag,
    pub reviewed_at: DateTime<Utc>,
}

/// 書類審査ユースケース
///
/// 入力を検証し、書類のテキストを抽出してプロンプトを組み立て、外部モデルに審査を依頼する。
/// 成功した審査だけをセッション履歴に追加する
pub struct RunReviewUseCase<R: ReviewRepository> {
    review_repository: Arc<R>,
    extract_use_case: Arc<ExtractTextUseCase>,
    config: ReviewConfig,
}

impl<R: ReviewRepository> RunReviewUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `review_repository` - 審査リポジトリ
    /// * `extract_use_case` - テキスト抽出ユースケース
    /// * `config` - 審査設定
    pub fn new(
        review_repository: Arc<R>,
        extract_use_case: Arc<ExtractTextUseCase>,
        config: ReviewConfig,
    ) -> Self {
        Self {
            review_repository,
            extract_use_case,
            config,
        }
    }

    /// 審査を実行する
    ///
    /// # Arguments
    ///
    /// * `submission` - 送信内容
    /// * `ledger` - セッション履歴（成功時のみ追加）
    ///
    /// # Returns
    ///
    /// 審査結果
    ///
    /// # Errors
    ///
    /// - 入力不足の場合は `ReviewError::Validation`（API は呼ばない）
    /// - API 呼び出しに失敗した場合は `ReviewError::Upstream`（履歴は変更しない）
    pub async fn execute(
        &self,
        submission: &ReviewSubmission,
        ledger: &mut SessionLedger,
    ) -> Result<ReviewOutcome, ReviewError> {
        submission.validate()?;

        let mode = submission.mode;
        let contract_id = submission.contract_id.trim().to_string();
        info!(
            "Starting review: contract={} mode={} model={}",
            contract_id, mode, self.config.model
        );

        // 1. テキスト抽出
        let contract_text = self
            .extract_use_case
            .execute(submission.contract.iter().cloned().collect())
            .await?;

        // 要求書類は任意。未提出（または T/T）なら定型文
        let requirement = submission
            .requirement
            .as_ref()
            .filter(|r| mode.uses_requirement_document() && !r.is_empty());
        let requirement_text = match requirement {
            Some(requirement) => {
                self.extract_use_case
                    .execute(vec![requirement.clone()])
                    .await?
            }
            None => NO_REQUIREMENT.to_string(),
        };

        let documents_text = self
            .extract_use_case
            .execute(submission.documents.clone())
            .await?;

        // 2. プロンプト組み立て
        let request = ReviewRequest::new(
            contract_text,
            requirement_text,
            documents_text,
            mode,
            self.config.limits,
        );
        let prompt = PromptAssembler::build(&request);
        info!(
            "Prompt assembled: system={} chars, user={} chars",
            prompt.system.chars().count(),
            prompt.user.chars().count()
        );

        // 3. 審査依頼
        let report = match self
            .review_repository
            .review(&prompt, &submission.credential)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                warn!("Review failed ({}): {}", e.kind, e.message);
                return Err(e.into());
            }
        };

        // 4. リスク判定と履歴追加
        let risk = RiskClassifier::classify(&report);
        let reviewed_at = Utc::now();
        ledger.append(LedgerEntry::new(reviewed_at, contract_id.clone(), mode, risk));

        info!("Review completed: contract={} risk={:?}", contract_id, risk);

        Ok(ReviewOutcome {
            contract_id,
            mode,
            report,
            risk,
            reviewed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ValidationError;
    use crate::domain::entities::document::{DocumentRole, UploadedDocument};
    use crate::domain::errors::{UpstreamError, UpstreamErrorKind};
    use crate::domain::repositories::ocr_repository::MockOcrRepository;
    use crate::domain::repositories::pdf_repository::{
        MockPageRasterRepository, MockPdfTextRepository,
    };
    use crate::domain::repositories::review_repository::MockReviewRepository;
    use crate::domain::repositories::word_repository::MockWordRepository;
    use crate::domain::services::text_extraction::TextExtractionService;

    /// DOCX の内容バイト列をそのまま 1 段落として返す抽出ユースケース
    fn extract_use_case() -> Arc<ExtractTextUseCase> {
        let mut word = MockWordRepository::new();
        word.expect_paragraphs()
            .returning(|content| Ok(vec![String::from_utf8_lossy(content).to_string()]));

        let service = TextExtractionService::new(
            Arc::new(MockPdfTextRepository::new()),
            Arc::new(MockPageRasterRepository::new()),
            Arc::new(MockOcrRepository::new()),
            Arc::new(word),
        );
        Arc::new(ExtractTextUseCase::new(Arc::new(service)))
    }

    fn submission(mode: TransactionMode) -> ReviewSubmission {
        ReviewSubmission {
            credential: "  sk-test  ".to_string(),
            contract_id: "PO-1".to_string(),
            mode,
            contract: Some(UploadedDocument::new(
                "contract.docx",
                b"SALES CONTRACT PO-1 CIF SHANGHAI".to_vec(),
                DocumentRole::Contract,
            )),
            requirement: Some(UploadedDocument::new(
                "lc.docx",
                b"L/C LATEST SHIPMENT 2024-12-15".to_vec(),
                DocumentRole::Requirement,
            )),
            documents: vec![UploadedDocument::new(
                "bl.docx",
                b"B/L ON BOARD 2024-12-20".to_vec(),
                DocumentRole::ExportDocument,
            )],
        }
    }

    fn use_case(mock: MockReviewRepository) -> RunReviewUseCase<MockReviewRepository> {
        RunReviewUseCase::new(Arc::new(mock), extract_use_case(), ReviewConfig::default())
    }

    #[tokio::test]
    async fn test_review_success_appends_ledger() {
        let mut mock = MockReviewRepository::new();
        mock.expect_review()
            .times(1)
            .withf(|prompt, credential| {
                prompt.user.contains("SALES CONTRACT PO-1")
                    && prompt.user.contains("L/C LATEST SHIPMENT")
                    && prompt.user.contains("=== bl.docx ===\nB/L ON BOARD")
                    && prompt.system.contains(TransactionMode::LetterOfCredit.focus())
                    && credential == "  sk-test  "
            })
            .returning(|_, _| {
                Ok("🚨 **致命错误**\n- 提单日期晚于信用证最迟装运期".to_string())
            });

        let mut ledger = SessionLedger::new();
        let outcome = use_case(mock)
            .execute(&submission(TransactionMode::LetterOfCredit), &mut ledger)
            .await
            .unwrap();

        assert_eq!(outcome.contract_id, "PO-1");
        assert_eq!(outcome.risk, RiskTag::HighRisk);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.all()[0].contract_id, "PO-1");
        assert_eq!(ledger.all()[0].mode, TransactionMode::LetterOfCredit);
        assert_eq!(ledger.all()[0].risk, RiskTag::HighRisk);
    }

    #[tokio::test]
    async fn test_tt_mode_uses_no_requirement_placeholder() {
        let mut mock = MockReviewRepository::new();
        mock.expect_review()
            .times(1)
            .withf(|prompt, _| {
                prompt.user.contains(NO_REQUIREMENT) && !prompt.user.contains("L/C LATEST SHIPMENT")
            })
            .returning(|_, _| Ok("✅ **一致性确认** 无误".to_string()));

        let mut ledger = SessionLedger::new();
        let outcome = use_case(mock)
            .execute(&submission(TransactionMode::TelegraphicTransfer), &mut ledger)
            .await
            .unwrap();

        assert_eq!(outcome.risk, RiskTag::Safe);
    }

    #[tokio::test]
    async fn test_lc_without_requirement_uses_placeholder() {
        let mut mock = MockReviewRepository::new();
        mock.expect_review()
            .times(1)
            .withf(|prompt, _| {
                prompt.user.contains(NO_REQUIREMENT)
                    && prompt.system.contains(TransactionMode::LetterOfCredit.focus())
            })
            .returning(|_, _| Ok("✅ **一致性确认** 无误".to_string()));

        let mut submission = submission(TransactionMode::LetterOfCredit);
        submission.requirement = None;

        let mut ledger = SessionLedger::new();
        let outcome = use_case(mock).execute(&submission, &mut ledger).await.unwrap();

        assert_eq!(outcome.mode, TransactionMode::LetterOfCredit);
        assert_eq!(ledger.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_credential_never_calls_api() {
        let mut mock = MockReviewRepository::new();
        mock.expect_review().times(0);

        let mut s = submission(TransactionMode::LetterOfCredit);
        s.credential = String::new();

        let mut ledger = SessionLedger::new();
        let result = use_case(mock).execute(&s, &mut ledger).await;

        assert!(matches!(
            result,
            Err(ReviewError::Validation(ValidationError::MissingCredential))
        ));
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_no_export_documents_never_calls_api() {
        let mut mock = MockReviewRepository::new();
        mock.expect_review().times(0);

        let mut s = submission(TransactionMode::LetterOfCredit);
        s.documents.clear();

        let mut ledger = SessionLedger::new();
        let result = use_case(mock).execute(&s, &mut ledger).await;

        assert!(matches!(
            result,
            Err(ReviewError::Validation(ValidationError::MissingDocuments))
        ));
    }

    #[tokio::test]
    async fn test_upstream_failure_skips_ledger() {
        let mut mock = MockReviewRepository::new();
        mock.expect_review().times(1).returning(|_, _| {
            Err(UpstreamError::new(
                UpstreamErrorKind::Quota,
                "DeepSeek API error (402 Payment Required): Insufficient Balance",
            ))
        });

        let mut ledger = SessionLedger::new();
        ledger.append(LedgerEntry::new(
            Utc::now(),
            "PO-0",
            TransactionMode::TelegraphicTransfer,
            RiskTag::Safe,
        ));

        let result = use_case(mock)
            .execute(&submission(TransactionMode::LetterOfCredit), &mut ledger)
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), "UpstreamError");
        assert!(err.to_string().starts_with("AI 连接失败: "));
        assert!(err.to_string().contains("Insufficient Balance"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.all()[0].contract_id, "PO-0");
    }
}
