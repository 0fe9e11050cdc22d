//! Review Session
//!
//! 1 回のセッションの状態と、利用者操作の処理

use log::{info, warn};
use uuid::Uuid;

use crate::application::dto::review_submission::ReviewSubmission;
use crate::application::error::ReviewError;
use crate::application::use_cases::package_archive::{ArchivePackage, PackageArchiveUseCase};
use crate::application::use_cases::run_review::{ReviewOutcome, RunReviewUseCase};
use crate::domain::entities::document::UploadedDocument;
use crate::domain::entities::ledger::SessionLedger;
use crate::domain::repositories::archive_repository::ArchiveRepository;
use crate::domain::repositories::review_repository::ReviewRepository;

/// セッション状態
///
/// 審査履歴と書類バッチ番号を持つ。プロセス終了で失われる
#[derive(Debug)]
pub struct ReviewSession {
    id: String,
    ledger: SessionLedger,
    batch: u32,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ledger: SessionLedger::new(),
            batch: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// 現在の書類バッチ番号（1 始まり）
    pub fn batch(&self) -> u32 {
        self.batch
    }

    /// 次の書類へ進む。履歴を消去してバッチ番号を進める
    pub fn next_document(&mut self) -> u32 {
        self.ledger.reset();
        self.batch += 1;
        self.batch
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

/// 利用者操作
#[derive(Debug, Clone)]
pub enum SessionAction {
    Review(ReviewSubmission),
    NextDocument,
    Package {
        contract_id: String,
        documents: Vec<UploadedDocument>,
    },
}

/// 操作結果の表示内容
#[derive(Debug, Clone)]
pub enum ViewModel {
    Report(ReviewOutcome),
    Cleared { batch: u32 },
    Archive(ArchivePackage),
    Error {
        kind: &'static str,
        message: String,
        hint: Option<&'static str>,
    },
}

impl ViewModel {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<ReviewError> for ViewModel {
    fn from(error: ReviewError) -> Self {
        let hint = match &error {
            ReviewError::Upstream(upstream) => Some(upstream.kind.hint()),
            _ => None,
        };
        Self::Error {
            kind: error.kind(),
            message: error.to_string(),
            hint,
        }
    }
}

/// 利用者操作のハンドラ
///
/// 操作ごとにパイプライン全体を完了させてから次の操作を受け付ける
pub struct SessionHandler<R: ReviewRepository, A: ArchiveRepository> {
    review_use_case: RunReviewUseCase<R>,
    package_use_case: PackageArchiveUseCase<A>,
}

impl<R: ReviewRepository, A: ArchiveRepository> SessionHandler<R, A> {
    pub fn new(
        review_use_case: RunReviewUseCase<R>,
        package_use_case: PackageArchiveUseCase<A>,
    ) -> Self {
        Self {
            review_use_case,
            package_use_case,
        }
    }

    /// 操作を処理して表示内容を返す。失敗も表示内容として返す
    pub async fn handle(&self, session: &mut ReviewSession, action: SessionAction) -> ViewModel {
        match action {
            SessionAction::Review(submission) => {
                match self
                    .review_use_case
                    .execute(&submission, &mut session.ledger)
                    .await
                {
                    Ok(outcome) => ViewModel::Report(outcome),
                    Err(e) => {
                        warn!("Review action failed: {}", e);
                        e.into()
                    }
                }
            }
            SessionAction::NextDocument => {
                let batch = session.next_document();
                info!("Session {} moved to batch {}", session.id, batch);
                ViewModel::Cleared { batch }
            }
            SessionAction::Package {
                contract_id,
                documents,
            } => match self.package_use_case.execute(&contract_id, &documents) {
                Ok(package) => ViewModel::Archive(package),
                Err(e) => {
                    warn!("Package action failed: {}", e);
                    e.into()
                }
            },
        }
    }
}
