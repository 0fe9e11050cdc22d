//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::deepseek::client::ReqwestChatClient;
use crate::adapter::repositories::deepseek_review_repository::DeepSeekReviewRepository;
use crate::adapter::repositories::docx_word_repository::DocxWordRepository;
use crate::adapter::repositories::file_document_repository::FileDocumentRepository;
use crate::adapter::repositories::lopdf_text_repository::LopdfTextRepository;
use crate::adapter::repositories::pdfium_raster_repository::PdfiumRasterRepository;
use crate::adapter::repositories::zip_archive_repository::ZipArchiveRepository;
use crate::application::dto::review_submission::ReviewSubmission;
use crate::application::use_cases::extract_text::ExtractTextUseCase;
use crate::application::use_cases::package_archive::PackageArchiveUseCase;
use crate::application::use_cases::run_review::RunReviewUseCase;
use crate::domain::entities::document::{DocumentRole, UploadedDocument};
use crate::domain::entities::transaction_mode::TransactionMode;
use crate::domain::repositories::archive_repository::ArchiveRepository;
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::domain::repositories::ocr_repository::OcrRepository;
use crate::domain::repositories::review_repository::ReviewRepository;
use crate::domain::services::text_extraction::TextExtractionService;

use super::cli::{Args, BatchArgs, Command, ReviewArgs};
use super::manifest::{DocumentPaths, Manifest, ManifestStep};
use super::session::{ReviewSession, SessionAction, SessionHandler, ViewModel};
use super::view::{mode_banner, render_ledger, render_report_document, render_view};

/// 1 ステップ分の読み込み済み書類
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub contract: Option<UploadedDocument>,
    pub requirement: Option<UploadedDocument>,
    pub documents: Vec<UploadedDocument>,
}

impl LoadedDocuments {
    fn into_submission(
        self,
        credential: &str,
        contract_id: &str,
        mode: TransactionMode,
    ) -> ReviewSubmission {
        ReviewSubmission {
            credential: credential.to_string(),
            contract_id: contract_id.to_string(),
            mode,
            contract: self.contract,
            requirement: self.requirement,
            documents: self.documents,
        }
    }

    fn into_all(self) -> Vec<UploadedDocument> {
        self.contract
            .into_iter()
            .chain(self.requirement)
            .chain(self.documents)
            .collect()
    }
}

fn ocr_repository(config: &Config) -> Arc<dyn OcrRepository> {
    #[cfg(feature = "tesseract")]
    {
        use crate::adapter::repositories::tesseract_ocr_repository::TesseractOcrRepository;
        Arc::new(TesseractOcrRepository::new(config.ocr_language.clone()))
    }
    #[cfg(not(feature = "tesseract"))]
    {
        use crate::adapter::repositories::tesseract_ocr_repository::UnavailableOcrRepository;
        let _ = &config.ocr_language;
        Arc::new(UnavailableOcrRepository)
    }
}

/// OCR エンジンなしでビルドされている場合の注意書き
pub fn ocr_notice() -> Option<&'static str> {
    if cfg!(feature = "tesseract") {
        None
    } else {
        Some("⚠️ 未启用 OCR 引擎：扫描版 PDF 将无法识别文字（需使用 tesseract 功能构建）")
    }
}

/// Build the extraction use case from config
pub fn build_extract_use_case(config: &Config) -> Arc<ExtractTextUseCase> {
    let service = TextExtractionService::new(
        Arc::new(LopdfTextRepository::new()),
        Arc::new(PdfiumRasterRepository::new(config.ocr_dpi)),
        ocr_repository(config),
        Arc::new(DocxWordRepository::new()),
    )
    .with_ocr_min_chars(config.ocr_min_chars);

    Arc::new(ExtractTextUseCase::new(Arc::new(service)))
}

/// Resolve an output path against an optional base directory
fn output_path(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

/// 同じファイルを指すパスが等しくなるように正規化する（存在しなければ `~` 展開のみ）
fn comparable_path(path: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
    fs::canonicalize(&expanded).unwrap_or(expanded)
}

/// Trade Document Review Workflow
pub struct ReviewWorkflow<R: ReviewRepository, A: ArchiveRepository> {
    handler: SessionHandler<R, A>,
    document_repository: Arc<dyn DocumentRepository>,
}

impl ReviewWorkflow<DeepSeekReviewRepository, ZipArchiveRepository> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: &Config) -> Self {
        let api = Arc::new(ReqwestChatClient::new(config.api_base_url.clone()));
        let review_repo = Arc::new(DeepSeekReviewRepository::new(api, config));
        let archive_repo = Arc::new(ZipArchiveRepository::new());

        let review_use_case = RunReviewUseCase::new(
            review_repo,
            build_extract_use_case(config),
            config.review_config(),
        );
        let package_use_case = PackageArchiveUseCase::new(archive_repo);

        if let Some(notice) = ocr_notice() {
            warn!("{}", notice);
        }

        Self::with_handler(
            SessionHandler::new(review_use_case, package_use_case),
            Arc::new(FileDocumentRepository::new()),
        )
    }
}

impl<R: ReviewRepository, A: ArchiveRepository> ReviewWorkflow<R, A> {
    pub fn with_handler(
        handler: SessionHandler<R, A>,
        document_repository: Arc<dyn DocumentRepository>,
    ) -> Self {
        Self {
            handler,
            document_repository,
        }
    }

    /// Execute the subcommand
    pub async fn execute(&self, args: Args) -> Result<()> {
        let api_key = args.api_key.clone().unwrap_or_default();
        if let Some(notice) = ocr_notice() {
            println!("{}", notice);
        }

        match &args.command {
            Command::Review(review) => {
                self.run_review(review, &api_key).await?;
            }
            Command::Batch(batch) => {
                self.run_batch(batch, &api_key).await?;
            }
        }

        Ok(())
    }

    /// 指定パスの書類を読み込む
    ///
    /// `docs_dir` で見つかった書類のうち、契約書・要求書類と同じパスは除く
    pub async fn load_documents(&self, paths: &DocumentPaths) -> Result<LoadedDocuments> {
        let mut loaded = LoadedDocuments::default();

        if let Some(path) = &paths.contract {
            loaded.contract = Some(
                self.document_repository
                    .load_document(path, DocumentRole::Contract)
                    .await?,
            );
        }
        if let Some(path) = &paths.requirement {
            loaded.requirement = Some(
                self.document_repository
                    .load_document(path, DocumentRole::Requirement)
                    .await?,
            );
        }

        let mut document_paths = paths.documents.clone();
        if let Some(dir) = &paths.docs_dir {
            let discovered = self.document_repository.discover_documents(dir).await?;
            let excluded: Vec<PathBuf> = paths
                .contract
                .iter()
                .chain(paths.requirement.iter())
                .map(|p| comparable_path(p))
                .collect();
            document_paths.extend(
                discovered
                    .into_iter()
                    .filter(|p| !excluded.contains(&comparable_path(p))),
            );
        }

        for path in &document_paths {
            loaded.documents.push(
                self.document_repository
                    .load_document(path, DocumentRole::ExportDocument)
                    .await?,
            );
        }

        info!(
            "Loaded documents: contract={} requirement={} export={}",
            loaded.contract.is_some(),
            loaded.requirement.is_some(),
            loaded.documents.len()
        );

        Ok(loaded)
    }

    /// Run a single review, then optionally save the report and archive
    pub async fn run_review(&self, args: &ReviewArgs, api_key: &str) -> Result<ReviewSession> {
        let mode = TransactionMode::from(args.mode);
        let mut session = ReviewSession::new();

        println!("{}", mode_banner(mode));

        let paths = DocumentPaths {
            contract: Some(args.contract.clone()),
            requirement: args.requirement.clone(),
            documents: args.docs.clone(),
            docs_dir: args.docs_dir.clone(),
        };
        let loaded = match self.load_documents(&paths).await {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("Failed to load documents: {:#}", e);
                println!("✗ [InputError] {:#}", e);
                return Ok(session);
            }
        };

        let submission = loaded.into_submission(api_key, &args.contract_id, mode);
        let archive_documents = args.archive.as_ref().map(|_| submission.all_documents());

        let view = self
            .handler
            .handle(&mut session, SessionAction::Review(submission))
            .await;
        self.present(&view, args.report.as_deref());

        if let (Some(archive), Some(documents)) = (&args.archive, archive_documents) {
            let view = self
                .handler
                .handle(
                    &mut session,
                    SessionAction::Package {
                        contract_id: args.contract_id.clone(),
                        documents,
                    },
                )
                .await;
            self.present(&view, Some(archive));
        }

        println!("{}", render_ledger(session.ledger()));
        Ok(session)
    }

    /// Run every manifest step against one session
    pub async fn run_batch(&self, args: &BatchArgs, api_key: &str) -> Result<ReviewSession> {
        let manifest_dir = args
            .manifest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let manifest = Manifest::load(&args.manifest)?.resolve_against(&manifest_dir);
        let out_dir = args.out_dir.clone().unwrap_or_else(|| manifest_dir.clone());
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

        let mut session = ReviewSession::new();
        println!(
            "✓ Session {} started: {} step(s)",
            session.id(),
            manifest.steps.len()
        );

        for (index, step) in manifest.steps.into_iter().enumerate() {
            println!("\n── Step {} ──", index + 1);
            match step {
                ManifestStep::Review {
                    contract_id,
                    mode,
                    paths,
                    report,
                } => {
                    println!("{}", mode_banner(mode));
                    let loaded = match self.load_documents(&paths).await {
                        Ok(loaded) => loaded,
                        Err(e) => {
                            warn!("Step {}: failed to load documents: {:#}", index + 1, e);
                            println!("✗ [InputError] {:#}", e);
                            continue;
                        }
                    };
                    let submission = loaded.into_submission(api_key, &contract_id, mode);
                    let view = self
                        .handler
                        .handle(&mut session, SessionAction::Review(submission))
                        .await;
                    let report = report.map(|p| output_path(Some(&out_dir), &p));
                    self.present(&view, report.as_deref());
                }
                ManifestStep::NextDocument => {
                    println!("{}", render_ledger(session.ledger()));
                    let view = self
                        .handler
                        .handle(&mut session, SessionAction::NextDocument)
                        .await;
                    self.present(&view, None);
                }
                ManifestStep::Package {
                    contract_id,
                    paths,
                    archive,
                } => {
                    let loaded = match self.load_documents(&paths).await {
                        Ok(loaded) => loaded,
                        Err(e) => {
                            warn!("Step {}: failed to load documents: {:#}", index + 1, e);
                            println!("✗ [InputError] {:#}", e);
                            continue;
                        }
                    };
                    let view = self
                        .handler
                        .handle(
                            &mut session,
                            SessionAction::Package {
                                contract_id,
                                documents: loaded.into_all(),
                            },
                        )
                        .await;
                    let target = match (&view, archive) {
                        (_, Some(archive)) => Some(output_path(Some(&out_dir), &archive)),
                        (ViewModel::Archive(package), None) => {
                            Some(out_dir.join(&package.file_name))
                        }
                        _ => None,
                    };
                    self.present(&view, target.as_deref());
                }
            }
        }

        println!("\n{}", render_ledger(session.ledger()));
        Ok(session)
    }

    /// 表示し、必要ならレポートやアーカイブをファイルに書き出す
    ///
    /// 書き出しの失敗は表示だけしてバッチを続ける
    fn present(&self, view: &ViewModel, target: Option<&Path>) {
        print!("{}", render_view(view));

        let Some(target) = target else {
            return;
        };

        if let Err(e) = write_output(view, target) {
            warn!("Failed to save output: {:#}", e);
            println!("✗ [OutputError] {:#}", e);
        }
    }
}

fn write_output(view: &ViewModel, target: &Path) -> Result<()> {
    match view {
        ViewModel::Report(outcome) => {
            fs::write(target, render_report_document(outcome))
                .with_context(|| format!("Failed to write report: {}", target.display()))?;
            println!("✓ Report saved to {}", target.display());
        }
        ViewModel::Archive(package) => {
            fs::write(target, &package.bytes)
                .with_context(|| format!("Failed to write archive: {}", target.display()))?;
            println!("✓ Archive saved to {}", target.display());
        }
        _ => {}
    }

    Ok(())
}
