//! 統合テスト共通ヘルパー

#![allow(dead_code)]

use async_trait::async_trait;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use tradecheck::adapter::config::Config;
use tradecheck::adapter::repositories::file_document_repository::FileDocumentRepository;
use tradecheck::adapter::repositories::zip_archive_repository::ZipArchiveRepository;
use tradecheck::application::use_cases::package_archive::PackageArchiveUseCase;
use tradecheck::application::use_cases::run_review::RunReviewUseCase;
use tradecheck::domain::entities::review::ReviewPrompt;
use tradecheck::domain::errors::UpstreamError;
use tradecheck::domain::repositories::review_repository::ReviewRepository;
use tradecheck::driver::session::SessionHandler;
use tradecheck::driver::workflow::{build_extract_use_case, ReviewWorkflow};

/// 段落ごとに 1 つの `w:p` を持つ最小の DOCX を作る
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// DOCX を書き出してパスを返す
pub fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, docx_bytes(paragraphs)).unwrap();
    path
}

/// 呼び出し回数と受け取ったプロンプトを記録し、決まった応答を返す審査リポジトリ
pub struct ScriptedReviewRepository {
    calls: AtomicUsize,
    prompts: Mutex<Vec<ReviewPrompt>>,
    reply: Result<String, UpstreamError>,
}

impl ScriptedReviewRepository {
    pub fn replying(report: &str) -> Self {
        Self::new(Ok(report.to_string()))
    }

    pub fn failing(error: UpstreamError) -> Self {
        Self::new(Err(error))
    }

    fn new(reply: Result<String, UpstreamError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            reply,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<ReviewPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewRepository for ScriptedReviewRepository {
    async fn review(&self, prompt: &ReviewPrompt, _credential: &str) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone()
    }
}

/// 実際の抽出・ZIP・ファイル読み込みと、記録用の審査リポジトリで組み立てたワークフロー
pub fn workflow_with(
    review: Arc<ScriptedReviewRepository>,
) -> ReviewWorkflow<ScriptedReviewRepository, ZipArchiveRepository> {
    let config = Config::default();
    let handler = SessionHandler::new(
        RunReviewUseCase::new(review, build_extract_use_case(&config), config.review_config()),
        PackageArchiveUseCase::new(Arc::new(ZipArchiveRepository::new())),
    );
    ReviewWorkflow::with_handler(handler, Arc::new(FileDocumentRepository::new()))
}
