//! Batch Manifest
//!
//! セッション操作を順に並べた JSON マニフェスト
//!
//! ```json
//! {
//!   "steps": [
//!     { "action": "review", "contract_id": "PO-1", "mode": "lc",
//!       "contract": "po.pdf", "requirement": "lc.pdf", "documents": ["inv.pdf"],
//!       "report": "PO-1.md" },
//!     { "action": "package", "contract_id": "PO-1", "contract": "po.pdf",
//!       "documents": ["inv.pdf"], "archive": "PO-1.zip" },
//!     { "action": "next_document" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::transaction_mode::TransactionMode;

#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub steps: Vec<ManifestStep>,
}

/// 1 ステップ分の書類パス（相対パスはマニフェストのディレクトリ基準）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentPaths {
    #[serde(default)]
    pub contract: Option<PathBuf>,
    #[serde(default)]
    pub requirement: Option<PathBuf>,
    #[serde(default)]
    pub documents: Vec<PathBuf>,
    #[serde(default)]
    pub docs_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ManifestStep {
    Review {
        contract_id: String,
        mode: TransactionMode,
        #[serde(flatten)]
        paths: DocumentPaths,
        #[serde(default)]
        report: Option<PathBuf>,
    },
    NextDocument,
    Package {
        contract_id: String,
        #[serde(flatten)]
        paths: DocumentPaths,
        #[serde(default)]
        archive: Option<PathBuf>,
    },
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let manifest: Manifest = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
        Ok(manifest)
    }

    /// 相対パスを `base` 基準の絶対パスに直す
    pub fn resolve_against(mut self, base: &Path) -> Self {
        for step in &mut self.steps {
            match step {
                ManifestStep::Review { paths, .. } | ManifestStep::Package { paths, .. } => {
                    paths.resolve_against(base);
                }
                ManifestStep::NextDocument => {}
            }
        }
        self
    }
}

impl DocumentPaths {
    fn resolve_against(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(p) = self.contract.as_mut() {
            join(p);
        }
        if let Some(p) = self.requirement.as_mut() {
            join(p);
        }
        self.documents.iter_mut().for_each(join);
        if let Some(dir) = self.docs_dir.as_mut() {
            let expanded = shellexpand::tilde(dir.as_str()).to_string();
            let expanded_path = PathBuf::from(&expanded);
            *dir = if expanded_path.is_relative() {
                base.join(expanded_path).to_string_lossy().to_string()
            } else {
                expanded
            };
        }
    }
}
