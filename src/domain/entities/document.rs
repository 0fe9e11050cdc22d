//! # UploadedDocument Entity
//!
//! アップロードされた書類のドメインエンティティ

use serde::{Deserialize, Serialize};

/// 書類の役割
///
/// 審査の中でどの立場の書類かを表す
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    /// 販売契約書（PO）
    Contract,
    /// 信用状または取立指図書
    Requirement,
    /// 輸出書類（インボイス、パッキングリスト、船荷証券など）
    ExportDocument,
}

impl DocumentRole {
    /// アーカイブのファイル名に埋め込むラベル
    pub fn archive_label(&self) -> &'static str {
        match self {
            Self::Contract => "合同",
            Self::Requirement => "要求",
            Self::ExportDocument => "单据",
        }
    }

    /// 画面表示用の名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Contract => "销售合同 (PO)",
            Self::Requirement => "客户/银行要求",
            Self::ExportDocument => "出口全套单据",
        }
    }
}

/// ファイル形式（拡張子から判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Word,
    Unsupported,
}

impl DocumentFormat {
    /// ファイル名の拡張子から形式を判定する（大文字小文字は区別しない）
    pub fn from_filename(filename: &str) -> Self {
        match extension_of(filename).map(|ext| ext.to_ascii_lowercase()) {
            Some(ext) if ext == "pdf" => Self::Pdf,
            Some(ext) if ext == "docx" => Self::Word,
            _ => Self::Unsupported,
        }
    }
}

/// ファイル名から拡張子（ドットなし、元の大文字小文字のまま）を取り出す
fn extension_of(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// アップロードされた書類
///
/// 内容はバイト列として保持するため、抽出とアーカイブで何度読んでも先頭から読める
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    filename: String,
    content: Vec<u8>,
    role: DocumentRole,
}

impl UploadedDocument {
    /// 新しい書類を作成
    ///
    /// # Arguments
    ///
    /// * `filename` - 元のファイル名
    /// * `content` - ファイル内容
    /// * `role` - 書類の役割
    pub fn new(filename: impl Into<String>, content: Vec<u8>, role: DocumentRole) -> Self {
        Self {
            filename: filename.into(),
            content,
            role,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn role(&self) -> DocumentRole {
        self.role
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_filename(&self.filename)
    }

    /// 元の拡張子（例: `"pdf"`, `"DOCX"`）
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.filename)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
