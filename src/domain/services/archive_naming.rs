//! # Archive Naming Service
//!
//! アーカイブ内のファイル名を決める
//!
//! 形式は `{契約番号}_{役割}_已审核.{元の拡張子}`。同じ名前が重なった場合は
//! 2 つ目以降に `_2`, `_3` ... を付けて区別する
//!
//! 契約番号に含まれるパス区切りなどファイル名に使えない文字は `_` に置き換える

use std::collections::HashSet;

use crate::domain::entities::document::UploadedDocument;

/// 審査済みを示す接尾辞
pub const REVIEWED_SUFFIX: &str = "已审核";

/// アーカイブに書き込む 1 エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry<'a> {
    pub name: String,
    pub content: &'a [u8],
}

/// 契約番号をファイル名に使える形にする
///
/// `SC/2024/001` のような番号がディレクトリとして解釈されないようにする
pub fn file_stem(contract_id: &str) -> String {
    contract_id
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// アーカイブのファイル名
pub fn archive_file_name(contract_id: &str) -> String {
    format!("{}_单证归档.zip", file_stem(contract_id))
}

/// 基本のエントリ名を作る
pub fn entry_name(contract_id: &str, role_label: &str, extension: Option<&str>) -> String {
    let stem = format!("{contract_id}_{role_label}_{REVIEWED_SUFFIX}");
    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

fn numbered_name(contract_id: &str, role_label: &str, extension: Option<&str>, n: usize) -> String {
    let stem = format!("{contract_id}_{role_label}_{REVIEWED_SUFFIX}_{n}");
    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

/// 書類群からアーカイブのエントリ一覧を作る
///
/// 空の書類は除外する。順序は入力順のまま
pub fn plan_entries<'a>(contract_id: &str, documents: &'a [UploadedDocument]) -> Vec<ArchiveEntry<'a>> {
    let stem = file_stem(contract_id);
    let contract_id = stem.as_str();
    let mut used: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for document in documents.iter().filter(|d| !d.is_empty()) {
        let label = document.role().archive_label();
        let extension = document.extension();

        let mut name = entry_name(contract_id, label, extension);
        let mut n = 2;
        while used.contains(&name) {
            name = numbered_name(contract_id, label, extension, n);
            n += 1;
        }
        used.insert(name.clone());

        entries.push(ArchiveEntry {
            name,
            content: document.content(),
        });
    }

    entries
}
