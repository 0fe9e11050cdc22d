//! DOCX Word Repository Implementation
//!
//! WordRepositoryのzip + quick-xml実装

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

use crate::domain::errors::ExtractionError;
use crate::domain::repositories::word_repository::WordRepository;

const DOCUMENT_XML: &str = "word/document.xml";

/// `word/document.xml` を読み、`w:p` ごとに 1 段落を返す
///
/// 表のセル内の段落も文書順に含まれる。テキストボックス内の段落は
/// それを含む段落より先に返す
pub struct DocxWordRepository;

impl DocxWordRepository {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(content: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = ZipArchive::new(Cursor::new(content))
            .map_err(|e| ExtractionError::Word(e.to_string()))?;
        let mut entry = archive
            .by_name(DOCUMENT_XML)
            .map_err(|e| ExtractionError::Word(format!("{}: {}", DOCUMENT_XML, e)))?;

        let mut xml = String::new();
        entry
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::Word(e.to_string()))?;
        Ok(xml)
    }

    fn parse_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
        let mut reader = Reader::from_str(xml);

        let mut paragraphs = Vec::new();
        // テキストボックス内の段落は外側の段落の途中で始まるので入れ子で持つ
        let mut open: Vec<String> = Vec::new();
        let mut in_text = false;
        // mc:Fallback は mc:Choice と同じ内容の旧形式表現なので読まない
        let mut fallback_depth = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"mc:Fallback" => fallback_depth += 1,
                    _ if fallback_depth > 0 => {}
                    b"w:p" => open.push(String::new()),
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if fallback_depth == 0 => match e.name().as_ref() {
                    b"w:p" => paragraphs.push(String::new()),
                    b"w:tab" => push_to(&mut open, "\t"),
                    b"w:br" | b"w:cr" => push_to(&mut open, "\n"),
                    _ => {}
                },
                Ok(Event::Text(t)) if in_text && fallback_depth == 0 => {
                    let text = t
                        .unescape()
                        .map_err(|e| ExtractionError::Word(e.to_string()))?;
                    push_to(&mut open, &text);
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"mc:Fallback" => fallback_depth = fallback_depth.saturating_sub(1),
                    _ if fallback_depth > 0 => {}
                    b"w:t" => in_text = false,
                    b"w:p" => {
                        if let Some(paragraph) = open.pop() {
                            paragraphs.push(paragraph);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractionError::Word(format!(
                        "XML error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}

fn push_to(open: &mut [String], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(text);
    }
}

impl WordRepository for DocxWordRepository {
    fn paragraphs(&self, content: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let xml = Self::read_document_xml(content)?;
        Self::parse_paragraphs(&xml)
    }
}

impl Default for DocxWordRepository {
    fn default() -> Self {
        Self::new()
    }
}
