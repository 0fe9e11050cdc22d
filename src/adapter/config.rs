//! Configuration
//!
//! JSON 設定ファイルの読み込み。全項目省略可能で、ファイルがなければ既定値を使う

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::review_config::ReviewConfig;
use crate::domain::entities::review::TruncationLimits;
use crate::domain::services::text_extraction::DEFAULT_OCR_MIN_CHARS;

fn default_api_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_contract_char_limit() -> usize {
    TruncationLimits::DEFAULT_CONTRACT
}

fn default_requirement_char_limit() -> usize {
    TruncationLimits::DEFAULT_REQUIREMENT
}

fn default_documents_char_limit() -> usize {
    TruncationLimits::DEFAULT_DOCUMENTS
}

fn default_ocr_min_chars() -> usize {
    DEFAULT_OCR_MIN_CHARS
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

fn default_ocr_dpi() -> u32 {
    200
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Chat completion API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // Prompt truncation
    #[serde(default = "default_contract_char_limit")]
    pub contract_char_limit: usize,
    #[serde(default = "default_requirement_char_limit")]
    pub requirement_char_limit: usize,
    #[serde(default = "default_documents_char_limit")]
    pub documents_char_limit: usize,

    // OCR fallback
    #[serde(default = "default_ocr_min_chars")]
    pub ocr_min_chars: usize,
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
    #[serde(default = "default_ocr_dpi")]
    pub ocr_dpi: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            contract_char_limit: default_contract_char_limit(),
            requirement_char_limit: default_requirement_char_limit(),
            documents_char_limit: default_documents_char_limit(),
            ocr_min_chars: default_ocr_min_chars(),
            ocr_language: default_ocr_language(),
            ocr_dpi: default_ocr_dpi(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// ファイルがあれば読み込み、なければ既定値を返す
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            info!("Config file not found ({}), using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn truncation_limits(&self) -> TruncationLimits {
        TruncationLimits {
            contract: self.contract_char_limit,
            requirement: self.requirement_char_limit,
            documents: self.documents_char_limit,
        }
    }

    pub fn review_config(&self) -> ReviewConfig {
        ReviewConfig::new(self.model.clone(), self.truncation_limits())
    }
}
