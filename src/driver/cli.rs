//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::entities::transaction_mode::TransactionMode;

/// 貿易書類をAIで突き合わせ審査するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "tradecheck")]
#[command(about = "Cross-check trade documents against the sales contract with an LLM", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = "./tradecheck.json")]
    pub config: String,

    /// DeepSeek API key
    #[arg(long, global = true, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Review one set of documents
    Review(ReviewArgs),
    /// Run a JSON manifest of session actions in order
    Batch(BatchArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReviewArgs {
    /// Contract number used in the ledger and archive names
    #[arg(long)]
    pub contract_id: String,

    /// Payment method
    #[arg(long, value_enum)]
    pub mode: ModeArg,

    /// Sales contract (PDF or DOCX)
    #[arg(long)]
    pub contract: PathBuf,

    /// Letter of credit or collection instruction
    #[arg(long)]
    pub requirement: Option<PathBuf>,

    /// Export document (repeatable)
    #[arg(long = "doc")]
    pub docs: Vec<PathBuf>,

    /// Directory scanned for additional export documents
    #[arg(long)]
    pub docs_dir: Option<String>,

    /// Write the markdown report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Write the renamed ZIP archive to this file
    #[arg(long)]
    pub archive: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct BatchArgs {
    /// Manifest file path
    pub manifest: PathBuf,

    /// Directory for reports and archives written by the manifest
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Letter of credit
    Lc,
    /// Telegraphic transfer
    Tt,
    /// Documentary collection (CAD/DP)
    Dc,
}

impl From<ModeArg> for TransactionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Lc => TransactionMode::LetterOfCredit,
            ModeArg::Tt => TransactionMode::TelegraphicTransfer,
            ModeArg::Dc => TransactionMode::DocumentaryCollection,
        }
    }
}
