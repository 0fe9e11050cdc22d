//! Tradecheck - Trade Document Cross-Check
//!
//! 貿易書類を LLM で突き合わせ審査する CLI

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use tradecheck::adapter::config::Config;
use tradecheck::driver::{Args, ReviewWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (defaults when the file is absent)
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = ReviewWorkflow::new(&config);

    workflow.execute(args).await
}
