//! DeepSeek Adapter Modules
//!
//! OpenAI 互換のチャット補完 API との統合

pub mod client;
pub mod errors;
pub mod models;
