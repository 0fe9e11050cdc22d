//! # Data Transfer Objects

pub mod review_config;
pub mod review_submission;
