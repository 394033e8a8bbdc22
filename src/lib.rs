pub mod cache;
pub mod cli;
pub mod compare;
pub mod config;
pub mod datasets;
pub mod error;
pub mod formats;
pub mod metrics;
pub mod reporting;
pub mod tokens;
