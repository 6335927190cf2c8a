// src/lib.rs
// Library interface for ct-recon
pub mod cli;
pub mod config;
pub mod crtsh;
pub mod filter;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod probe;
pub mod progress;
pub mod query;
pub mod stats;
pub mod timestamp;
pub mod types;
