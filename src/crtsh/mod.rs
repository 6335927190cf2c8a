// src/crtsh/mod.rs
pub mod client;
pub mod extract;

pub use client::CrtShClient;
pub use extract::{extract_entries, HEADER_RESIDUE_CELLS};
