// src/api/mod.rs
//! Machine-readable interface used with `--json`.

pub mod json_api;
pub mod types;
