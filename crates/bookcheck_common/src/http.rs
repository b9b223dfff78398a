// --- File: crates/bookcheck_common/src/http.rs ---
//! HTTP utilities shared by the harness crates.

pub mod client;
