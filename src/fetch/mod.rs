// src/fetch/mod.rs
// =============================================================================
// This module downloads pages and hands them to the shared queue.
//
// Submodules:
// - http: Builds the HTTP client and runs one GET per URL
// =============================================================================

mod http;

pub use http::{build_client, fetch_and_enqueue};
