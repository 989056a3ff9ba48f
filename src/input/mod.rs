// src/input/mod.rs
// =============================================================================
// This module reads the list of URLs we are going to fetch.
//
// Submodules:
// - lines: Turns a text file into a lazy stream of URLs, one per line
// =============================================================================

mod lines;

pub use lines::read_urls;
