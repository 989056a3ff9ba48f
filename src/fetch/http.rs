// src/fetch/http.rs
// =============================================================================
// This module fetches a single URL and pushes the page onto the queue.
//
// Key functionality:
// - Builds one shared reqwest Client (connection pooling for every fetch)
// - Makes a plain HTTP GET and reads the whole body as text
// - Sends the result to the sink through the bounded queue
//
// What we deliberately do NOT do:
// - No timeout and no retry
// - No status code check: a 404 page is still a page, its body gets queued
// - No recovery: a transport error is returned and ends the whole run
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E> and `?`: For passing errors up to the caller
// =============================================================================

use crate::pipeline::{Page, PageSender};
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tracing::debug;

// Creates the HTTP client shared by every fetch task
//
// Client is cheap to clone (it's an Arc internally), so each task gets a clone
// and they all share the same connection pool.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("could not build HTTP client")?;

    Ok(client)
}

// Fetches `url` and enqueues its body
//
// Parameters:
//   client: shared reqwest client (owned clone)
//   url: the URL to GET, used exactly as it appeared in the input file
//   queue: sending half of the page queue
//
// Returns: Ok(()) once the page is in the queue, or the first error hit
pub async fn fetch_and_enqueue(client: Client, url: String, queue: PageSender) -> Result<()> {
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .with_context(|| format!("could not read body of {}", url))?;

    debug!(url = %url, status = status.as_u16(), bytes = body.len(), "fetched page");

    // send() waits while the queue is full; it only fails once the sink is gone
    queue
        .send(Page { url, body })
        .await
        .map_err(|err| anyhow!("queue closed before {} was processed", err.0.url))?;

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is env!("CARGO_PKG_NAME")?
//    - A macro that reads an environment variable at COMPILE time
//    - Cargo sets CARGO_PKG_NAME / CARGO_PKG_VERSION from Cargo.toml
//    - concat! glues them into one &'static str like "href-harvest/0.1.0"
//
// 2. What is .with_context()?
//    - Comes from anyhow's Context trait
//    - Wraps the original error with a message explaining what we were doing
//    - The closure only runs if there actually was an error
//
// 3. Why does send() return an error containing our Page?
//    - If nobody is listening anymore, the value couldn't be delivered
//    - tokio hands it back to us (err.0) instead of silently dropping it
// -----------------------------------------------------------------------------
