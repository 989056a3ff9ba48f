// src/pipeline/mod.rs
// =============================================================================
// This module wires the whole run together.
//
// How it works:
// 1. Create the bounded page queue
// 2. Spawn the sink task (the single consumer)
// 3. Read URLs one by one; spawn one fetch task per URL (no parallelism limit)
// 4. Phase one: wait for every fetch task to finish
// 5. Phase two: drop our sender so the queue closes, then wait for the sink to
//    drain whatever is still queued
//
// If any fetch fails, the remaining fetches and the sink are aborted and the
// error is returned. There is no partial-success mode.
//
// Rust concepts:
// - tokio::spawn / JoinSet: Running many tasks on the runtime
// - Channels: Moving data between tasks without shared mutable state
// - Drop: Closing the channel just by letting the last sender go
// =============================================================================

mod queue;

pub use queue::{page_queue, Page, PageReceiver, PageSender, DEFAULT_CAPACITY};

use crate::fetch::fetch_and_enqueue;
use crate::sink::{self, Sink};
use anyhow::Result;
use futures::{pin_mut, Stream, TryStreamExt};
use reqwest::Client;
use serde::Serialize;
use std::num::NonZeroUsize;
use tokio::task::JoinSet;
use tracing::debug;

/// What happened during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// URLs read from the input (one fetch attempted per URL)
    pub urls: usize,
    /// Pages the sink took off the queue and processed
    pub pages: usize,
    /// href lines appended to the output file
    pub hrefs: usize,
}

// Runs the whole fetch -> queue -> sink pipeline
//
// Parameters:
//   client: shared HTTP client
//   urls: lazy stream of URLs (see input::read_urls)
//   sink: what to do with each page
//   capacity: how many pages may wait in the queue
//
// Returns: a RunSummary once every page has been processed, or the first error
pub async fn run_pipeline<S>(
    client: Client,
    urls: S,
    sink: Sink,
    capacity: NonZeroUsize,
) -> Result<RunSummary>
where
    S: Stream<Item = Result<String>>,
{
    let (tx, rx) = page_queue(capacity);

    // Start the consumer first so producers can make progress as soon as the
    // queue fills up
    let sink_task = tokio::spawn(sink::drain(rx, sink, tokio::io::stdout()));

    let mut producers = JoinSet::new();
    let mut summary = RunSummary::default();

    let produced = async {
        pin_mut!(urls);
        while let Some(url) = urls.try_next().await? {
            debug!(url = %url, "queued fetch");
            summary.urls += 1;
            producers.spawn(fetch_and_enqueue(client.clone(), url, tx.clone()));
        }

        debug!(urls = summary.urls, "all fetches started");

        // Phase one: every producer must finish. `??` surfaces both a panicked
        // task (JoinError) and a failed fetch.
        while let Some(joined) = producers.join_next().await {
            joined??;
        }

        Ok::<_, anyhow::Error>(())
    }
    .await;

    if let Err(err) = produced {
        producers.abort_all();
        // A sink that died first (say the output file is unwritable) closes
        // the queue under the producers; report its error, not theirs.
        // abort() leaves an already-finished task's result in place.
        sink_task.abort();
        if let Ok(Err(sink_err)) = sink_task.await {
            return Err(sink_err);
        }
        return Err(err);
    }

    // Phase two: with our sender gone the queue closes once it is empty, and
    // the sink returns after processing the last page
    drop(tx);
    let stats = sink_task.await??;

    summary.pages = stats.pages;
    summary.hrefs = stats.hrefs;

    debug!(pages = summary.pages, hrefs = summary.hrefs, "queue drained");

    Ok(summary)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not cancel the sink once the fetches are done?
//    - The sink loop ends by itself when recv() returns None
//    - recv() returns None only after every sender is dropped AND the queue
//      is empty
//    - So "drop the sender, then await the sink" is a drain and a shutdown
//      in one step
//
// 2. Why clone `tx` for every task?
//    - Each fetch task needs its own sender to push its page
//    - The channel stays open as long as at least one sender exists
//    - When a task finishes, its clone is dropped automatically
//
// 3. What is pin_mut!?
//    - Streams built from async code may not be safe to move once polled
//    - pin_mut! pins the stream on the stack so we can call try_next() on it
//
// 4. What does `joined??` do?
//    - join_next() gives Result<Result<()>, JoinError>
//    - The first ? handles the task itself failing (a panic)
//    - The second ? handles fetch_and_enqueue returning an error
// -----------------------------------------------------------------------------
