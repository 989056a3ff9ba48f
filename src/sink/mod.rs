// src/sink/mod.rs
// =============================================================================
// The sink is the single consumer at the end of the pipeline.
//
// It pulls one page at a time off the queue and does one of two things:
// - Preview: print the first few characters of the page
// - Hrefs: find every href="..." value and append them to an output file
//
// Only one sink task exists, so pages are handled strictly one after another
// and the output file never has two writers.
//
// Submodules:
// - preview: Character-safe truncation
// - hrefs: Regex extraction and appending to the output file
// =============================================================================

mod hrefs;
mod preview;

pub use hrefs::{append_lines, extract_hrefs};
pub use preview::{preview, DEFAULT_PREVIEW_CHARS};

use crate::pipeline::PageReceiver;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// What the sink does with each page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Print the first `chars` characters of every page
    Preview { chars: usize },
    /// Append every href value to the file at `output`
    Hrefs { output: PathBuf },
}

/// Counters reported by the sink once the queue is drained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkStats {
    /// Pages taken off the queue and processed
    pub pages: usize,
    /// Lines appended to the output file (always 0 in preview mode)
    pub hrefs: usize,
}

// Drains the queue until every sender is gone and nothing is left
//
// Parameters:
//   queue: the receiving half of the page queue (the sink owns it)
//   sink: which action to run for each page
//   out: where previews are printed (tokio's stdout in the real program)
//
// recv() only returns None after the last sender is dropped AND the buffer is
// empty, so when this loop ends every queued page has been processed.
pub async fn drain<W>(mut queue: PageReceiver, sink: Sink, mut out: W) -> Result<SinkStats>
where
    W: AsyncWrite + Unpin,
{
    let mut stats = SinkStats::default();

    while let Some(page) = queue.recv().await {
        match &sink {
            Sink::Preview { chars } => {
                let line = format!("{}\n", preview(&page.body, *chars));
                out.write_all(line.as_bytes())
                    .await
                    .context("could not print preview")?;
            }
            Sink::Hrefs { output } => {
                let found = extract_hrefs(&page.body);
                append_lines(output, &found).await?;
                debug!(url = %page.url, hrefs = found.len(), "harvested hrefs");
                stats.hrefs += found.len();
            }
        }
        stats.pages += 1;
    }

    out.flush().await.context("could not flush output")?;
    Ok(stats)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is drain generic over W?
//    - The real program prints to tokio's stdout
//    - Tests pass a Vec<u8> instead and read back what was "printed"
//    - Both implement tokio's AsyncWrite, so one function serves both
//
// 2. Why tokio::io::stdout() and not println!?
//    - println! blocks the thread while it writes
//    - Every fetch task shares this one thread with the sink
//    - The async version lets them keep running while output is written
//
// 3. Why `match &sink` and not `match sink`?
//    - We match once per page, inside a loop
//    - Borrowing keeps `sink` usable for the next iteration
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{page_queue, Page};
    use std::num::NonZeroUsize;

    fn page(body: &str) -> Page {
        Page {
            url: "https://example.com".to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_preview_each_page() {
        let (tx, rx) = page_queue(NonZeroUsize::new(8).unwrap());
        tx.send(page("0123456789")).await.unwrap();
        tx.send(page("abc")).await.unwrap();
        drop(tx);

        let mut printed = Vec::new();
        let stats = drain(rx, Sink::Preview { chars: 4 }, &mut printed).await.unwrap();

        assert_eq!(String::from_utf8(printed).unwrap(), "0123\nabc\n");
        assert_eq!(stats, SinkStats { pages: 2, hrefs: 0 });
    }

    #[tokio::test]
    async fn test_hrefs_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("foundurls.txt");

        let (tx, rx) = page_queue(NonZeroUsize::new(8).unwrap());
        tx.send(page(r#"<a href="a">a</a> <a HREF="B">b</a>"#)).await.unwrap();
        tx.send(page("<p>no links</p>")).await.unwrap();
        tx.send(page(r#"<a href="c">c</a>"#)).await.unwrap();
        drop(tx);

        let mut printed = Vec::new();
        let stats = drain(rx, Sink::Hrefs { output: output.clone() }, &mut printed)
            .await
            .unwrap();

        assert!(printed.is_empty());
        assert_eq!(stats, SinkStats { pages: 3, hrefs: 3 });
        let written = tokio::fs::read_to_string(&output).await.unwrap();
        assert_eq!(written, "a\nB\nc\n");
    }

    #[tokio::test]
    async fn test_drains_items_sent_before_close() {
        // Every page already in the queue is processed even though the sender
        // was dropped before the sink started.
        let (tx, rx) = page_queue(NonZeroUsize::new(16).unwrap());
        for _ in 0..10 {
            tx.send(page("x")).await.unwrap();
        }
        drop(tx);

        let stats = drain(rx, Sink::Preview { chars: 1 }, tokio::io::sink()).await.unwrap();
        assert_eq!(stats.pages, 10);
    }
}
