// src/input/lines.rs
// =============================================================================
// This module reads URLs from a plain text file, one URL per line.
//
// The file is read lazily: we hand back a Stream, and each line is only read
// when the consumer asks for the next URL. That way a huge input file never
// has to sit in memory all at once.
//
// No validation happens here. A line is trimmed and, if it isn't blank, it is
// passed on as-is. Bad URLs are discovered later when reqwest tries them.
//
// Rust concepts:
// - Streams: The async version of an Iterator
// - try_unfold: Builds a stream from a piece of state and a step function
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, Stream};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

type FileLines = Lines<BufReader<File>>;

// Opens `path` and returns a lazy stream of the URLs it contains
//
// Parameters:
//   path: the text file to read (one URL per line)
//
// Returns: a Stream yielding Ok(url) for every non-blank line, or Err if a
//          read fails halfway through the file
//
// Example file:
//   https://example.com
//
//   https://www.rust-lang.org
//
// Yields: "https://example.com", "https://www.rust-lang.org"
pub async fn read_urls(path: &Path) -> Result<impl Stream<Item = Result<String>>> {
    let file = File::open(path)
        .await
        .with_context(|| format!("could not open URL list {}", path.display()))?;

    let lines = BufReader::new(file).lines();

    // try_unfold calls next_url with the current state until it returns Ok(None)
    Ok(stream::try_unfold(lines, next_url))
}

// Reads forward to the next non-blank line
//
// Returns the URL together with the reader state so the stream can continue,
// or None at end of file.
async fn next_url(mut lines: FileLines) -> Result<Option<(String, FileLines)>> {
    while let Some(line) = lines.next_line().await.context("could not read URL list")? {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        return Ok(Some((url.to_string(), lines)));
    }

    Ok(None)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return a Stream instead of a Vec<String>?
//    - A Vec would read the whole file before the first fetch could start
//    - A Stream hands out URLs one at a time as they are read
//    - The pipeline spawns a fetch task the moment each URL arrives
//
// 2. What does impl Stream<Item = Result<String>> mean?
//    - "Some type that implements Stream" - we don't have to name it
//    - The real type is a long generic name built by try_unfold
//
// 3. Why pass `lines` back out of next_url?
//    - try_unfold owns the state between steps
//    - Each step takes the state by value and gives it back with the item
//    - This is how the stream remembers where it is in the file
// -----------------------------------------------------------------------------
