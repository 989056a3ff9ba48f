// src/sink/hrefs.rs
// =============================================================================
// This module pulls href values out of HTML and appends them to a file.
//
// We scan the raw text with a regular expression instead of parsing the HTML.
// The pattern is href="(.*?)":
// - (?i)  case-insensitive, so HREF="..." and Href="..." match too
// - (?m)  multiline mode
// - .*?   non-greedy, stops at the first closing quote
// - `.` never crosses a newline, so one value never spans two lines
//
// Values are written exactly as found: relative links stay relative, no
// deduplication, no URL parsing.
// =============================================================================

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

static HREF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?im)href="(.*?)""#).unwrap());

// Extracts every href="..." value from `html`, in document order
//
// Example:
//   html = r#"<a href="/docs">Docs</a> <A HREF="https://x.y">X</A>"#
//   result = ["/docs", "https://x.y"]
pub fn extract_hrefs(html: &str) -> Vec<&str> {
    HREF_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

// Appends each value as its own line to the file at `path`
//
// The file is created if needed, opened in append mode and closed again when
// this function returns. Nothing is opened when `lines` is empty.
pub async fn append_lines(path: &Path, lines: &[&str]) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }

    let mut buf = String::new();
    for line in lines {
        buf.push_str(line);
        buf.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("could not open output file {}", path.display()))?;

    file.write_all(buf.as_bytes())
        .await
        .with_context(|| format!("could not write to {}", path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("could not flush {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Lazy<Regex>?
//    - Compiling a regex is expensive compared to running it
//    - once_cell's Lazy builds the value the first time it is used
//    - Every later call reuses the same compiled Regex
//
// 2. Why does extract_hrefs return Vec<&str> and not Vec<String>?
//    - The values are slices of the page body we were given
//    - No copying is needed; the borrow checker makes sure the body
//      outlives the returned slices
//
// 3. Why build one String before writing?
//    - One write_all call per page instead of one per line
//    - The file is opened, written and closed for each page
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_attribute() {
        let html = r#"<a href="a">one</a><A HREF="B">two</A>"#;
        assert_eq!(extract_hrefs(html), vec!["a", "B"]);
    }

    #[test]
    fn test_values_kept_verbatim() {
        let html = r#"<a href="../Up?q=1#top">x</a><link href="https://cdn.example/s.css">"#;
        assert_eq!(
            extract_hrefs(html),
            vec!["../Up?q=1#top", "https://cdn.example/s.css"]
        );
    }

    #[test]
    fn test_across_lines() {
        let html = "<a\n  href=\"/first\">\n<a href=\"/second\"\n>";
        assert_eq!(extract_hrefs(html), vec!["/first", "/second"]);
    }

    #[test]
    fn test_single_quotes_and_empty() {
        // Only double-quoted values count; an empty value is still a match
        let html = r#"<a href='/single'>s</a><a href="">e</a>"#;
        assert_eq!(extract_hrefs(html), vec![""]);
    }

    #[test]
    fn test_no_links() {
        assert!(extract_hrefs("<p>nothing here</p>").is_empty());
    }

    #[tokio::test]
    async fn test_append_lines_appends() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("found.txt");

        append_lines(&out, &["a", "B"]).await.unwrap();
        append_lines(&out, &["c"]).await.unwrap();

        let written = tokio::fs::read_to_string(&out).await.unwrap();
        assert_eq!(written, "a\nB\nc\n");
    }

    #[tokio::test]
    async fn test_io_error_names_the_file() {
        // A directory can't be opened for appending
        let dir = tempfile::tempdir().unwrap();
        let err = append_lines(dir.path(), &["a"]).await.unwrap_err();
        assert!(format!("{:#}", err).contains(&dir.path().display().to_string()));
    }

    #[tokio::test]
    async fn test_append_nothing_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("found.txt");

        append_lines(&out, &[]).await.unwrap();

        assert!(!out.exists());
    }
}
