// src/sink/preview.rs
// =============================================================================
// This module shortens page bodies for printing.
//
// In preview mode the sink prints only the start of every page so a run over
// hundreds of URLs stays readable in a terminal.
//
// Rust concepts:
// - &str slices: Borrowing part of a string without copying it
// - char_indices: Walking a string by character, with byte positions
// =============================================================================

/// Default number of characters shown per page
pub const DEFAULT_PREVIEW_CHARS: usize = 50;

// Returns the first `max_chars` characters of `body`
//
// Counts chars, not bytes: slicing a String by bytes (&body[..50]) panics when
// byte 50 falls inside a multi-byte character.
pub fn preview(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Bytes vs characters:
//    - Rust strings are UTF-8; "é" takes 2 bytes, "日" takes 3
//    - body.len() counts bytes, not characters
//    - Slicing in the middle of a character panics
//
// 2. What does char_indices().nth(n) give us?
//    - The byte position where character number n starts
//    - Slicing up to that position keeps exactly n whole characters
//    - None means the body has n characters or fewer, so we keep all of it
// -----------------------------------------------------------------------------
