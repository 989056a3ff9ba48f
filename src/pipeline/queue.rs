// src/pipeline/queue.rs
// =============================================================================
// The shared queue between the fetch tasks (producers) and the sink (consumer).
//
// It is a bounded tokio mpsc channel:
// - Many senders: every fetch task holds a clone of the sender
// - One receiver: only the sink ever reads from it
// - Bounded: when the sink falls behind, send().await suspends the producer
//   until there is room again
//
// Items come out in the order they went in (FIFO), which is the order the
// fetches *finished*, not the order the URLs appeared in the input file.
// =============================================================================

use std::num::NonZeroUsize;
use tokio::sync::mpsc;

/// One fetched page waiting to be processed by the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The URL the body was fetched from (used for logging)
    pub url: String,
    /// The raw response body as text
    pub body: String,
}

pub type PageSender = mpsc::Sender<Page>;
pub type PageReceiver = mpsc::Receiver<Page>;

/// Default number of pages that may wait in the queue
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

// Creates the queue
//
// NonZeroUsize because tokio panics on a zero-capacity channel; the type
// keeps that case out at the CLI boundary.
pub fn page_queue(capacity: NonZeroUsize) -> (PageSender, PageReceiver) {
    mpsc::channel(capacity.get())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is mpsc?
//    - "Multi-producer, single-consumer"
//    - Senders can be cloned freely; there is exactly one Receiver
//    - That shape matches "many fetches, one sink"
//
// 2. What is a type alias?
//    - `pub type PageSender = mpsc::Sender<Page>;` is just a shorter name
//    - It doesn't create a new type; both names are interchangeable
//
// 3. Why is DEFAULT_CAPACITY written with a match?
//    - NonZeroUsize::new returns an Option
//    - Matching on it in a const is checked while compiling, so a zero
//      default would never build
// -----------------------------------------------------------------------------
