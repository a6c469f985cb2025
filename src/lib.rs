//! # linked-queue
//!
//! Singly-linked queue of owned string payloads.
//!
//! ## Modules
//!
//! - `queue` – `Queue`: double-ended insertion, head removal with bounded
//!   byte extraction, in-place reversal, stable merge sort
//! - `list` – `List`: minimal integer chain (append, find, remove, pairwise
//!   swap, shuffle, two reversal strategies) built on the same
//!   owning-cursor pattern
//! - `error` – failure taxonomy for fallible operations
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use linked_queue::Queue;
//!
//! let mut q = Queue::new();
//! q.insert_head("b")?;
//! q.insert_head("a")?;
//! q.insert_tail("c")?;
//! q.sort();
//! assert_eq!(q.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
//! # Ok::<(), linked_queue::QueueError>(())
//! ```
//!
//! ---
//!
//! Designed as an exercise in ownership discipline over a mutable linked
//! structure: every link is an owning slot, every mutation rewrites a slot.

pub mod error;
pub mod list;
pub mod queue;
mod sort;

pub use error::QueueError;
pub use list::List;
pub use queue::Queue;
