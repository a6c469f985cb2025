//! Failure taxonomy for queue operations.
//!
//! Allocation is the only runtime failure: the payload copy made on insert
//! goes through `try_reserve_exact`, so an out-of-memory condition surfaces
//! as an error instead of an abort and the queue is left untouched. An
//! invalid queue handle has no runtime representation — ownership guarantees
//! every `Queue` a caller can name is live.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("payload allocation failed")]
    Allocation(#[from] TryReserveError),
}
