//! Thread-safe containers shared between worker threads.
//!
//! [`BlockingQueue`] is an unbounded FIFO work queue whose consumers block while it is empty
//! and which can be stopped to let workers wind down. [`Array`], [`Map`] and [`Set`] are
//! lock-guarded containers for state that several threads read and update.

pub mod collections;
pub mod concurrent;

pub use collections::{Array, Map, Set};
pub use concurrent::{BlockingQueue, Dequeue, StoppedError};

pub mod prelude {
  pub use super::{Array, BlockingQueue, Map, Set, StoppedError};
}
