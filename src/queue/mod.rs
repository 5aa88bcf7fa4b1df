// src/queue/mod.rs
//! Growable circular FIFO queue for strings.

mod config;
mod string_queue;

pub use config::{DEFAULT_CAPACITY, MAX_QUEUE_CAPACITY, QueueConfig};
pub use string_queue::StringQueue;
