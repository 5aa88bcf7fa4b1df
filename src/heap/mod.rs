// src/heap/mod.rs
//! Binary max-heap for integers.

mod max_heap;

pub use max_heap::MaxHeap;
