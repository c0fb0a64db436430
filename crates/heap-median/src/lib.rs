//! Array-backed binary heap with a direction flag, and a running-median
//! tracker built from two of them.

pub mod heap;
pub mod macros;
pub mod medianfinder;

pub use heap::{BinaryHeap, HeapMode};
pub use medianfinder::{MedianFinder, MedianValue};
