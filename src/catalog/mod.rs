//! Algorithm catalog.
//!
//! Static metadata for the six sorting algorithms the engine implements:
//! a display name plus best, average and worst time complexity and
//! auxiliary space, and a short prose explanation. Pure lookup; nothing
//! here mutates.
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein (2009), "Introduction to Algorithms",
//! chapters 2 and 7.

mod lookup;
mod types;

pub use lookup::{complexity_of, list_available, AlgorithmEntry};
pub use types::{Algorithm, AlgorithmComplexity, AlgorithmExplanation};
