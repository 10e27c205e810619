//! numseq - Lazy Number Sequences and Validating Doubling
//!
//! This library provides the std-facing entry points over `numseq-core`,
//! instrumented with `tracing`.
//!
//! ## Architecture
//!
//! numseq follows the same definition/implementation split as its core:
//!
//! - **numseq-core**: `no_std` number abstraction, sequence producer and
//!   doubler, silent and allocation-free unless `alloc` is enabled
//! - **numseq**: std entry points with tracing spans and `std::error::Error`
//!
//! ## Quick Start
//!
//! ```rust
//! use numseq::{double_or_reject, produce};
//!
//! let squares: Vec<u32> = produce(4u32).map(|i| i * i).collect();
//! assert_eq!(squares, [0, 1, 4, 9]);
//!
//! assert_eq!(double_or_reject(21), Ok(42));
//! assert_eq!(double_or_reject(-3).unwrap_err().to_string(), "negative");
//! ```
//!
//! ## Features
//!
//! - **Generic numbers**: every primitive integer and float type
//! - **Runtime-typed input**: [`Value`] with lazy type mismatch reporting
//! - **serde**: `Value` and error (de)serialization (default)

// Re-export core abstractions
pub use numseq_core::{
    // Core traits
    Number, NumberKind,
    // Sequence types
    Produce, Value, ValueSequence,
    // Error handling
    ErrorCategory, NumseqError, Result,
};

pub mod ops;

pub use ops::{double_or_reject, double_value, produce, produce_value};
