//! Abstract interfaces for numseq
//!
//! Traits are pure interfaces plus their primitive implementations.

pub mod number;

pub use number::{Number, NumberKind};
