#![no_std]

//! numseq Core - Number Sequence and Doubling Definitions
//!
//! This crate provides the number abstraction, the lazy sequence producer
//! and the validating doubler. Nothing here performs I/O or logging.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod doubler;
pub mod error;
pub mod sequence;
pub mod traits;
#[cfg(feature = "alloc")]
pub mod value;

pub use doubler::double_or_reject;
pub use error::*;
pub use sequence::{produce, Produce};
pub use traits::*;
#[cfg(feature = "alloc")]
pub use value::{double_value, produce_value, Value, ValueSequence};
