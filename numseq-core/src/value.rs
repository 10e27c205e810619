//! Dynamically typed input values
//!
//! The typed API rejects non-numeric arguments at compile time. [`Value`]
//! carries input whose type is only known at runtime, so a wrong type
//! surfaces as [`NumseqError::TypeMismatch`] at the point the value is
//! first compared or multiplied.

use alloc::string::String;
use core::iter::FusedIterator;

use crate::{double_or_reject, produce, Number, NumberKind, NumseqError, Produce, Result};

/// Runtime-typed input value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Whole number
    Int(i64),
    /// Real number
    Float(f64),
    /// Text, never numeric
    Text(String),
    /// Absent value
    Null,
}

impl Value {
    /// Get the number kind of this value, or `None` if it is not a number
    pub fn kind(&self) -> Option<NumberKind> {
        match self {
            Value::Int(_) => Some(NumberKind::Signed),
            Value::Float(_) => Some(NumberKind::Float),
            Value::Text(_) | Value::Null => None,
        }
    }

    /// Whether this value is a number
    pub fn is_number(&self) -> bool {
        self.kind().is_some()
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

#[derive(Debug, Clone)]
enum State {
    Int(Produce<i64>),
    Float { counter: Option<i64>, bound: f64 },
    Invalid,
    Exhausted,
}

/// Lazy sequence over a runtime-typed bound
///
/// Yields `Ok(0), Ok(1), ...` for a numeric bound. A non-numeric bound
/// yields a single `Err(TypeMismatch)` on the first pull and then ends.
#[derive(Debug, Clone)]
pub struct ValueSequence {
    state: State,
}

impl Iterator for ValueSequence {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Invalid) {
            self.state = State::Exhausted;
            return Some(Err(NumseqError::TypeMismatch));
        }

        match &mut self.state {
            State::Int(seq) => seq.next().map(Ok),
            State::Float { counter, bound } => {
                let current = (*counter)?;
                if (current as f64) < *bound {
                    *counter = current.checked_succ();
                    Some(Ok(current))
                } else {
                    *counter = None;
                    None
                }
            }
            State::Invalid | State::Exhausted => None,
        }
    }
}

impl FusedIterator for ValueSequence {}

/// Produce `0, 1, ..., n - 1` for a runtime-typed bound
///
/// No type check happens here; a non-numeric bound fails only when the
/// sequence is pulled.
///
/// ```
/// use numseq_core::{produce_value, NumseqError, Value};
///
/// let seq = produce_value(&Value::Float(2.5));
/// assert_eq!(seq.collect::<Result<Vec<_>, _>>(), Ok(vec![0, 1, 2]));
///
/// let mut seq = produce_value(&Value::from("three"));
/// assert_eq!(seq.next(), Some(Err(NumseqError::TypeMismatch)));
/// assert_eq!(seq.next(), None);
/// ```
pub fn produce_value(n: &Value) -> ValueSequence {
    let state = match *n {
        Value::Int(bound) => State::Int(produce(bound)),
        Value::Float(bound) => State::Float {
            counter: Some(0),
            bound,
        },
        Value::Text(_) | Value::Null => State::Invalid,
    };
    ValueSequence { state }
}

/// Double a runtime-typed value, rejecting negative numbers
///
/// The type check comes first: a non-numeric value is a
/// [`NumseqError::TypeMismatch`] regardless of its content.
pub fn double_value(x: &Value) -> Result<Value> {
    match *x {
        Value::Int(i) => double_or_reject(i).map(Value::Int),
        Value::Float(f) => double_or_reject(f).map(Value::Float),
        Value::Text(_) | Value::Null => Err(NumseqError::TypeMismatch),
    }
}
