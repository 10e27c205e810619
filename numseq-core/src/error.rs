//! Error types for numseq operations

/// Errors that can occur during numseq operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumseqError {
    /// Input value is below zero
    Negative,
    /// Input is not a number
    TypeMismatch,
    /// Doubling does not fit the input's integer type
    Overflow,
}

/// Broad classification of a [`NumseqError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input has the right type but an unacceptable value
    Value,
    /// The input has the wrong type
    Type,
}

impl NumseqError {
    /// Get the category of this error
    pub const fn category(self) -> ErrorCategory {
        match self {
            NumseqError::Negative | NumseqError::Overflow => ErrorCategory::Value,
            NumseqError::TypeMismatch => ErrorCategory::Type,
        }
    }
}

impl core::fmt::Display for NumseqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            NumseqError::Negative => "negative",
            NumseqError::TypeMismatch => "type mismatch",
            NumseqError::Overflow => "overflow",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NumseqError {}

/// Result type for numseq operations
pub type Result<T> = core::result::Result<T, NumseqError>;
