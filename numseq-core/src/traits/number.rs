//! Number type constraints for numseq
//!
//! This module defines the trait that constrains what types can be used as
//! a sequence bound or as input to the doubler.

use core::fmt::Debug;

/// Broad representation class of a [`Number`] type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    /// Signed integer
    Signed,
    /// Unsigned integer
    Unsigned,
    /// Floating point
    Float,
}

impl NumberKind {
    /// Whether values of this kind are whole numbers
    pub const fn is_integer(self) -> bool {
        matches!(self, NumberKind::Signed | NumberKind::Unsigned)
    }
}

/// Trait for primitive numbers accepted by [`produce`](crate::produce) and
/// [`double_or_reject`](crate::double_or_reject)
///
/// All implementors are:
/// - Copy: passed by value without allocation
/// - PartialOrd: comparable against zero and against a counter
/// - Debug: printable in diagnostics
pub trait Number: Copy + PartialOrd + Debug {
    /// Additive identity
    const ZERO: Self;

    /// Counter step
    const ONE: Self;

    /// Get the representation class of this type
    fn kind() -> NumberKind;

    /// Advance a counter by one
    ///
    /// Returns `None` when the value cannot advance: at the type's maximum
    /// for integers, or once `+ 1` is absorbed by float rounding.
    fn checked_succ(self) -> Option<Self>;

    /// Multiply by two
    ///
    /// Returns `None` if the result overflows an integer type. Floats always
    /// succeed and may become infinite.
    fn checked_double(self) -> Option<Self>;
}

macro_rules! impl_number_int {
    ($kind:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn kind() -> NumberKind {
                    $kind
                }

                fn checked_succ(self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn checked_double(self) -> Option<Self> {
                    self.checked_mul(2)
                }
            }
        )+
    };
}

macro_rules! impl_number_float {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn kind() -> NumberKind {
                    NumberKind::Float
                }

                fn checked_succ(self) -> Option<Self> {
                    let next = self + 1.0;
                    (next > self).then_some(next)
                }

                fn checked_double(self) -> Option<Self> {
                    Some(self * 2.0)
                }
            }
        )+
    };
}

impl_number_int!(NumberKind::Signed => i8, i16, i32, i64, i128, isize);
impl_number_int!(NumberKind::Unsigned => u8, u16, u32, u64, u128, usize);
impl_number_float!(f32, f64);
