//! Lazy sequence producer
//!
//! [`produce`] hands out a pull-based iterator over `0, 1, ..., n - 1`.
//! Every call builds a fresh iterator; no state is shared between them.

use core::iter::FusedIterator;

use crate::Number;

/// Iterator over the half-open range `[0, bound)`
///
/// Elements are computed one at a time as the consumer pulls them. Once the
/// counter reaches the bound the iterator keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Produce<N: Number> {
    next: Option<N>,
    bound: N,
}

impl<N: Number> Produce<N> {
    /// Create a sequence counting from zero up to `bound`, exclusive
    pub fn new(bound: N) -> Self {
        Self {
            next: Some(N::ZERO),
            bound,
        }
    }

    /// Get the exclusive upper bound of this sequence
    pub fn bound(&self) -> N {
        self.bound
    }
}

impl<N: Number> Iterator for Produce<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next?;
        // Also false for a NaN bound, which therefore yields nothing
        if current < self.bound {
            self.next = current.checked_succ();
            Some(current)
        } else {
            self.next = None;
            None
        }
    }
}

impl<N: Number> FusedIterator for Produce<N> {}

/// Produce the sequence `0, 1, ..., n - 1` lazily
///
/// A bound of zero or below gives an empty sequence. A fractional bound
/// yields every whole number strictly below it.
///
/// ```
/// use numseq_core::produce;
///
/// assert!(produce(3).eq([0, 1, 2]));
/// assert_eq!(produce(0).count(), 0);
/// assert!(produce(2.5).eq([0.0, 1.0, 2.0]));
/// ```
pub fn produce<N: Number>(n: N) -> Produce<N> {
    Produce::new(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce_basic() {
        let mut seq = produce(3u32);
        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), None);
        // Exhaustion is sticky
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_produce_empty() {
        assert_eq!(produce(0i32).next(), None);
        assert_eq!(produce(-5i64).next(), None);
        assert_eq!(produce(-0.5f64).next(), None);
        assert_eq!(produce(f64::NAN).next(), None);
    }

    #[test]
    fn test_produce_fractional_bound() {
        assert!(produce(2.5f64).eq([0.0, 1.0, 2.0]));
        assert!(produce(3.0f32).eq([0.0, 1.0, 2.0]));
        assert!(produce(0.1f64).eq([0.0]));
    }

    #[test]
    fn test_produce_type_max() {
        // Counter stops one short of the bound, never overflows
        assert_eq!(produce(u8::MAX).count(), 255);
        assert_eq!(produce(i8::MAX).last(), Some(126));
    }

    #[test]
    fn test_produce_independent_calls() {
        let mut first = produce(5i32);
        let second = produce(5i32);

        first.next();
        first.next();

        assert!(second.eq([0, 1, 2, 3, 4]));
        assert!(first.eq([2, 3, 4]));
    }

    #[test]
    fn test_clone_restarts_from_position() {
        let mut seq = produce(4usize);
        seq.next();
        let copy = seq.clone();
        assert!(seq.eq([1, 2, 3]));
        assert!(copy.eq([1, 2, 3]));
    }

    #[test]
    fn test_bound_accessor() {
        assert_eq!(produce(7i16).bound(), 7);
    }
}
