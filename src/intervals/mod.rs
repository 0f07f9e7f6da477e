//! Closed integer intervals and the merging of interval sets.
//!
//! An [`Interval`] covers every integer from `start` to `end`, both inclusive. Construction is
//! lenient: `Interval::new(5, 1)` is accepted and simply covers nothing. Use
//! [`Interval::try_new`] or [`validate`] when malformed input should be rejected.
//!
//! # Example
//! ```
//! use drills::intervals::{merge, Interval};
//!
//! let ivals = vec![Interval::new(1, 3), Interval::new(2, 6), Interval::new(8, 10)];
//! let merged = merge(&ivals);
//! assert_eq!(merged, vec![Interval::new(1, 6), Interval::new(8, 10)]);
//! ```

pub mod merging;

use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

use num::traits::PrimInt;
use serde::{Deserialize, Serialize};

use crate::errors::DrillsError;

pub use merging::{merge, merge_strict, union, MergedIntervals};

mod sealed {
    pub trait Sealed {}
}

/// Integer types usable as interval endpoints.
///
/// Implemented for the primitive integers of at most 64 bits, so the distance between any two
/// endpoints fits in an `i128`.
pub trait Endpoint: PrimInt + Hash + Debug + Display + sealed::Sealed {
    fn as_i128(&self) -> i128;
}

macro_rules! impl_endpoint {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Endpoint for $t {
                #[inline(always)]
                fn as_i128(&self) -> i128 {
                    *self as i128
                }
            }
        )*
    };
}

impl_endpoint!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A closed interval `[start, end]`.
///
/// Serialized as a two element array `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[T; 2]", into = "[T; 2]")]
#[serde(bound(serialize = "T: Copy + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Interval<T> {
    pub(crate) start: T,
    pub(crate) end: T,
}

impl<T> Interval<T>
where
    T: Endpoint
{
    /// Create a new interval without checking that `start <= end`.
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Create a new interval, rejecting intervals that start after they end.
    pub fn try_new(start: T, end: T) -> Result<Self, DrillsError> {
        let ival = Self::new(start, end);
        if ival.is_well_formed() {
            Ok(ival)
        } else {
            Err(DrillsError::MalformedInterval(ival.to_string()))
        }
    }

    pub fn new_size_one(pos: T) -> Self {
        Self::new(pos, pos)
    }

    #[inline(always)]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> T {
        self.end
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Number of integers covered by this interval. Malformed intervals cover nothing.
    pub fn len(&self) -> u128 {
        if !self.is_well_formed() {
            return 0;
        }

        (self.end.as_i128() - self.start.as_i128()) as u128 + 1
    }

    pub fn is_empty(&self) -> bool {
        !self.is_well_formed()
    }

    #[inline]
    pub fn contains(&self, pos: T) -> bool {
        pos >= self.start && pos <= self.end
    }

    /// True if the two intervals share at least one endpoint position, i.e. they would be merged
    /// into one.
    #[inline]
    pub fn overlaps_or_touches(&self, other: &Self) -> bool {
        (self.start <= other.start && self.end >= other.start)
            || (self.start > other.start && other.end >= self.start)
    }
}

impl<T> From<[T; 2]> for Interval<T> {
    fn from([start, end]: [T; 2]) -> Self {
        Self { start, end }
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Self { start, end }
    }
}

impl<T> From<Interval<T>> for [T; 2] {
    fn from(ival: Interval<T>) -> Self {
        [ival.start, ival.end]
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}]", self.start, self.end)
    }
}

/// Check that every interval starts at or before its end. Returns the first offending interval
/// as an error.
pub fn validate<T: Endpoint>(intervals: &[Interval<T>]) -> Result<(), DrillsError> {
    match intervals.iter().find(|ival| !ival.is_well_formed()) {
        Some(ival) => Err(DrillsError::MalformedInterval(ival.to_string())),
        None => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, Interval, MergedIntervals};
    use crate::errors::DrillsError;

    type Ival = Interval<i64>;

    #[test]
    fn test_interval_overlaps_or_touches() {
        let ival1 = Ival::new(3, 5);
        let ival2 = Ival::new(7, 10);
        let ival3 = Ival::new(5, 9);
        let ival4 = Ival::new(6, 6);

        assert!(!ival1.overlaps_or_touches(&ival2));
        assert!(!ival2.overlaps_or_touches(&ival1));
        assert!(ival1.overlaps_or_touches(&ival3));
        assert!(ival3.overlaps_or_touches(&ival1));
        assert!(ival3.overlaps_or_touches(&ival2));
        assert!(ival2.overlaps_or_touches(&ival3));

        // Adjacent integers, but no shared position
        assert!(!ival1.overlaps_or_touches(&ival4));
    }

    #[test]
    fn test_contains_and_len() {
        let ival = Ival::new(-2, 3);
        assert!(ival.contains(-2));
        assert!(ival.contains(0));
        assert!(ival.contains(3));
        assert!(!ival.contains(4));
        assert!(!ival.contains(-3));
        assert_eq!(ival.len(), 6);

        assert_eq!(Ival::new_size_one(7).len(), 1);
        assert_eq!(Interval::<i64>::new(i64::MIN, i64::MAX).len(), u64::MAX as u128 + 1);
    }

    #[test]
    fn test_len_at_widest_endpoints() {
        assert_eq!(Interval::<u64>::new(u64::MAX - 1, u64::MAX).len(), 2);
        assert_eq!(Interval::<u64>::new(0, u64::MAX).len(), u64::MAX as u128 + 1);
        assert_eq!(Interval::<usize>::new(usize::MAX, usize::MAX).len(), 1);
        assert_eq!(Interval::<i64>::new(-1, i64::MAX).len(), i64::MAX as u128 + 2);
        assert_eq!(Interval::<u8>::new(0, u8::MAX).len(), 256);

        let merged = MergedIntervals::from_unsorted(&[
            Interval::<u64>::new(0, u64::MAX / 2),
            Interval::<u64>::new(u64::MAX / 2, u64::MAX),
        ]);
        assert_eq!(merged.coverage(), u64::MAX as u128 + 1);
    }

    #[test]
    fn test_malformed() {
        let bad = Ival::new(5, 1);
        assert!(!bad.is_well_formed());
        assert!(bad.is_empty());
        assert_eq!(bad.len(), 0);
        assert!(!bad.contains(3));

        assert!(Ival::try_new(1, 5).is_ok());
        match Ival::try_new(5, 1) {
            Err(DrillsError::MalformedInterval(s)) => assert_eq!(s, "[5 1]"),
            other => panic!("Unexpected result {:?}", other),
        }

        assert!(validate(&[Ival::new(1, 2), Ival::new(3, 3)]).is_ok());
        assert!(matches!(
            validate(&[Ival::new(1, 2), Ival::new(4, 3), Ival::new(9, 8)]),
            Err(DrillsError::MalformedInterval(ref s)) if s == "[4 3]"
        ));
    }

    #[test]
    fn test_json() {
        let ival: Ival = serde_json::from_str("[2, 6]").unwrap();
        assert_eq!(ival, Ival::new(2, 6));
        assert_eq!(serde_json::to_string(&ival).unwrap(), "[2,6]");

        assert!(serde_json::from_str::<Ival>("[2]").is_err());
        assert!(serde_json::from_str::<Ival>("{\"start\": 2, \"end\": 6}").is_err());
    }
}
