use std::cmp::max;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;
use tracing::trace;

use crate::errors::DrillsError;
use super::{validate, Endpoint, Interval};

/// Scan intervals that are already sorted by start, and fold every interval that overlaps or
/// touches the last merged interval into it.
///
/// The input must be sorted ascending by start, which is not checked.
fn merge_sorted<T, I>(sorted: I) -> Vec<Interval<T>>
where
    T: Endpoint,
    I: IntoIterator<Item=Interval<T>>,
{
    let iter = sorted.into_iter();
    let mut merged: Vec<Interval<T>> = Vec::with_capacity(iter.size_hint().0);

    for current in iter {
        match merged.last_mut() {
            Some(last) if current.start <= last.end => {
                trace!(%current, %last, "extend");
                last.end = max(last.end, current.end);
            },
            _ => merged.push(current),
        }
    }

    merged
}

/// Merge a set of closed intervals into the minimal sorted set of disjoint intervals covering the
/// same integers.
///
/// Intervals that overlap or share an endpoint are merged. The given slice is left untouched; a
/// copy is sorted instead. Malformed intervals (start after end) are not rejected and take part
/// in the merge like any other interval, see [`merge_strict`] for a validating variant.
pub fn merge<T: Endpoint>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|ival| ival.start);

    let merged = merge_sorted(sorted);
    trace!(num_input = intervals.len(), num_merged = merged.len(), "merged intervals");

    merged
}

/// Like [`merge`], but returns an error if any interval starts after it ends.
pub fn merge_strict<T: Endpoint>(intervals: &[Interval<T>]) -> Result<Vec<Interval<T>>, DrillsError> {
    validate(intervals)?;

    Ok(merge(intervals))
}

/// Merge multiple interval sets, each of which should already be sorted by start (for example
/// the output of [`merge`]).
///
/// The sets are k-way merged in start order and then folded like [`merge`], so the result equals
/// merging the concatenation of all sets.
pub fn union<T: Endpoint>(sets: &[&[Interval<T>]]) -> Vec<Interval<T>> {
    let kmerged = sets.iter()
        .map(|set| set.iter().copied())
        .kmerge_by(|a, b| a.start < b.start);

    merge_sorted(kmerged)
}

/// The output of a merge: sorted, pairwise disjoint and non-touching intervals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Copy + Serialize"))]
pub struct MergedIntervals<T>(Vec<Interval<T>>);

impl<T: Endpoint> MergedIntervals<T> {
    pub fn from_unsorted(intervals: &[Interval<T>]) -> Self {
        Self(merge(intervals))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=&Interval<T>> + '_ {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Interval<T>> {
        self.0
    }

    /// Binary search for the interval that could hold `pos`.
    pub fn contains(&self, pos: T) -> bool {
        let ix = self.0.partition_point(|ival| ival.start <= pos);

        ix > 0 && self.0[ix - 1].contains(pos)
    }

    /// Total number of integers covered.
    pub fn coverage(&self) -> u128 {
        self.0.iter().map(|ival| ival.len()).sum()
    }
}

impl<T: Endpoint> FromIterator<Interval<T>> for MergedIntervals<T> {
    fn from_iter<I: IntoIterator<Item=Interval<T>>>(iter: I) -> Self {
        let ivals: Vec<_> = iter.into_iter().collect();
        Self::from_unsorted(&ivals)
    }
}

/// Formats as `[[1 6] [8 10] [15 18]]`.
impl<T: Endpoint> Display for MergedIntervals<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(" "))
    }
}
