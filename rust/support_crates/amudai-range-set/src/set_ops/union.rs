use std::iter;

use crate::{Range, RangeSet};

use super::{merge::merge, pack_sorted};

/// Returns the packed union of two range sets.
///
/// Both (already sorted, deduplicated) inputs are merged into one ordered stream in a
/// single pass, which is then packed. Invalid members of either side contribute
/// nothing.
///
/// Complexity: O(len(left) + len(right)) range comparisons plus the cost of building
/// the output set.
pub fn union<T: Copy + Ord>(left: &RangeSet<T>, right: &RangeSet<T>) -> RangeSet<T> {
    pack_sorted(merge(left.iter().copied(), right.iter().copied()))
}

/// Returns the packed union of a range set and a single range.
///
/// Equivalent to inserting `range` into a copy of `set` and packing the result.
pub fn union_with_range<T: Copy + Ord>(set: &RangeSet<T>, range: Range<T>) -> RangeSet<T> {
    pack_sorted(merge(set.iter().copied(), iter::once(range)))
}
