use crate::{Range, RangeSet};

use super::pack;

/// Returns the positions covered by both `left` and `right`, as a packed set.
///
/// Both operands are packed first. The packed ranges are then scanned with one cursor
/// per side, emitting the non-empty overlap of the current pair and advancing the side
/// whose current range ends first.
///
/// Complexity: O(len(left) + len(right)) after packing.
pub fn intersection<T: Copy + Ord>(left: &RangeSet<T>, right: &RangeSet<T>) -> RangeSet<T> {
    let a: Vec<Range<T>> = pack(left)
        .into_iter()
        .filter(Range::is_non_empty)
        .collect();
    let b: Vec<Range<T>> = pack(right)
        .into_iter()
        .filter(Range::is_non_empty)
        .collect();

    let mut result = RangeSet::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let overlap = a[i].intersect(b[j]);
        if overlap.is_non_empty() {
            result.insert(overlap);
        }
        if a[i].to < b[j].to {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}

/// Returns the parts of `range` that are covered by `set`.
pub fn range_intersection<T: Copy + Ord>(range: Range<T>, set: &RangeSet<T>) -> RangeSet<T> {
    intersection(&RangeSet::from(range), set)
}
