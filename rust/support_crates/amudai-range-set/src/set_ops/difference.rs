use crate::{Combined, Range, RangeSet};

use super::pack;

/// Returns `left` with every position covered by `right` removed.
///
/// Degenerate cases short-circuit: an empty `left` yields an empty set, and an empty
/// `right` yields a copy of `left` as-is (not re-packed). Otherwise both operands are
/// packed and the result is packed.
///
/// The algorithm walks the packed left and right ranges with two cursors, carrying a
/// "remainder" of the current left range. Each right range is subtracted from the
/// remainder with [`Range::checked_sub`]; when a right range lies strictly inside the
/// remainder, the piece before it is emitted and the piece after it becomes the new
/// remainder. The right cursor advances while the current left range extends past the
/// current right range; otherwise the left cursor advances and the remainder is
/// emitted.
///
/// Empty members of the packed `right` remove nothing and are ignored.
pub fn difference<T: Copy + Ord>(left: &RangeSet<T>, right: &RangeSet<T>) -> RangeSet<T> {
    if left.is_empty() {
        log::trace!("difference: empty left operand");
        return RangeSet::new();
    }
    if right.is_empty() {
        log::trace!("difference: empty right operand");
        return left.clone();
    }

    let ls: Vec<Range<T>> = pack(left).into_iter().collect();
    let rs: Vec<Range<T>> = pack(right)
        .into_iter()
        .filter(Range::is_non_empty)
        .collect();

    let mut result = RangeSet::new();
    let Some(&first) = ls.first() else {
        return result;
    };

    let (mut li, mut ri) = (0, 0);
    let mut rem = first;
    while li < ls.len() {
        if let Some(&cut) = rs.get(ri) {
            match rem.checked_sub(cut) {
                Combined::Single(r) => rem = r,
                Combined::Unrepresentable => {
                    let before = Range::new(rem.from, cut.from);
                    if before.is_non_empty() {
                        result.insert(before);
                    }
                    rem.from = cut.to;
                }
            }
            if ls[li].to > cut.to {
                ri += 1;
                continue;
            }
        }
        li += 1;
        if let Some(&next) = ls.get(li) {
            if rem.is_non_empty() {
                result.insert(rem);
            }
            rem = next;
        }
    }
    if rem.is_non_empty() {
        result.insert(rem);
    }
    result
}

/// Returns `set` with the positions covered by `range` removed.
pub fn difference_with_range<T: Copy + Ord>(set: &RangeSet<T>, range: Range<T>) -> RangeSet<T> {
    difference(set, &RangeSet::from(range))
}

/// Returns the parts of `range` not covered by `set`.
pub fn range_difference<T: Copy + Ord>(range: Range<T>, set: &RangeSet<T>) -> RangeSet<T> {
    difference(&RangeSet::from(range), set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ranges: &[(i32, i32)]) -> RangeSet<i32> {
        ranges.iter().map(|&(from, to)| Range::new(from, to)).collect()
    }

    fn s07() -> RangeSet<i32> {
        set(&[(1, 5), (7, 9), (7, 12), (12, 15), (17, 19)])
    }

    #[test]
    fn test_difference() {
        let s01 = set(&[]);
        let s02 = set(&[(1, 5)]);
        let s03 = set(&[(1, 5), (7, 9)]);
        let s04 = set(&[(1, 5), (5, 9)]);
        let s05 = set(&[(1, 5), (3, 9)]);
        let s08 = set(&[(1, 5), (7, 15), (17, 19)]);
        let s09 = set(&[(16, 17), (19, 20), (27, 29)]);
        let s14 = set(&[(-1, 8), (15, 18)]);

        assert_eq!(difference(&s07(), &s05), set(&[(9, 15), (17, 19)]));
        assert_eq!(difference(&s03, &s01), s03);
        assert_eq!(difference(&s03, &s02), set(&[(7, 9)]));
        assert_eq!(difference(&s04, &s03), set(&[(5, 7)]));
        assert_eq!(difference(&s07(), &s09), s08);
        assert_eq!(difference(&s07(), &s08), s01);
        assert_eq!(difference(&s07(), &s14), set(&[(8, 15), (18, 19)]));
        assert!(difference(&s01, &s03).is_empty());
    }

    #[test]
    fn test_empty_right_returns_left_unpacked() {
        assert_eq!(difference(&s07(), &set(&[])), s07());
    }

    #[test]
    fn test_range_difference() {
        assert_eq!(
            range_difference(Range::new(0, 35), &s07()),
            set(&[(0, 1), (5, 7), (15, 17), (19, 35)])
        );
        let s10 = set(&[(1, 5), (7, 15), (16, 20), (27, 29)]);
        assert_eq!(
            range_difference(Range::new(1, 28), &s10),
            set(&[(5, 7), (15, 16), (20, 27)])
        );
        assert!(range_difference(Range::new(2, 4), &s10).is_empty());
    }

    #[test]
    fn test_difference_with_range() {
        assert_eq!(
            difference_with_range(&s07(), Range::new(18, 20)),
            set(&[(1, 5), (7, 15), (17, 18)])
        );
        assert_eq!(
            difference_with_range(&s07(), Range::new(3, 8)),
            set(&[(1, 3), (8, 15), (17, 19)])
        );
        assert_eq!(
            difference_with_range(&s07(), Range::new(10, 11)),
            set(&[(1, 5), (7, 10), (11, 15), (17, 19)])
        );
    }

    #[test]
    fn test_empty_subtrahend_members_remove_nothing() {
        let s03 = set(&[(1, 5), (7, 9)]);
        assert_eq!(difference(&s03, &set(&[(3, 3)])), s03);
        assert_eq!(difference_with_range(&s03, Range::new(8, 8)), s03);
    }

    #[test]
    fn test_invalid_members() {
        // A left operand of only invalid ranges packs to nothing.
        assert!(difference(&set(&[(5, 1)]), &set(&[(2, 3)])).is_empty());
        // An invalid subtrahend removes nothing.
        let s03 = set(&[(1, 5), (7, 9)]);
        assert_eq!(difference(&s03, &set(&[(8, 2)])), s03);
    }
}
