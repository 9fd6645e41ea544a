use itertools::Itertools;

use crate::{Combined, Range, RangeSet};

/// Checks that `set` is packed.
///
/// A set is packed when every member is valid and each member starts strictly after
/// the previous one ends. Overlapping or touching members (`next.from <= prev.to`)
/// are not packed. The empty set is packed.
pub fn is_packed<T: Copy + Ord>(set: &RangeSet<T>) -> bool {
    match set.first() {
        None => true,
        Some(first) if !first.is_valid() => false,
        Some(_) => set
            .iter()
            .tuple_windows()
            .all(|(cur, next)| next.from > cur.to && next.is_valid()),
    }
}

/// Checks that every member of `set` is individually valid (`to >= from`).
///
/// Packedness is not required.
pub fn is_valid<T: Copy + Ord>(set: &RangeSet<T>) -> bool {
    set.iter().all(Range::is_valid)
}

/// Canonicalizes `set` into its packed form.
///
/// Members are visited in ascending order. Invalid members are skipped. Each valid
/// member is merged into a running accumulator with the range union rule; when the
/// union is unrepresentable the accumulator is emitted and restarted at the member.
///
/// An empty input, or one holding only invalid members, packs to the empty set.
pub fn pack<T: Copy + Ord>(set: &RangeSet<T>) -> RangeSet<T> {
    pack_sorted(set.iter().copied())
}

/// Packs an ascending stream of ranges.
///
/// The stream must be sorted by the `Range` order; it may contain duplicates.
pub(crate) fn pack_sorted<T, I>(ranges: I) -> RangeSet<T>
where
    T: Copy + Ord,
    I: IntoIterator<Item = Range<T>>,
{
    let mut result = RangeSet::new();
    let mut acc: Option<Range<T>> = None;
    let mut dropped = 0usize;

    for r in ranges {
        if !r.is_valid() {
            dropped += 1;
            continue;
        }
        acc = Some(match acc {
            None => r,
            Some(cur) => match cur.checked_add(r) {
                Combined::Single(merged) => merged,
                Combined::Unrepresentable => {
                    result.insert(cur);
                    r
                }
            },
        });
    }
    if let Some(cur) = acc {
        result.insert(cur);
    }

    if dropped != 0 {
        log::trace!("pack: skipped {dropped} invalid range(s)");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ranges: &[(i32, i32)]) -> RangeSet<i32> {
        ranges.iter().map(|&(from, to)| Range::new(from, to)).collect()
    }

    #[test]
    fn test_is_packed() {
        assert!(is_packed(&set(&[])));
        assert!(is_packed(&set(&[(1, 5)])));
        assert!(is_packed(&set(&[(1, 5), (7, 9)])));
        assert!(!is_packed(&set(&[(1, 5), (5, 9)])));
        assert!(!is_packed(&set(&[(1, 5), (3, 9)])));
        assert!(!is_packed(&set(&[(1, 5), (12, 9)])));
        assert!(!is_packed(&set(&[(5, 1)])));
        assert!(!is_packed(&set(&[(5, 1), (7, 9)])));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(&set(&[])));
        assert!(is_valid(&set(&[(1, 5)])));
        assert!(is_valid(&set(&[(1, 5), (7, 9)])));
        assert!(is_valid(&set(&[(1, 5), (5, 9)])));
        assert!(is_valid(&set(&[(1, 5), (3, 9)])));
        assert!(!is_valid(&set(&[(1, 5), (12, 9)])));
    }

    #[test]
    fn test_pack() {
        for packed in [set(&[]), set(&[(1, 5)]), set(&[(1, 5), (7, 9)])] {
            assert_eq!(pack(&packed), packed);
        }
        assert_eq!(pack(&set(&[(1, 5), (5, 9)])), set(&[(1, 9)]));
        assert_eq!(pack(&set(&[(1, 5), (3, 9)])), set(&[(1, 9)]));

        let s07 = set(&[(1, 5), (7, 9), (7, 12), (12, 15), (17, 19)]);
        let s08 = set(&[(1, 5), (7, 15), (17, 19)]);
        assert_eq!(pack(&s07), s08);
        assert_eq!(pack(&s08), s08);
    }

    #[test]
    fn test_pack_skips_invalid_members() {
        assert_eq!(pack(&set(&[(1, 5), (12, 9)])), set(&[(1, 5)]));
        assert_eq!(pack(&set(&[(9, 2), (3, 4)])), set(&[(3, 4)]));
        assert!(pack(&set(&[(9, 2), (8, 1)])).is_empty());
    }

    #[test]
    fn test_pack_empty_members() {
        // A trailing empty member with a gap stays a member of its own.
        assert_eq!(pack(&set(&[(1, 5), (7, 7)])), set(&[(1, 5), (7, 7)]));
        // A leading empty member is absorbed by the next range.
        assert_eq!(pack(&set(&[(0, 0), (3, 5)])), set(&[(3, 5)]));
        // A touching empty member merges.
        assert_eq!(pack(&set(&[(1, 5), (5, 5)])), set(&[(1, 5)]));
    }

    #[test]
    fn test_pack_sorted_with_duplicates() {
        let stream = [(1, 5), (1, 5), (3, 9), (12, 13)].map(|(f, t)| Range::new(f, t));
        assert_eq!(pack_sorted(stream), set(&[(1, 9), (12, 13)]));
    }
}
