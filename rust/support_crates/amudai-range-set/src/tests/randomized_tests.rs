use crate::{Range, RangeSet, difference, intersection, is_packed, pack, union};

const SPAN: i32 = 64;
const ROUNDS: usize = 500;

fn random_set(max_len: usize) -> RangeSet<i32> {
    let count = fastrand::usize(0..=max_len);
    (0..count)
        .map(|_| {
            let from = fastrand::i32(0..SPAN);
            let to = (from + fastrand::i32(0..12)).min(SPAN);
            Range::new(from, to)
        })
        .collect()
}

fn coverage(set: &RangeSet<i32>) -> Vec<bool> {
    (0..SPAN)
        .map(|x| set.iter().any(|r| r.contains(x)))
        .collect()
}

fn zip_coverage(a: &RangeSet<i32>, b: &RangeSet<i32>, op: impl Fn(bool, bool) -> bool) -> Vec<bool> {
    coverage(a)
        .into_iter()
        .zip(coverage(b))
        .map(|(x, y)| op(x, y))
        .collect()
}

#[test]
fn test_pack_preserves_coverage() {
    fastrand::seed(814031);
    for _ in 0..ROUNDS {
        let s = random_set(12);
        let packed = pack(&s);
        assert!(is_packed(&packed), "{s:?} -> {packed:?}");
        assert_eq!(coverage(&packed), coverage(&s), "{s:?}");
        assert_eq!(pack(&packed), packed);
    }
}

#[test]
fn test_union_matches_model() {
    fastrand::seed(5520117);
    for _ in 0..ROUNDS {
        let (a, b) = (random_set(8), random_set(8));
        let u = union(&a, &b);
        assert!(is_packed(&u), "{a:?} + {b:?} -> {u:?}");
        assert_eq!(coverage(&u), zip_coverage(&a, &b, |x, y| x || y));
    }
}

#[test]
fn test_difference_matches_model() {
    fastrand::seed(20250617);
    for _ in 0..ROUNDS {
        let (a, b) = (random_set(8), random_set(8));
        let d = difference(&a, &b);
        if !b.is_empty() {
            assert!(is_packed(&d), "{a:?} - {b:?} -> {d:?}");
        }
        assert_eq!(
            coverage(&d),
            zip_coverage(&a, &b, |x, y| x && !y),
            "{a:?} - {b:?} -> {d:?}"
        );
    }
}

#[test]
fn test_intersection_matches_model() {
    fastrand::seed(37);
    for _ in 0..ROUNDS {
        let (a, b) = (random_set(8), random_set(8));
        let i = intersection(&a, &b);
        assert!(is_packed(&i), "{a:?} & {b:?} -> {i:?}");
        assert!(i.iter().all(Range::is_non_empty));
        assert_eq!(coverage(&i), zip_coverage(&a, &b, |x, y| x && y));
    }
}

#[test]
fn test_range_difference_matches_model() {
    fastrand::seed(99);
    for _ in 0..ROUNDS {
        let from = fastrand::i32(0..SPAN);
        let range = Range::new(from, fastrand::i32(from..=SPAN));
        let s = random_set(6);
        let d = range - &s;
        let expected: Vec<bool> = (0..SPAN)
            .map(|x| range.contains(x) && !s.contains_value(x))
            .collect();
        assert_eq!(coverage(&d), expected, "{range} - {s:?} -> {d:?}");
    }
}
