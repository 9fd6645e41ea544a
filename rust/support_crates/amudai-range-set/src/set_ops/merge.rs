use std::{cmp::Ordering, iter::Peekable};

/// Creates an iterator over the ordered merge of two ascending, non-duplicated
/// streams.
///
/// A value present in both inputs is yielded once, so merging the members of two
/// range sets produces exactly the members of their set-theoretic union, in order.
///
/// Complexity: O(len(a) + len(b)) comparisons; only constant additional memory.
pub(crate) fn merge<T, L, R>(a: L, b: R) -> Merge<L::IntoIter, R::IntoIter, T>
where
    T: Ord,
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
{
    Merge {
        a: a.into_iter().peekable(),
        b: b.into_iter().peekable(),
    }
}

/// Iterator adapter implementing [`merge`].
pub(crate) struct Merge<I, J, T>
where
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
{
    a: Peekable<I>,
    b: Peekable<J>,
}

impl<I, J, T> Iterator for Merge<I, J, T>
where
    I: Iterator<Item = T>,
    J: Iterator<Item = T>,
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let take_a = match (self.a.peek(), self.b.peek()) {
            (None, None) => return None,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(va), Some(vb)) => match va.cmp(vb) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal => {
                    // Drop the duplicate; yield the left one
                    self.b.next();
                    true
                }
            },
        };
        if take_a { self.a.next() } else { self.b.next() }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(x), Some(y)) => x.checked_add(y),
            _ => None,
        };
        (a_lower.max(b_lower), upper)
    }
}
