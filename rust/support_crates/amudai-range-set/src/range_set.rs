//! An ordered, deduplicated collection of ranges.

use std::{
    collections::{BTreeSet, btree_set},
    fmt::Debug,
    ops::{Add, AddAssign, BitAnd, Sub, SubAssign},
};

use crate::{
    Range,
    error::{Error, Result},
    set_ops,
};

/// An ordered set of [`Range`] values.
///
/// Members are kept sorted and unique under the lexicographic `(from, to)` order of
/// `Range`; two members are the same element iff neither is less than the other.
///
/// A `RangeSet` may hold arbitrary ranges: overlapping, touching, empty or even
/// invalid ones. The algebra ([`pack`](Self::pack), [`union`](Self::union),
/// [`difference`](Self::difference), [`intersection`](Self::intersection) and the
/// `+`, `-`, `&` operators) always produces a *packed* set, but the container does
/// not maintain packedness on its own: [`insert`](Self::insert) may un-pack it.
///
/// Bound types must be totally ordered; for floating-point bounds use a wrapper such
/// as `ordered_float::OrderedFloat`.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de> + Ord"
        )
    )
)]
pub struct RangeSet<T>(BTreeSet<Range<T>>);

impl<T> RangeSet<T> {
    /// Creates an empty set.
    pub const fn new() -> Self {
        RangeSet(BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, Range<T>> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Ord> RangeSet<T> {
    /// Adds `range` to the set, returning `false` if an equal member was present.
    pub fn insert(&mut self, range: Range<T>) -> bool {
        self.0.insert(range)
    }

    pub fn remove(&mut self, range: &Range<T>) -> bool {
        self.0.remove(range)
    }

    /// Element membership: checks that `range` itself is a member.
    ///
    /// Use [`contains_value`](Self::contains_value) for point coverage.
    pub fn contains(&self, range: &Range<T>) -> bool {
        self.0.contains(range)
    }

    pub fn first(&self) -> Option<&Range<T>> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Range<T>> {
        self.0.last()
    }
}

impl<T: Copy + Ord> RangeSet<T> {
    /// Checks whether some member contains `value`.
    pub fn contains_value(&self, value: T) -> bool {
        self.iter().any(|r| r.contains(value))
    }

    /// Returns the smallest range covering every valid member, or `None` if the set
    /// has no valid member.
    pub fn bounds(&self) -> Option<Range<T>> {
        let mut valid = self.iter().filter(|r| r.is_valid());
        let first = *valid.next()?;
        let to = valid.map(|r| r.to).fold(first.to, std::cmp::max);
        Some(Range::new(first.from, to))
    }

    /// See [`set_ops::is_packed`].
    pub fn is_packed(&self) -> bool {
        set_ops::is_packed(self)
    }

    /// See [`set_ops::is_valid`].
    pub fn is_valid(&self) -> bool {
        set_ops::is_valid(self)
    }

    /// See [`set_ops::pack`].
    pub fn pack(&self) -> RangeSet<T> {
        set_ops::pack(self)
    }

    /// See [`set_ops::union`].
    pub fn union(&self, other: &RangeSet<T>) -> RangeSet<T> {
        set_ops::union(self, other)
    }

    /// See [`set_ops::difference`].
    pub fn difference(&self, other: &RangeSet<T>) -> RangeSet<T> {
        set_ops::difference(self, other)
    }

    /// See [`set_ops::intersection`].
    pub fn intersection(&self, other: &RangeSet<T>) -> RangeSet<T> {
        set_ops::intersection(self, other)
    }
}

impl<T> RangeSet<T>
where
    T: Copy + Ord + Default + Add<Output = T> + Sub<Output = T>,
{
    /// Total measure of the positions covered by the set.
    ///
    /// Overlaps are counted once; invalid members are ignored.
    pub fn total_len(&self) -> T {
        self.pack()
            .iter()
            .fold(T::default(), |acc, r| acc + (r.to - r.from))
    }
}

impl<T: Copy + Ord + Debug> RangeSet<T> {
    /// Fails with [`ErrorKind::InvalidMember`](crate::ErrorKind::InvalidMember) on the
    /// first invalid member.
    pub fn ensure_valid(&self) -> Result<()> {
        match self.iter().enumerate().find(|(_, r)| !r.is_valid()) {
            Some((index, r)) => Err(Error::invalid_member(index, r.describe())),
            None => Ok(()),
        }
    }

    /// Fails unless the set is packed, naming the first offending member.
    pub fn ensure_packed(&self) -> Result<()> {
        let mut prev: Option<&Range<T>> = None;
        for (index, r) in self.iter().enumerate() {
            if !r.is_valid() {
                return Err(Error::invalid_member(index, r.describe()));
            }
            if let Some(p) = prev
                && r.from <= p.to
            {
                return Err(Error::not_packed(
                    index,
                    format!("{} does not start after {} ends", r.describe(), p.describe()),
                ));
            }
            prev = Some(r);
        }
        Ok(())
    }
}

impl<T> Default for RangeSet<T> {
    fn default() -> Self {
        RangeSet::new()
    }
}

impl<T: Debug> Debug for RangeSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.0.iter().map(|r| &r.from..&r.to))
            .finish()
    }
}

impl<T: Ord> From<Range<T>> for RangeSet<T> {
    fn from(range: Range<T>) -> Self {
        RangeSet(BTreeSet::from([range]))
    }
}

impl<T: Ord, const N: usize> From<[Range<T>; N]> for RangeSet<T> {
    fn from(ranges: [Range<T>; N]) -> Self {
        RangeSet(BTreeSet::from(ranges))
    }
}

impl<T: Ord> From<Vec<Range<T>>> for RangeSet<T> {
    fn from(ranges: Vec<Range<T>>) -> Self {
        ranges.into_iter().collect()
    }
}

impl<T: Ord> FromIterator<Range<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        RangeSet(iter.into_iter().collect())
    }
}

impl<T: Ord> FromIterator<std::ops::Range<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = std::ops::Range<T>>>(iter: I) -> Self {
        RangeSet(iter.into_iter().map(Range::from).collect())
    }
}

impl<T: Ord> Extend<Range<T>> for RangeSet<T> {
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for RangeSet<T> {
    type Item = Range<T>;
    type IntoIter = btree_set::IntoIter<Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RangeSet<T> {
    type Item = &'a Range<T>;
    type IntoIter = btree_set::Iter<'a, Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Set union.

impl<T: Copy + Ord> Add<&RangeSet<T>> for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn add(self, rhs: &RangeSet<T>) -> RangeSet<T> {
        set_ops::union(self, rhs)
    }
}

impl<T: Copy + Ord> Add for RangeSet<T> {
    type Output = RangeSet<T>;

    fn add(self, rhs: RangeSet<T>) -> RangeSet<T> {
        set_ops::union(&self, &rhs)
    }
}

impl<T: Copy + Ord> Add<Range<T>> for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn add(self, rhs: Range<T>) -> RangeSet<T> {
        set_ops::union_with_range(self, rhs)
    }
}

impl<T: Copy + Ord> Add<Range<T>> for RangeSet<T> {
    type Output = RangeSet<T>;

    fn add(self, rhs: Range<T>) -> RangeSet<T> {
        set_ops::union_with_range(&self, rhs)
    }
}

impl<T: Copy + Ord> Add<&RangeSet<T>> for Range<T> {
    type Output = RangeSet<T>;

    fn add(self, rhs: &RangeSet<T>) -> RangeSet<T> {
        set_ops::union_with_range(rhs, self)
    }
}

impl<T: Copy + Ord> Add<RangeSet<T>> for Range<T> {
    type Output = RangeSet<T>;

    fn add(self, rhs: RangeSet<T>) -> RangeSet<T> {
        set_ops::union_with_range(&rhs, self)
    }
}

impl<T: Copy + Ord> AddAssign<&RangeSet<T>> for RangeSet<T> {
    fn add_assign(&mut self, rhs: &RangeSet<T>) {
        *self = set_ops::union(self, rhs);
    }
}

impl<T: Copy + Ord> AddAssign<Range<T>> for RangeSet<T> {
    fn add_assign(&mut self, rhs: Range<T>) {
        *self = set_ops::union_with_range(self, rhs);
    }
}

// Set difference.

impl<T: Copy + Ord> Sub<&RangeSet<T>> for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn sub(self, rhs: &RangeSet<T>) -> RangeSet<T> {
        set_ops::difference(self, rhs)
    }
}

impl<T: Copy + Ord> Sub for RangeSet<T> {
    type Output = RangeSet<T>;

    fn sub(self, rhs: RangeSet<T>) -> RangeSet<T> {
        set_ops::difference(&self, &rhs)
    }
}

impl<T: Copy + Ord> Sub<Range<T>> for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn sub(self, rhs: Range<T>) -> RangeSet<T> {
        set_ops::difference_with_range(self, rhs)
    }
}

impl<T: Copy + Ord> Sub<Range<T>> for RangeSet<T> {
    type Output = RangeSet<T>;

    fn sub(self, rhs: Range<T>) -> RangeSet<T> {
        set_ops::difference_with_range(&self, rhs)
    }
}

impl<T: Copy + Ord> Sub<&RangeSet<T>> for Range<T> {
    type Output = RangeSet<T>;

    fn sub(self, rhs: &RangeSet<T>) -> RangeSet<T> {
        set_ops::range_difference(self, rhs)
    }
}

impl<T: Copy + Ord> Sub<RangeSet<T>> for Range<T> {
    type Output = RangeSet<T>;

    fn sub(self, rhs: RangeSet<T>) -> RangeSet<T> {
        set_ops::range_difference(self, &rhs)
    }
}

impl<T: Copy + Ord> SubAssign<&RangeSet<T>> for RangeSet<T> {
    fn sub_assign(&mut self, rhs: &RangeSet<T>) {
        *self = set_ops::difference(self, rhs);
    }
}

impl<T: Copy + Ord> SubAssign<Range<T>> for RangeSet<T> {
    fn sub_assign(&mut self, rhs: Range<T>) {
        *self = set_ops::difference_with_range(self, rhs);
    }
}

// Set intersection.

impl<T: Copy + Ord> BitAnd<&RangeSet<T>> for &RangeSet<T> {
    type Output = RangeSet<T>;

    fn bitand(self, rhs: &RangeSet<T>) -> RangeSet<T> {
        set_ops::intersection(self, rhs)
    }
}

impl<T: Copy + Ord> BitAnd for RangeSet<T> {
    type Output = RangeSet<T>;

    fn bitand(self, rhs: RangeSet<T>) -> RangeSet<T> {
        set_ops::intersection(&self, &rhs)
    }
}

impl<T: Copy + Ord> BitAnd<&RangeSet<T>> for Range<T> {
    type Output = RangeSet<T>;

    fn bitand(self, rhs: &RangeSet<T>) -> RangeSet<T> {
        set_ops::range_intersection(self, rhs)
    }
}
