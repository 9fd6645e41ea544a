//! A single half-open interval `[from, to)` and its pairwise algebra.

use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::error::{Error, Result};

/// A half-open interval `[from, to)`.
///
/// The bounds are public and nothing is enforced at construction: a `Range` may be
///
/// - *valid* (`to >= from`),
/// - *empty* (`to == from`, a degenerate point that is still valid), or
/// - *invalid* (`from > to`).
///
/// The invalid state is the in-band marker produced by the `+` and `-` operators when
/// their result cannot be expressed as one interval. The tagged equivalents,
/// [`Range::checked_add`] and [`Range::checked_sub`], report that outcome as
/// [`Combined::Unrepresentable`] instead.
///
/// Ranges are totally ordered lexicographically by `(from, to)`. This is the order
/// [`RangeSet`](crate::RangeSet) uses for sorting and deduplication.
///
/// Pairwise operations only require `T: Copy + PartialOrd`, so floating-point bounds
/// can be used directly. Sets of ranges additionally require `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    /// Inclusive lower bound.
    pub from: T,
    /// Exclusive upper bound.
    pub to: T,
}

/// Outcome of combining two ranges with [`Range::checked_add`] or
/// [`Range::checked_sub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combined<T> {
    /// The result is a single interval.
    Single(Range<T>),
    /// The result would consist of two disjoint pieces: either the operands of a
    /// union do not overlap or touch, or the subtrahend of a difference lies strictly
    /// inside the receiver.
    Unrepresentable,
}

impl<T> Combined<T> {
    /// Returns the single-interval result, if any.
    pub fn single(self) -> Option<Range<T>> {
        match self {
            Combined::Single(r) => Some(r),
            Combined::Unrepresentable => None,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Combined::Single(_))
    }

    pub fn is_unrepresentable(&self) -> bool {
        matches!(self, Combined::Unrepresentable)
    }
}

impl<T> Range<T> {
    /// Creates the range `[from, to)` without checking the bounds.
    pub const fn new(from: T, to: T) -> Self {
        Range { from, to }
    }
}

impl<T: Copy> Range<T> {
    /// Returns the range with its bounds exchanged.
    ///
    /// Applied to a non-empty range this yields the invalid marker used by the
    /// `+` and `-` operators.
    #[inline]
    pub fn swapped(self) -> Self {
        Range::new(self.to, self.from)
    }
}

impl<T: Copy + PartialOrd> Range<T> {
    /// `to >= from`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.to >= self.from
    }

    /// `to == from`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }

    /// `to > from`.
    #[inline]
    pub fn is_non_empty(&self) -> bool {
        self.to > self.from
    }

    /// Checks that `value` lies in `[from, to)`.
    ///
    /// The upper bound is exclusive, so `value == to` is not contained.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.from && value < self.to
    }

    /// Checks that `other` is a non-empty range lying entirely within this one.
    ///
    /// An empty or invalid `other` is never contained in anything, including itself.
    #[inline]
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        other.is_non_empty() && other.from >= self.from && other.to <= self.to
    }

    /// Returns the intersection with `other`.
    ///
    /// When the ranges are disjoint the result is the empty range positioned at the
    /// clamped lower bound, so the result is never invalid.
    pub fn intersect(self, other: Range<T>) -> Range<T> {
        let mut r = self;
        r.intersect_with(other);
        r
    }

    /// In-place form of [`Range::intersect`].
    pub fn intersect_with(&mut self, other: Range<T>) {
        if self.from < other.from {
            self.from = other.from;
        }
        if self.to > other.to {
            self.to = other.to;
        }
        if self.to < self.from {
            self.to = self.from;
        }
    }

    /// Union of two ranges, if it is a single interval.
    ///
    /// - An invalid receiver yields `other` unchanged.
    /// - An invalid `other` yields the receiver unchanged.
    /// - Disjoint operands (with a gap between them) are [`Combined::Unrepresentable`],
    ///   unless the receiver is empty, in which case the result is `other`.
    /// - Overlapping or touching operands yield the covering interval.
    pub fn checked_add(self, other: Range<T>) -> Combined<T> {
        if !self.is_valid() {
            return Combined::Single(other);
        }
        if !other.is_valid() {
            return Combined::Single(self);
        }
        if self.to < other.from || self.from > other.to {
            if self.is_empty() {
                Combined::Single(other)
            } else {
                Combined::Unrepresentable
            }
        } else {
            let from = if other.from < self.from {
                other.from
            } else {
                self.from
            };
            let to = if other.to > self.to { other.to } else { self.to };
            Combined::Single(Range::new(from, to))
        }
    }

    /// Difference of two ranges, if it is a single interval.
    ///
    /// - An invalid receiver yields `other` unchanged.
    /// - An invalid `other` yields the receiver unchanged.
    /// - If `other` starts after the receiver and ends before it, removing it would
    ///   leave two pieces: [`Combined::Unrepresentable`].
    /// - An overlapping tail or head is cut off; a fully covered receiver collapses to
    ///   the empty range at its lower bound; a disjoint `other` changes nothing.
    pub fn checked_sub(self, other: Range<T>) -> Combined<T> {
        if !self.is_valid() {
            return Combined::Single(other);
        }
        if !other.is_valid() {
            return Combined::Single(self);
        }
        let mut r = self;
        if r.from < other.from {
            if r.to > other.to {
                return Combined::Unrepresentable;
            } else if r.to > other.from {
                r.to = other.from;
            }
        } else if r.to < other.to {
            r.to = r.from;
        } else if r.from < other.to {
            r.from = other.to;
        }
        Combined::Single(r)
    }
}

impl<T: Copy + PartialOrd + Sub<Output = T>> Range<T> {
    /// The measure `to - from` of a valid range, `None` for an invalid one.
    pub fn len(&self) -> Option<T> {
        self.is_valid().then(|| self.to - self.from)
    }
}

impl<T: Copy + PartialOrd + fmt::Debug> Range<T> {
    /// Creates the range `[from, to)`, rejecting `from > to`.
    pub fn try_new(from: T, to: T) -> Result<Self> {
        let r = Range::new(from, to);
        if r.is_valid() {
            Ok(r)
        } else {
            Err(Error::invalid_range(r.describe()))
        }
    }

    pub(crate) fn describe(&self) -> String {
        format!("[{:?}, {:?})", self.from, self.to)
    }
}

/// Returns the intersection of `left` and `right` without modifying either.
#[inline]
pub fn intersect<T: Copy + PartialOrd>(left: Range<T>, right: Range<T>) -> Range<T> {
    left.intersect(right)
}

impl<T: Copy + PartialOrd> Add for Range<T> {
    type Output = Range<T>;

    /// Union; an unrepresentable result is the receiver with swapped bounds.
    fn add(self, rhs: Range<T>) -> Range<T> {
        match self.checked_add(rhs) {
            Combined::Single(r) => r,
            Combined::Unrepresentable => self.swapped(),
        }
    }
}

impl<T: Copy + PartialOrd> AddAssign for Range<T> {
    fn add_assign(&mut self, rhs: Range<T>) {
        *self = *self + rhs;
    }
}

impl<T: Copy + PartialOrd> Sub for Range<T> {
    type Output = Range<T>;

    /// Difference; an unrepresentable result is the receiver with swapped bounds.
    fn sub(self, rhs: Range<T>) -> Range<T> {
        match self.checked_sub(rhs) {
            Combined::Single(r) => r,
            Combined::Unrepresentable => self.swapped(),
        }
    }
}

impl<T: Copy + PartialOrd> SubAssign for Range<T> {
    fn sub_assign(&mut self, rhs: Range<T>) {
        *self = *self - rhs;
    }
}

impl<T> From<std::ops::Range<T>> for Range<T> {
    fn from(r: std::ops::Range<T>) -> Self {
        Range::new(r.start, r.end)
    }
}

impl<T> From<Range<T>> for std::ops::Range<T> {
    fn from(r: Range<T>) -> Self {
        r.from..r.to
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}
