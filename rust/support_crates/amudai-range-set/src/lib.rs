//! Algebra of half-open ranges and of sets of such ranges.
//!
//! This crate models a single interval `[from, to)` as [`Range<T>`] and an ordered,
//! deduplicated collection of intervals as [`RangeSet<T>`]. On top of those it offers:
//!
//! - **Pairwise algebra**: intersection, union and difference of two ranges, with the
//!   "cannot be expressed as one interval" outcome reported through [`Combined`].
//! - **Packing**: [`pack`] merges overlapping or touching members into the canonical
//!   sorted, gap-separated form.
//! - **Set algebra**: [`union`], [`difference`] and [`intersection`] of range sets, each
//!   producing a packed result. The same operations are available as `+`, `-` and `&`
//!   on sets and on range/set pairs.
//!
//! Every operation is total: nonsensical inputs produce a value rather than an error.
//! The [`error`] module only backs the explicitly checked helpers such as
//! [`Range::try_new`] and [`RangeSet::ensure_packed`].
//!
//! # Key Types
//!
//! - [`Range`] - A single half-open interval over a `Copy + PartialOrd` bound type
//! - [`RangeSet`] - An ordered set of ranges, keyed by the lexicographic `(from, to)` order
//! - [`Combined`] - Outcome of combining two ranges into one

pub mod error;
pub mod range;
pub mod range_set;
pub mod set_ops;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind, Result};
pub use range::{Combined, Range, intersect};
pub use range_set::RangeSet;
pub use set_ops::{difference, intersection, is_packed, is_valid, pack, union};
