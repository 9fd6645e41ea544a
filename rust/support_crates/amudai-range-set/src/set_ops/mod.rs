//! Set-level algorithms over [`RangeSet`](crate::RangeSet).
//!
//! All producing operations (`pack`, `union`, `difference`, `intersection`) return a
//! *packed* set: members are sorted, valid, and separated by strict gaps
//! (`next.from > prev.to`). Packedness is a post-condition of these functions, not an
//! invariant of the container, so a caller may always insert into the result and
//! un-pack it again.
//!
//! The inputs are expected to be individually valid; `pack` discards invalid members,
//! which is how every other operation treats them too.

mod merge;
mod pack;

pub mod difference;
pub mod intersection;
pub mod union;

pub use difference::{difference, difference_with_range, range_difference};
pub use intersection::{intersection, range_intersection};
pub use pack::{is_packed, is_valid, pack};
pub use union::{union, union_with_range};

pub(crate) use pack::pack_sorted;
