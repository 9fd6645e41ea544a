mod randomized_tests;

use crate::{Range, RangeSet};

pub(crate) fn set(ranges: &[(i32, i32)]) -> RangeSet<i32> {
    ranges.iter().map(|&(from, to)| Range::new(from, to)).collect()
}
