//! The O(sqrt(n)) algorithm: the "square root trick" for range sums.
//!
//! The array is split into blocks of `sqrt(len)` items and each block has its sum precomputed (in O(n), once).
//! A query then adds at most `sqrt(len)` unaligned items on each edge plus, at most, `sqrt(len)` block sums.

use crate::{
    errors::SetupError,
    types::IntSequence,
};


/// Block-sum decomposition of an [IntSequence] plus the half-open range `[from, to)` to be summed by [range_sum_query()]
#[derive(Debug)]
pub struct RangeSumIndex<'a> {
    array:      &'a IntSequence,
    block_size: usize,
    block_sums: Vec<i64>,
    from:       usize,
    to:         usize,
}
impl<'a> RangeSumIndex<'a> {

    /// Precomputes the block sums for `array`, to answer the `[from, to)` query.\
    /// Fails with [SetupError::InvalidRange] unless `from <= to <= array.len()`.
    pub fn new(array: &'a IntSequence, from: usize, to: usize) -> Result<Self, SetupError> {
        if from > to || to > array.len() {
            return Err(SetupError::InvalidRange { from, to, len: array.len() });
        }
        let block_size = ((array.len() as f64).sqrt() as usize).max(1);
        let num_blocks = array.len() / block_size + 1;
        let mut block_sums = Vec::new();
        block_sums.try_reserve_exact(num_blocks)
            .map_err(|_| SetupError::Allocation { items: num_blocks })?;
        block_sums.resize(num_blocks, 0);
        for (i, &val) in array.iter().enumerate() {
            block_sums[i / block_size] += val as i64;
        }
        Ok(Self { array, block_size, block_sums, from, to })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn block_sums(&self) -> &[i64] {
        &self.block_sums
    }

    pub fn range(&self) -> (usize, usize) {
        (self.from, self.to)
    }
}

/// O(sqrt(n)): sums the items in `[from, to)` -- unaligned items up to the first block boundary,
/// then whole blocks, then the remaining unaligned items
pub fn range_sum_query(rs: &RangeSumIndex) -> i64 {
    let vals = &rs.array[..];
    let mut sum = 0i64;
    let mut i = rs.from;
    while i < rs.to && i % rs.block_size != 0 {
        sum += vals[i] as i64;
        i += 1;
    }
    while i + rs.block_size <= rs.to {
        sum += rs.block_sums[i / rs.block_size];
        i += rs.block_size;
    }
    while i < rs.to {
        sum += vals[i] as i64;
        i += 1;
    }
    sum
}
