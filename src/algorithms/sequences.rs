//! The O(n²) algorithm: brute-force maximum subarray sum.

use crate::types::IntSequence;


/// O(n²): for every start index, extends a running sum up to every end index, keeping the greatest.\
/// The maximum starts at 0 (the empty subarray), so a sequence with only negative numbers yields 0.
pub fn find_max_seq_sum(array: &IntSequence) -> i64 {
    let mut max_sum = 0i64;
    for start in 0..array.len() {
        let mut curr_sum = 0i64;
        for &val in &array[start..] {
            curr_sum += val as i64;
            if curr_sum > max_sum {
                max_sum = curr_sum;
            }
        }
    }
    max_sum
}
