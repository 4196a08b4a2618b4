//! The O(n.log(n)) algorithm: sorting cards.

use crate::types::IntSequence;


/// O(n.log(n)): sorts `array` in place, in ascending order, with the classic quicksort
pub fn quick_sort(array: &mut IntSequence) {
    quick_sort_1(array.as_mut_slice());
}

/// Recurses into the smaller side of each partition and loops on the larger one,
/// so the stack depth stays within O(log(n)) even when the pivot is always an extreme (sorted or all-equal input)
fn quick_sort_1(mut vals: &mut [i32]) {
    while vals.len() > 1 {
        let pivot = partition(vals);
        let (lower, upper) = std::mem::take(&mut vals).split_at_mut(pivot);
        let upper = &mut upper[1..];
        if lower.len() < upper.len() {
            quick_sort_1(lower);
            vals = upper;
        } else {
            quick_sort_1(upper);
            vals = lower;
        }
    }
}

/// Uses the first element as the pivot: items `<= pivot` are gathered to the left, items `> pivot` to the right
/// and the pivot is placed in between. Returns the pivot's final position.\
/// `vals` must have at least 2 elements.
fn partition(vals: &mut [i32]) -> usize {
    let high = vals.len() - 1;
    let pivot = vals[0];
    let mut left = 0;
    let mut right = high;

    while left < right {
        while left <= high && vals[left] <= pivot {
            left += 1;
        }
        // stops at 0 the latest, where the pivot is
        while vals[right] > pivot {
            right -= 1;
        }
        if left < right {
            vals.swap(left, right);
        }
    }
    vals[0] = vals[right];
    vals[right] = pivot;

    right
}
