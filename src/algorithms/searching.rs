//! The O(1), O(log(n)) & O(n) algorithms: looking at the first element, jumping through a sorted haystack
//! and scanning it item by item.

use crate::{
    configs::EMPTY_SENTINEL,
    types::{IntSequence, SearchTask},
};


/// O(1): always completes in the same time, regardless of the number of items.\
/// Returns the first element or [EMPTY_SENTINEL] for an empty sequence.
pub fn get_first(array: &IntSequence) -> i32 {
    array.first().copied().unwrap_or(EMPTY_SENTINEL)
}

/// O(log(n)): advances through the sorted haystack by jumps that are halved until they reach 0,
/// never stepping over an element greater than the needle -- then checks if it landed on it.
pub fn binary_jump_search(search: &SearchTask) -> bool {
    let haystack = search.haystack;
    let len = haystack.len();
    if len == 0 {
        return false;
    }
    let mut jump = len / 2;
    let mut pos = 0;
    while jump > 0 {
        while pos + jump < len && haystack[pos + jump] <= search.needle {
            pos += jump;
        }
        jump /= 2;
    }
    haystack[pos] == search.needle
}

/// O(n): walks through every item until the needle is found
pub fn linear_search(search: &SearchTask) -> bool {
    for &item in search.haystack.iter() {
        if item == search.needle {
            return true;
        }
    }
    false
}


#[cfg(test)]
mod tests {

    //! Unit tests for [searching](super) module

    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn sorted_random(len: usize, seed: u64) -> IntSequence {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut vals: Vec<i32> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
        vals.sort_unstable();
        IntSequence::from(vals)
    }

    #[test]
    fn first_element() {
        assert_eq!(get_first(&IntSequence::from(vec![7, 3, 5])), 7);
        assert_eq!(get_first(&IntSequence::from(vec![-9])), -9);
        assert_eq!(get_first(&IntSequence::from(vec![])), EMPTY_SENTINEL);
    }

    #[test]
    fn every_present_needle_is_found() {
        for (len, seed) in [(1, 1), (2, 2), (3, 3), (17, 4), (1000, 5), (1024, 6)] {
            let haystack = sorted_random(len, seed);
            for &needle in haystack.iter() {
                let search = SearchTask { needle, haystack: &haystack };
                assert!(binary_jump_search(&search), "binary jump search didn't find {needle} among {len} items");
                assert!(linear_search(&search),      "linear search didn't find {needle} among {len} items");
            }
        }
    }

    #[test]
    fn absent_needles_are_not_found() {
        let haystack = sorted_random(500, 7);
        let min = haystack[0];
        let max = haystack[haystack.len()-1];
        for needle in [min - 1, max + 1, i32::MIN, i32::MAX] {
            let search = SearchTask { needle, haystack: &haystack };
            assert!(!binary_jump_search(&search), "binary jump search found the absent {needle}");
            assert!(!linear_search(&search),      "linear search found the absent {needle}");
        }
        // gaps between consecutive elements
        let haystack = IntSequence::from(vec![0, 10, 20, 30, 40]);
        for needle in [5, 15, 25, 35] {
            let search = SearchTask { needle, haystack: &haystack };
            assert!(!binary_jump_search(&search));
            assert!(!linear_search(&search));
        }
    }

    #[test]
    fn empty_haystack() {
        let haystack = IntSequence::from(vec![]);
        let search = SearchTask { needle: 0, haystack: &haystack };
        assert!(!binary_jump_search(&search));
        assert!(!linear_search(&search));
    }

    #[test]
    fn repeated_elements() {
        let haystack = IntSequence::from(vec![1, 1, 1, 2, 2, 3, 3, 3, 3]);
        for needle in [1, 2, 3] {
            assert!(binary_jump_search(&SearchTask { needle, haystack: &haystack }));
        }
        assert!(!binary_jump_search(&SearchTask { needle: 4, haystack: &haystack }));
    }
}
