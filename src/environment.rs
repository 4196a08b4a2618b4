//! The environment ties the algorithms, their Big-O classes and their data.
//!
//! [Environment] owns the (seeded) random data, built once for a given number of items; [Environment::entries()]
//! then lends it to an ordered list of [AlgorithmEntry] -- one per [BigOClass], in report order -- to be consumed,
//! exactly once, by [crate::runners::standard::show_algo_results()].

use crate::{
    algorithms::{
        hanoi::solve_hanoi,
        range_sum::{range_sum_query, RangeSumIndex},
        searching::{binary_jump_search, get_first, linear_search},
        sequences::find_max_seq_sum,
        sorting::quick_sort,
    },
    configs::{EMPTY_SENTINEL, MAX_HANOI_DISKS, PEGS},
    errors::SetupError,
    types::{BigOClass, IntSequence, SearchTask},
};
use std::{
    fmt::{Display, Formatter},
    time::Instant,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;


/// The data every algorithm operates on, generated from an explicit `seed`
#[derive(Debug)]
pub struct Environment {
    /// the number of items requested
    n:             usize,
    /// haystack for both searches
    sorted_array:  IntSequence,
    /// read by the O(1), O(sqrt(n)) & O(n²) algorithms
    array:         IntSequence,
    /// sorted, in place, by the O(n.log(n)) algorithm
    mutable_array: IntSequence,
    /// always present in `sorted_array` (unless it is empty)
    needle:        i32,
    /// half-open range-sum query bounds, `from <= to <= n`
    range:         (usize, usize),
}

impl Environment {

    /// Generates, from `seed`, all the data needed to run the algorithms for `n` items
    pub fn new(n: usize, seed: u64) -> Result<Self, SetupError> {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut sorted_array = IntSequence::random(n, &mut rng)?;
        // setup is not timed: the std sort stands in for `quick_sort()` here
        sorted_array.as_mut_slice().sort_unstable();
        let array = IntSequence::random(n, &mut rng)?;
        let mutable_array = IntSequence::random(n, &mut rng)?;

        let needle = if n > 0 { sorted_array[rng.gen_range(0..n)] } else { EMPTY_SENTINEL };
        let range = loop {
            let from = rng.gen_range(0..=n);
            let to = rng.gen_range(0..=n);
            if from <= to {
                break (from, to);
            }
        };

        debug!(n, seed, needle, ?range, elapsed = ?start.elapsed(), "environment data generated");
        Ok(Self { n, sorted_array, array, mutable_array, needle, range })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn needle(&self) -> i32 {
        self.needle
    }

    pub fn range(&self) -> (usize, usize) {
        self.range
    }

    /// Binds each algorithm to its data, in report order -- from [BigOClass::O1] to [BigOClass::ONN].\
    /// The O(n.log(n)) entry borrows the mutable array, so the returned entries must be consumed before
    /// this environment may be used again.
    pub fn entries(&mut self) -> Result<Vec<AlgorithmEntry<'_>>, SetupError> {
        let Self { n, sorted_array, array, mutable_array, needle, range } = self;
        let n = *n;
        let sorted_array = &*sorted_array;
        let array = &*array;
        let search = SearchTask { needle: *needle, haystack: sorted_array };
        let range_sum_index = RangeSumIndex::new(array, range.0, range.1)?;
        let hanoi_disks = n.min(MAX_HANOI_DISKS as usize) as u32;

        let entries = vec![
            AlgorithmEntry::new(BigOClass::O1,          array.len(),         Workload::FirstElement(array)),
            AlgorithmEntry::new(BigOClass::OLogN,       sorted_array.len(),  Workload::BinaryJumpSearch(search)),
            AlgorithmEntry::new(BigOClass::OSqrtN,      array.len(),         Workload::RangeSum(range_sum_index)),
            AlgorithmEntry::new(BigOClass::ON,          sorted_array.len(),  Workload::LinearSearch(search)),
            AlgorithmEntry::new(BigOClass::ONLogN,      mutable_array.len(), Workload::QuickSort(mutable_array)),
            AlgorithmEntry::new(BigOClass::ON2,         array.len(),         Workload::MaxSeqSum(array)),
            AlgorithmEntry::new(BigOClass::O2N,         hanoi_disks as usize, Workload::Hanoi { disks: hanoi_disks }),
            AlgorithmEntry::new(BigOClass::ONFactorial, n,                   Workload::NotExecuted),
            AlgorithmEntry::new(BigOClass::ONN,         n,                   Workload::NotExecuted),
        ];
        debug!(entries = entries.len(), not_executed = entries.iter().filter(|entry| !entry.workload.is_executable()).count(), "registry built");
        Ok(entries)
    }
}


/// An algorithm bound to its data, ready to be executed (once)
#[derive(Debug)]
pub struct AlgorithmEntry<'a> {
    /// the Big-O class `workload` illustrates
    pub class:    BigOClass,
    /// the declared number of items
    pub n:        usize,
    pub workload: Workload<'a>,
}
impl<'a> AlgorithmEntry<'a> {
    pub fn new(class: BigOClass, n: usize, workload: Workload<'a>) -> Self {
        Self { class, n, workload }
    }
}


/// Which algorithm to run & the data it operates on
#[derive(Debug)]
pub enum Workload<'a> {
    /// O(1) -- see [get_first()]
    FirstElement(&'a IntSequence),
    /// O(log(n)) -- see [binary_jump_search()]
    BinaryJumpSearch(SearchTask<'a>),
    /// O(sqrt(n)) -- see [range_sum_query()]
    RangeSum(RangeSumIndex<'a>),
    /// O(n) -- see [linear_search()]
    LinearSearch(SearchTask<'a>),
    /// O(n.log(n)) -- see [quick_sort()]. Sorts the array in place.
    QuickSort(&'a mut IntSequence),
    /// O(n²) -- see [find_max_seq_sum()]
    MaxSeqSum(&'a IntSequence),
    /// O(2^n) -- see [solve_hanoi()]
    Hanoi { disks: u32 },
    /// O(n!) & O(n^n): no input size worth reporting would ever finish, so these are reported, but never run
    NotExecuted,
}
impl Workload<'_> {

    pub fn is_executable(&self) -> bool {
        !matches!(self, Self::NotExecuted)
    }

    /// Runs the algorithm, consuming the workload -- `None` if it is [Workload::NotExecuted]
    pub fn run(self) -> Option<AlgorithmResult> {
        let result = match self {
            Self::FirstElement(array)       => AlgorithmResult::Value(get_first(array) as i64),
            Self::BinaryJumpSearch(search)  => AlgorithmResult::Found(binary_jump_search(&search)),
            Self::RangeSum(rs)              => AlgorithmResult::Value(range_sum_query(&rs)),
            Self::LinearSearch(search)      => AlgorithmResult::Found(linear_search(&search)),
            Self::QuickSort(array)          => {
                quick_sort(array);
                AlgorithmResult::Sorted(array.first().copied().unwrap_or(EMPTY_SENTINEL))
            },
            Self::MaxSeqSum(array)          => AlgorithmResult::Value(find_max_seq_sum(array)),
            Self::Hanoi { disks }           => {
                let (from_peg, to_peg, spare_peg) = PEGS;
                let mut moves = 0u64;
                solve_hanoi(disks, from_peg, to_peg, spare_peg, &mut |_from, _to| moves += 1);
                AlgorithmResult::Moves(moves)
            },
            Self::NotExecuted               => return None,
        };
        Some(result)
    }
}


/// What an algorithm computed -- inert: only shown when the `dump_results` feature is on
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AlgorithmResult {
    /// a number: the first element, a sum or a maximum
    Value(i64),
    /// if the needle was found
    Found(bool),
    /// the array got sorted -- holds its new first (smallest) element
    Sorted(i32),
    /// the number of disk moves
    Moves(u64),
}
impl Display for AlgorithmResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value)    => write!(f, "{}", value),
            Self::Found(true)     => write!(f, "Found needle!"),
            Self::Found(false)    => write!(f, "Needle not found!"),
            Self::Sorted(first)   => write!(f, "sorted, starting with {}", first),
            Self::Moves(moves)    => write!(f, "{} moves", moves),
        }
    }
}
