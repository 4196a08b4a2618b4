//! Defines the enums & structs shared by the algorithms, the [crate::environment] and the [crate::runners].

use crate::errors::SetupError;
use rand::Rng;
use std::ops::Deref;


/// The Big-O classes this crate demonstrates, in report order -- from the fastest to the slowest.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum BigOClass {
    O1,
    OLogN,
    OSqrtN,
    ON,
    ONLogN,
    ON2,
    O2N,
    ONFactorial,
    ONN,
}
impl BigOClass {
    /// all classes, in report order
    pub const ALL: [BigOClass; 9] = [
        Self::O1, Self::OLogN, Self::OSqrtN, Self::ON, Self::ONLogN, Self::ON2, Self::O2N, Self::ONFactorial, Self::ONN,
    ];

    /// label used on the report lines
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::O1          => "O(1)",
            Self::OLogN       => "O(log(n))",
            Self::OSqrtN      => "O(sqrt(n))",
            Self::ON          => "O(n)",
            Self::ONLogN      => "O(n log(n))",
            Self::ON2         => "O(n^2)",
            Self::O2N         => "O(2^n)",
            Self::ONFactorial => "O(n!)",
            Self::ONN         => "O(n^n)",
        }
    }
}


/// Owned, fixed-length sequence of integers the algorithms operate on.\
/// The length is set at creation: elements may be rewritten in place (see [crate::algorithms::sorting::quick_sort()]),
/// but never added or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSequence {
    vals: Box<[i32]>,
}
impl IntSequence {

    /// Creates a sequence of `len` pseudo-random integers drawn from `rng`,
    /// reporting [SetupError::Allocation] instead of aborting if `len` items don't fit in memory
    pub fn random(len: usize, rng: &mut impl Rng) -> Result<Self, SetupError> {
        let mut vals = Vec::new();
        vals.try_reserve_exact(len)
            .map_err(|_| SetupError::Allocation { items: len })?;
        vals.extend((0..len).map(|_| rng.gen::<i32>()));
        Ok(Self { vals: vals.into_boxed_slice() })
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.vals
    }
}
impl Deref for IntSequence {
    type Target = [i32];
    fn deref(&self) -> &[i32] {
        &self.vals
    }
}
impl From<Vec<i32>> for IntSequence {
    fn from(vals: Vec<i32>) -> Self {
        Self { vals: vals.into_boxed_slice() }
    }
}


/// A value to find (`needle`) in a sorted `haystack`.
/// Both [crate::algorithms::searching::binary_jump_search()] & [crate::algorithms::searching::linear_search()] operate on it.
#[derive(Debug, Clone, Copy)]
pub struct SearchTask<'a> {
    pub needle:   i32,
    /// must be sorted in ascending order for the binary jump search to work
    pub haystack: &'a IntSequence,
}
