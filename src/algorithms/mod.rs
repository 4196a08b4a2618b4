//! One textbook algorithm for each of the Big-O classes that are practical to run.\
//! O(n!) and O(n^n) have no implementation: no input size worth measuring would ever finish.

pub mod searching;
pub mod range_sum;
pub mod sorting;
pub mod sequences;
pub mod hanoi;
