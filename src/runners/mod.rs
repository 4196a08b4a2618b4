//! Contains executors of the algorithms, timing them and reporting the results through
//! [crate::features::OUTPUT] (or any other sink)

pub mod common;
pub mod standard;
