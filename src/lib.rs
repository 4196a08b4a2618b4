#![doc = include_str!("../README.md")]

pub mod algorithms;
pub mod cli;
pub mod configs;
pub mod environment;
pub mod errors;
pub mod features;
pub mod runners;
pub mod types;


// exported symbols
pub use {
    environment::{AlgorithmEntry, AlgorithmResult, Environment, Workload},
    errors::{SetupError, UsageError},
    features::OUTPUT,
    runners::standard::show_algo_results,
    types::{BigOClass, IntSequence, SearchTask},
};
