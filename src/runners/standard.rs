//! Knows how to run & time each [AlgorithmEntry] of an [crate::environment::Environment], reporting one line per entry.

use crate::{
    configs::LABEL_WIDTH,
    environment::AlgorithmEntry,
    features::DUMP_RESULTS,
    runners::common::{fmt_elapsed, run_sync_pass},
};
use tracing::debug;


/// starts the line showing an algorithm's result, when results are dumped
const RESULT_PREFIX: &str = "  --> ";

/// Shows the results of running all algorithms in their environments, in the given order
pub fn show_algo_results<'a>(entries: impl IntoIterator<Item=AlgorithmEntry<'a>>, mut output: impl FnMut(&str)) {
    for entry in entries {
        show_time_taken(entry, &mut output);
    }
}

/// Outputs the `entry`'s label, runs it once and outputs the elapsed time
/// -- or "(Not executed)" if it has no implementation.\
/// The label goes out before running, so it is visible while a slow algorithm runs.\
/// With the `dump_results` feature, the algorithm's result follows, on its own line.
pub fn show_time_taken(entry: AlgorithmEntry, output: &mut impl FnMut(&str)) {
    show_time_taken_1(entry, DUMP_RESULTS, output)
}

fn show_time_taken_1(entry: AlgorithmEntry, dump_results: bool, output: &mut impl FnMut(&str)) {
    output(&format!("{:<width$}({} items): ", entry.class.as_pretty_str(), entry.n, width = LABEL_WIDTH));
    if !entry.workload.is_executable() {
        output("(Not executed)\n");
        return;
    }
    let (elapsed, result) = run_sync_pass(|| entry.workload.run());
    debug!(class = entry.class.as_pretty_str(), n = entry.n, ?elapsed, ?result, "algorithm executed");
    output(&format!("{}\n", fmt_elapsed(elapsed)));
    if dump_results {
        if let Some(result) = result {
            output(&format!("{}{}\n", RESULT_PREFIX, result));
        }
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for [standard](super) module

    use super::*;
    use crate::{
        environment::{Environment, Workload},
        types::{BigOClass, IntSequence},
    };
    use serial_test::serial;

    fn report_lines(entries: Vec<AlgorithmEntry>) -> Vec<String> {
        let mut report = String::new();
        show_algo_results(entries, |text| report.push_str(text));
        report.lines()
            .filter(|line| !line.starts_with(RESULT_PREFIX))
            .map(str::to_string)
            .collect()
    }

    /// every line, results included, running with the given `dump_results` setting
    fn full_report(entries: Vec<AlgorithmEntry>, dump_results: bool) -> Vec<String> {
        let mut report = String::new();
        let mut output = |text: &str| report.push_str(text);
        for entry in entries {
            show_time_taken_1(entry, dump_results, &mut output);
        }
        report.lines().map(str::to_string).collect()
    }

    /// checks each executed entry is followed by exactly one result line and the not executed ones by none
    fn assert_results_follow_executed_entries(lines: &[String]) {
        let mut lines = lines.iter().peekable();
        let mut entries = 0;
        while let Some(line) = lines.next() {
            assert!(!line.starts_with(RESULT_PREFIX), "result line '{line}' doesn't follow an executed entry");
            entries += 1;
            let next_is_result = lines.peek().map_or(false, |next| next.starts_with(RESULT_PREFIX));
            if line.ends_with("(Not executed)") {
                assert!(!next_is_result, "'{line}' was not executed, so it has no result");
            } else {
                assert!(next_is_result, "'{line}' should be followed by its result");
                lines.next();
            }
        }
        assert_eq!(entries, BigOClass::ALL.len());
    }

    #[test]
    fn not_executed_entries() {
        let lines = report_lines(vec![AlgorithmEntry::new(BigOClass::ONFactorial, 1000, Workload::NotExecuted)]);
        assert_eq!(lines, ["O(n!)       (1000 items): (Not executed)"]);
    }

    #[test]
    fn executed_entries() {
        let array = IntSequence::from(vec![3, 1, 2]);
        let lines = report_lines(vec![AlgorithmEntry::new(BigOClass::O1, 3, Workload::FirstElement(&array))]);
        assert_eq!(lines.len(), 1);
        let elapsed = lines[0].strip_prefix("O(1)        (3 items): ")
            .and_then(|rest| rest.strip_suffix("µs"))
            .unwrap_or_else(|| panic!("unexpected report line '{}'", lines[0]));
        assert!(elapsed.parse::<f64>().is_ok(), "'{elapsed}' is not a single number");
    }

    #[test]
    #[serial]
    fn full_report_order() {
        let mut env = Environment::new(1000, 11).expect("fits");
        let lines = report_lines(env.entries().expect("valid setup"));
        let labels = ["O(1)", "O(log(n))", "O(sqrt(n))", "O(n)", "O(n log(n))", "O(n^2)", "O(2^n)", "O(n!)", "O(n^n)"];
        assert_eq!(lines.len(), labels.len());
        for (line, label) in lines.iter().zip(labels) {
            assert!(line.starts_with(&format!("{:<12}(", label)), "line '{line}' should be for '{label}'");
        }
        assert!(lines[7].ends_with("(Not executed)"));
        assert!(lines[8].ends_with("(Not executed)"));
        assert!(lines[..7].iter().all(|line| line.ends_with("µs")));
        assert!(lines[6].starts_with("O(2^n)      (20 items): "));
    }

    #[test]
    fn results_are_dumped_after_each_executed_entry() {
        let mut env = Environment::new(100, 5).expect("fits");
        let lines = full_report(env.entries().expect("valid setup"), true);
        assert_eq!(lines.len(), BigOClass::ALL.len() + 7);
        assert_results_follow_executed_entries(&lines);
        assert_eq!(lines[3], format!("{RESULT_PREFIX}Found needle!"));
        assert_eq!(lines[7], format!("{RESULT_PREFIX}Found needle!"));
        assert_eq!(lines[13], format!("{RESULT_PREFIX}{} moves", (1u64 << 20) - 1));
    }

    #[test]
    fn results_are_not_dumped_when_disabled() {
        let mut env = Environment::new(100, 5).expect("fits");
        let lines = full_report(env.entries().expect("valid setup"), false);
        assert_eq!(lines.len(), BigOClass::ALL.len());
        assert!(lines.iter().all(|line| !line.starts_with(RESULT_PREFIX)));
    }

    #[cfg(feature = "dump_results")]
    #[test]
    fn dump_results_feature() {
        let mut env = Environment::new(100, 9).expect("fits");
        let mut report = String::new();
        show_algo_results(env.entries().expect("valid setup"), |text| report.push_str(text));
        let lines: Vec<String> = report.lines().map(str::to_string).collect();
        assert_eq!(lines.len(), BigOClass::ALL.len() + 7);
        assert_results_follow_executed_entries(&lines);
    }

    #[cfg(not(feature = "dump_results"))]
    #[test]
    fn no_dump_results_feature() {
        let mut env = Environment::new(100, 9).expect("fits");
        let mut report = String::new();
        show_algo_results(env.entries().expect("valid setup"), |text| report.push_str(text));
        assert_eq!(report.lines().count(), BigOClass::ALL.len());
        assert!(!report.contains(RESULT_PREFIX));
    }
}
