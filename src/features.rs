//! Contains code for handling the Cargo features used to compile this crate.
#![allow(dead_code)]

use std::io::{stdout,stderr,Write};

/// Where the report lines go
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReportSink {
    Stdout,
    Stderr,
    Null,
}
impl ReportSink {
    /// the writer function for this sink
    pub const fn writer(self) -> fn(&str) {
        match self {
            Self::Stdout => stdout_write,
            Self::Stderr => stderr_write,
            Self::Null   => null_write,
        }
    }
}

#[cfg(all(feature = "report_stdout", not(feature = "no_report")))]
/// The report sink selected by the crate's features -- `report_stdout` wins over `report_stderr` and `no_report` over both
pub const REPORT_SINK: ReportSink = ReportSink::Stdout;

#[cfg(all(feature = "report_stderr", not(feature = "report_stdout"), not(feature = "no_report")))]
/// The report sink selected by the crate's features -- `report_stdout` wins over `report_stderr` and `no_report` over both
pub const REPORT_SINK: ReportSink = ReportSink::Stderr;

#[cfg(any(feature = "no_report", not(any(feature = "report_stdout", feature = "report_stderr"))))]
/// The report sink selected by the crate's features -- `report_stdout` wins over `report_stderr` and `no_report` over both
pub const REPORT_SINK: ReportSink = ReportSink::Null;

/// Function to output an `&str` -- used to sink the report lines -- controlled by the crate's features (stdout, stderr, no_output)
pub const OUTPUT: fn(&str) = REPORT_SINK.writer();

/// If set, each executed algorithm's result is shown right after its elapsed time
/// -- otherwise results are only fed to [std::hint::black_box]
pub const DUMP_RESULTS: bool = cfg!(feature = "dump_results");


fn stdout_write(buf: &str) {
    sync_outputs();
    print!("{}", buf);
    sync_outputs();
}

fn stderr_write(buf: &str) {
    sync_outputs();
    eprint!("{}", buf);
    sync_outputs();
}

/// Flushes both stdout and stderr so the next output will be in sync with everything that came before
fn sync_outputs() {
    _ = stdout().flush();
    _ = stderr().flush();
}

fn null_write(_buf: &str) {
    // release compilations will optimize out this call for '_buf' is not used
}
