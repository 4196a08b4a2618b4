//! Contains constants used throughout this crate

/// width of the left-aligned Big-O class label on each report line
pub const LABEL_WIDTH: usize = 12;

/// returned by [crate::algorithms::searching::get_first()] when there is no first element
pub const EMPTY_SENTINEL: i32 = -1;

/// identifiers for the `from`, `to` & `spare` pegs of the Tower of Hanoi
pub const PEGS: (u8, u8, u8) = (1, 2, 3);

/// The O(2^n) entry runs `min(n, MAX_HANOI_DISKS)` disks: 2^20-1 moves already take a noticeable time,
/// while 2^1000-1 would never finish
pub const MAX_HANOI_DISKS: u32 = 20;

/// Environment variable that, if set, replaces the wall-clock seed used to generate the random data
pub const SEED_ENV_VAR: &str = "BIG_O_SEED";

/// printable unit suffix for the elapsed times -- see [crate::runners::common::fmt_elapsed()]
pub const TIME_UNIT_STR: &str = "µs";
