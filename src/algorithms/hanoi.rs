//! The O(2^n) algorithm: the Tower of Hanoi -- a problem of size `n` is solved by solving two problems of size `n-1`.

/// O(2^n): moves `disks` disks from `from_peg` to `to_peg`, using `spare_peg`, calling `on_move(from, to)`
/// for each single disk moved -- 2^disks - 1 times in total
pub fn solve_hanoi(disks: u32, from_peg: u8, to_peg: u8, spare_peg: u8, on_move: &mut impl FnMut(u8, u8)) {
    if disks < 1 {
        return;
    }
    if disks > 1 {
        solve_hanoi(disks - 1, from_peg, spare_peg, to_peg, on_move);
    }
    on_move(from_peg, to_peg);
    if disks > 1 {
        solve_hanoi(disks - 1, spare_peg, to_peg, from_peg, on_move);
    }
}
