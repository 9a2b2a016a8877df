use warren_core::Point;

/// Walkability oracle — decides which cells can be stepped to from `p`.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`. The
    /// caller clears `buf` before calling.
    ///
    /// The order in which neighbours are appended is the tie-break order of
    /// the search, so implementations should keep it fixed (the reference
    /// oracle uses N, E, S, W).
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
