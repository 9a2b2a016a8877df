use std::collections::VecDeque;
use std::fmt;

use warren_core::Point;

/// A position with an associated cost, returned from distance-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Caller-owned scratch state for route searches on a `width` × `height`
/// grid rectangle anchored at the origin.
///
/// All query buffers (distances, predecessors, queue, results) live here and
/// are reused across calls, so repeated queries allocate nothing after the
/// first use. A `Wayfinder` belongs to one caller at a time (`&mut self`);
/// give each concurrent consumer its own.
pub struct Wayfinder {
    width: i32,
    height: i32,
    pub(crate) dist: Vec<i32>,
    pub(crate) prev: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Wayfinder {
    /// Create scratch state for the given grid size. Negative dimensions are
    /// clamped to zero, leaving a finder on which every endpoint is out of
    /// bounds.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let len = (w * h) as usize;
        Self {
            width: w,
            height: h,
            dist: vec![UNREACHABLE; len],
            prev: vec![usize::MAX; len],
            queue: VecDeque::new(),
            results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid size this finder searches, as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }
}

/// Input-contract violations of route queries, distinct from the normal
/// "no path" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// An endpoint lies outside the search grid.
    OutOfBounds(Point),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "route endpoint {p} is outside the search grid"),
        }
    }
}

impl std::error::Error for RouteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let wf = Wayfinder::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let p = Point::new(x, y);
                let i = wf.idx(p).unwrap();
                assert_eq!(wf.point(i), p);
            }
        }
        assert_eq!(wf.idx(Point::new(4, 0)), None);
        assert_eq!(wf.idx(Point::new(0, 3)), None);
        assert_eq!(wf.idx(Point::new(-1, 1)), None);
    }

    #[test]
    fn negative_size_clamps_to_empty() {
        let wf = Wayfinder::new(-2, 5);
        assert_eq!(wf.size(), Point::new(0, 5));
        assert_eq!(wf.idx(Point::ZERO), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
