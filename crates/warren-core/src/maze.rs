//! The maze model: per-cell wall bitmasks over a rectangular grid.

use std::fmt;

use crate::geom::{Direction, Point};

// ---------------------------------------------------------------------------
// Walls
// ---------------------------------------------------------------------------

/// Per-cell wall bitmask. A set bit means the wall is standing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(pub u8);

impl Walls {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(1 << 0);
    pub const EAST: Self = Self(1 << 1);
    pub const SOUTH: Self = Self(1 << 2);
    pub const WEST: Self = Self(1 << 3);
    /// All four walls standing — the state of every cell before carving.
    pub const ALL: Self = Self(0b1111);

    /// The wall bit for a direction.
    #[inline]
    pub const fn of(dir: Direction) -> Self {
        match dir {
            Direction::North => Self::NORTH,
            Direction::East => Self::EAST,
            Direction::South => Self::SOUTH,
            Direction::West => Self::WEST,
        }
    }

    /// Whether this mask contains all bits of `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// This mask with the bits of `other` cleared.
    #[inline]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of standing walls.
    #[inline]
    pub const fn standing(self) -> u32 {
        self.0.count_ones()
    }
}

impl std::ops::BitOr for Walls {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Walls {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A rectangular grid of cells with per-cell wall state.
///
/// All cells start fully walled. Walls between in-grid neighbours are opened
/// in matched pairs through [`open`](Self::open), which keeps the open-wall
/// relation symmetric: `linked(a, b)` holds exactly when `linked(b, a)` does.
/// Opening a wall that faces outside the grid removes only the near side —
/// the one sanctioned asymmetry, used to carve a visible exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<Walls>,
}

impl Maze {
    /// Create a fully-walled maze. Both dimensions must be at least 1;
    /// anything else is rejected with [`MazeError::InvalidDimensions`] and no
    /// state is created.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Walls::ALL; (width * height) as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The fixed entrance cell, (0, 0).
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The far-corner exit cell, (width - 1, height - 1).
    #[inline]
    pub fn exit(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Wall state of the cell at `p`, or `None` if out of bounds.
    pub fn walls_at(&self, p: Point) -> Option<Walls> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.idx(p)])
    }

    /// Whether the cell at `p` still has its wall toward `dir`.
    /// Out-of-bounds cells report `false`.
    pub fn has_wall(&self, p: Point, dir: Direction) -> bool {
        self.walls_at(p).is_some_and(|w| w.contains(Walls::of(dir)))
    }

    /// Whether the cell at `p` has an opening toward `dir`.
    /// Out-of-bounds cells report `false`.
    pub fn is_open(&self, p: Point, dir: Direction) -> bool {
        self.walls_at(p)
            .is_some_and(|w| !w.contains(Walls::of(dir)))
    }

    /// The in-grid neighbour of `p` toward `dir`, if any.
    pub fn neighbor(&self, p: Point, dir: Direction) -> Option<Point> {
        let n = p.step(dir);
        self.contains(n).then_some(n)
    }

    /// Whether `a` and `b` are 4-adjacent in-grid cells joined by an open
    /// wall. This is the reference walkability relation for pathfinding.
    pub fn linked(&self, a: Point, b: Point) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| self.neighbor(a, dir) == Some(b) && self.is_open(a, dir))
    }

    /// Remove the wall pair between `p` and its neighbour toward `dir`.
    ///
    /// When that neighbour lies outside the grid only `p`'s side is removed
    /// (a boundary opening). Does nothing if `p` itself is out of bounds.
    pub fn open(&mut self, p: Point, dir: Direction) {
        if !self.contains(p) {
            return;
        }
        let i = self.idx(p);
        self.cells[i] = self.cells[i].without(Walls::of(dir));
        if let Some(n) = self.neighbor(p, dir) {
            let j = self.idx(n);
            self.cells[j] = self.cells[j].without(Walls::of(dir.opposite()));
        }
    }

    /// Restore every cell to fully walled.
    pub fn reset(&mut self) {
        self.cells.fill(Walls::ALL);
    }

    /// Row-major iterator over `(Point, Walls)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Walls)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &walls)| (Point::new(i as i32 % w, i as i32 / w), walls))
    }

    /// Render the maze as ASCII art, calling `body` for each cell's
    /// three-character interior (route overlays, markers, distance labels).
    pub fn render_with(&self, body: impl Fn(Point) -> String) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                out.push('+');
                let p = Point::new(x, y);
                out.push_str(if self.has_wall(p, Direction::North) {
                    "---"
                } else {
                    "   "
                });
            }
            out.push_str("+\n");
            for x in 0..self.width {
                let p = Point::new(x, y);
                out.push(if self.has_wall(p, Direction::West) {
                    '|'
                } else {
                    ' '
                });
                out.push_str(&body(p));
            }
            let last = Point::new(self.width - 1, y);
            out.push(if self.has_wall(last, Direction::East) {
                '|'
            } else {
                ' '
            });
            out.push('\n');
        }
        for x in 0..self.width {
            out.push('+');
            let p = Point::new(x, self.height - 1);
            out.push_str(if self.has_wall(p, Direction::South) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| "   ".to_string()))
    }
}

// ---------------------------------------------------------------------------
// MazeError
// ---------------------------------------------------------------------------

/// Errors from maze construction.
#[derive(Debug, Clone)]
pub enum MazeError {
    /// One or both dimensions were below 1.
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(Maze::new(0, 5).is_err());
        assert!(Maze::new(5, 0).is_err());
        assert!(Maze::new(-1, 3).is_err());
        assert!(Maze::new(1, 1).is_ok());
    }

    #[test]
    fn starts_fully_walled() {
        let m = Maze::new(3, 2).unwrap();
        for (_, walls) in m.iter() {
            assert_eq!(walls, Walls::ALL);
        }
        assert_eq!(m.iter().count(), 6);
    }

    #[test]
    fn open_removes_wall_pair() {
        let mut m = Maze::new(3, 3).unwrap();
        m.open(Point::new(1, 1), Direction::North);
        assert!(!m.has_wall(Point::new(1, 1), Direction::North));
        assert!(!m.has_wall(Point::new(1, 0), Direction::South));
        // Unrelated walls untouched.
        assert!(m.has_wall(Point::new(1, 1), Direction::East));
        assert!(m.has_wall(Point::new(0, 1), Direction::East));
    }

    #[test]
    fn open_toward_boundary_is_single_sided() {
        let mut m = Maze::new(2, 2).unwrap();
        let before = m.clone();
        m.open(Point::new(0, 0), Direction::North);
        assert!(!m.has_wall(Point::new(0, 0), Direction::North));
        // Every other cell is untouched.
        for (p, walls) in m.iter().skip(1) {
            assert_eq!(Some(walls), before.walls_at(p));
        }
    }

    #[test]
    fn open_out_of_bounds_is_a_no_op() {
        let mut m = Maze::new(2, 2).unwrap();
        let before = m.clone();
        m.open(Point::new(5, 5), Direction::North);
        m.open(Point::new(-1, 0), Direction::East);
        assert_eq!(m, before);
    }

    #[test]
    fn linked_is_symmetric_and_wall_gated() {
        let mut m = Maze::new(3, 3).unwrap();
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        assert!(!m.linked(a, b));
        m.open(a, Direction::East);
        assert!(m.linked(a, b));
        assert!(m.linked(b, a));
        // Not adjacent, not linked.
        assert!(!m.linked(a, Point::new(2, 0)));
        assert!(!m.linked(a, Point::new(1, 1)));
        assert!(!m.linked(a, a));
    }

    #[test]
    fn reset_restores_all_walls() {
        let mut m = Maze::new(4, 4).unwrap();
        m.open(Point::new(0, 0), Direction::East);
        m.open(Point::new(2, 2), Direction::South);
        m.reset();
        assert!(m.iter().all(|(_, w)| w == Walls::ALL));
    }

    #[test]
    fn start_and_exit_corners() {
        let m = Maze::new(7, 4).unwrap();
        assert_eq!(m.start(), Point::new(0, 0));
        assert_eq!(m.exit(), Point::new(6, 3));
    }

    #[test]
    fn walls_bit_operations() {
        let w = Walls::NORTH | Walls::EAST;
        assert!(w.contains(Walls::NORTH));
        assert!(!w.contains(Walls::SOUTH));
        assert_eq!(w.standing(), 2);
        assert_eq!(w.without(Walls::NORTH), Walls::EAST);
        assert_eq!(Walls::ALL.standing(), 4);
        assert!(Walls::NONE.is_empty());
        assert_eq!(Walls::of(Direction::West), Walls::WEST);
    }

    #[test]
    fn display_renders_walls_and_passages() {
        let mut m = Maze::new(2, 2).unwrap();
        m.open(Point::new(0, 0), Direction::South);
        m.open(Point::new(0, 1), Direction::East);
        m.open(Point::new(1, 1), Direction::North);
        let expected = "\
+---+---+
|   |   |
+   +   +
|       |
+---+---+
";
        assert_eq!(m.to_string(), expected);
    }

    #[test]
    fn display_shows_boundary_exit() {
        let mut m = Maze::new(1, 1).unwrap();
        m.open(Point::new(0, 0), Direction::South);
        assert_eq!(m.to_string(), "+---+\n|   |\n+   +\n");
    }
}
