use warren_core::{Direction, Maze, Point};

use crate::traits::Pather;

/// The reference walkability oracle: wraps a [`Maze`] and permits a step
/// between adjacent cells exactly when the shared wall is open.
///
/// Boundary openings (a carved exit) lead outside the grid and are never
/// reported as neighbours — route searches only consider in-grid cells.
pub struct MazePather<'a> {
    maze: &'a Maze,
}

impl<'a> MazePather<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }
}

impl Pather for MazePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for dir in Direction::ALL {
            if self.maze.is_open(p, dir) {
                if let Some(n) = self.maze.neighbor(p, dir) {
                    buf.push(n);
                }
            }
        }
    }
}
