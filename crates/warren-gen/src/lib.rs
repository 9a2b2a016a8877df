//! Perfect-maze generation.
//!
//! [`MazeGen`] carves a [`Maze`] with randomized depth-first backtracking,
//! producing a *perfect* maze: the cells and open walls form a spanning tree,
//! so exactly one route connects any two cells. The random source is injected
//! so that a seeded generator reproduces the same layout bit for bit.

use log::debug;
use rand::Rng;
use warren_core::{Direction, Maze, Point};

/// Maze generator operating on a [`Maze`] with an injected random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator owning the given maze.
    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    /// Carve a perfect maze with randomized iterative depth-first
    /// backtracking.
    ///
    /// The maze is fully reset first, so repeated calls each produce a brand
    /// new layout and a partially-carved state is never observable. Starting
    /// from the entrance cell, the walk repeatedly picks a uniformly random
    /// unvisited neighbour of the cell on top of the stack, opens the wall
    /// pair between them and descends; a cell with no unvisited neighbours is
    /// popped. The stack empties once every cell has been visited exactly
    /// once, which is what guarantees the spanning-tree structure.
    ///
    /// Neighbours are scanned in fixed N, E, S, W order, so a given random
    /// sequence always yields the same layout. Work is O(width × height).
    ///
    /// Returns the number of wall pairs opened, always
    /// `width × height - 1`.
    pub fn backtracker(&mut self) -> usize {
        self.maze.reset();
        let size = self.maze.size();
        let cell_count = (size.x * size.y) as usize;

        let mut visited = vec![false; cell_count];
        let mut stack: Vec<Point> = Vec::with_capacity(cell_count);
        let mut frontier: Vec<(Direction, Point)> = Vec::with_capacity(4);
        let index = |p: Point| (p.y * size.x + p.x) as usize;

        let entrance = self.maze.start();
        visited[index(entrance)] = true;
        stack.push(entrance);

        let mut carved = 0usize;
        while let Some(&current) = stack.last() {
            frontier.clear();
            for dir in Direction::ALL {
                if let Some(next) = self.maze.neighbor(current, dir) {
                    if !visited[index(next)] {
                        frontier.push((dir, next));
                    }
                }
            }

            if frontier.is_empty() {
                stack.pop();
                continue;
            }

            let (dir, next) = frontier[self.rng.random_range(0..frontier.len())];
            self.maze.open(current, dir);
            visited[index(next)] = true;
            stack.push(next);
            carved += 1;
        }

        debug!(
            "carved {carved} passages in a {}x{} maze",
            size.x, size.y
        );
        carved
    }

    /// Force open the boundary-facing South wall of the exit cell so the far
    /// corner visibly leads out of the structure.
    ///
    /// This is a deliberate break of the wall-symmetry invariant: the opening
    /// faces outside the grid, so only the exit cell's side exists. Route
    /// searches are unaffected because they only ever consider in-grid cells.
    pub fn carve_exit(&mut self) {
        let exit = self.maze.exit();
        self.maze.open(exit, Direction::South);
    }
}
