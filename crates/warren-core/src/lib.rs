//! Core maze model: geometry primitives and the wall grid.
//!
//! A [`Maze`] is a rectangular grid of cells, each carrying a [`Walls`]
//! bitmask over the four cardinal [`Direction`]s. Walls between in-grid
//! neighbours are always opened in matched pairs, so the open-wall relation
//! is symmetric; the only sanctioned exception is a boundary opening (a wall
//! facing outside the grid), used to carve a visible exit.
//!
//! Generation and pathfinding live in separate crates (`warren-gen`,
//! `warren-paths`) and drive the model exclusively through this API.

pub mod geom;
pub mod maze;

pub use geom::{Direction, Point};
pub use maze::{Maze, MazeError, Walls};
