//! Grid route search for warren mazes.
//!
//! This crate provides unweighted shortest-path search on 2D cell grids:
//!
//! - **BFS** shortest routes between two cells ([`Wayfinder::route`])
//! - **BFS** multi-source distance maps ([`Wayfinder::distance_map`])
//!
//! Both operate through [`Wayfinder`], a caller-owned scratch structure that
//! reuses its internal buffers so repeated queries incur no allocations after
//! warm-up. Concurrent callers each own their own `Wayfinder`, which keeps
//! every query independently re-entrant.
//!
//! Walkability is decided by the [`Pather`] oracle trait, decoupling the
//! search from any particular wall representation. [`MazePather`] is the
//! reference oracle: a step between adjacent cells is legal iff the shared
//! maze wall is open.

mod bfs;
mod oracle;
mod traits;
mod wayfinder;

pub use oracle::MazePather;
pub use traits::Pather;
pub use wayfinder::{PathNode, RouteError, UNREACHABLE, Wayfinder};
