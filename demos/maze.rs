//! Terminal driver: generate a maze, solve it, print both.
//!
//! Usage: `maze [WIDTH HEIGHT [SEED]]` — defaults to a 12×8 maze from OS
//! entropy; pass a seed to reproduce a layout.

use rand::SeedableRng;
use rand::rngs::StdRng;
use warren_core::{Direction, Maze, Point};
use warren_gen::MazeGen;
use warren_paths::{MazePather, Pather, Wayfinder};

/// Route steps shown in the guidance preview.
const LOOKAHEAD: usize = 6;

/// Walks straight through walls: any in-bounds 4-neighbour is fair game.
/// Kept around to show what the route looks like without consulting walls.
struct OpenGridPather {
    size: Point,
}

impl Pather for OpenGridPather {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for dir in Direction::ALL {
            let n = p.step(dir);
            if n.x >= 0 && n.x < self.size.x && n.y >= 0 && n.y < self.size.y {
                buf.push(n);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let width: i32 = match args.next() {
        Some(s) => s.parse()?,
        None => 12,
    };
    let height: i32 = match args.next() {
        Some(s) => s.parse()?,
        None => 8,
    };
    let seed: Option<u64> = args.next().map(|s| s.parse()).transpose()?;

    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let mut carver = MazeGen::with_maze(Maze::new(width, height)?, rng);
    carver.backtracker();
    carver.carve_exit();
    let maze = carver.maze;

    let mut finder = Wayfinder::new(maze.width(), maze.height());
    let Some(route) = finder.route(&MazePather::new(&maze), maze.start(), maze.exit())? else {
        println!("{maze}");
        println!("no route from entrance to exit");
        return Ok(());
    };

    let overlay = maze.render_with(|p| {
        if p == maze.start() {
            " S ".to_string()
        } else if p == maze.exit() {
            " E ".to_string()
        } else if route.contains(&p) {
            " . ".to_string()
        } else {
            "   ".to_string()
        }
    });
    print!("{overlay}");
    println!("route: {} steps", route.len() - 1);

    // Look-ahead window: the bounded route prefix a guidance arrow would
    // point along. Pure presentation; the route above stays complete.
    let preview: Vec<String> = route
        .iter()
        .skip(1)
        .take(LOOKAHEAD)
        .map(|p| p.to_string())
        .collect();
    println!("next {} cells: {}", preview.len(), preview.join(" -> "));

    let through_walls = finder
        .route(
            &OpenGridPather { size: maze.size() },
            maze.start(),
            maze.exit(),
        )?
        .map_or(0, |r| r.len() - 1);
    println!("straight-line grid route (walls ignored): {through_walls} steps");

    Ok(())
}
