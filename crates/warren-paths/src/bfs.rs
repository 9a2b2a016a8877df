use warren_core::Point;

use crate::traits::Pather;
use crate::wayfinder::{PathNode, RouteError, UNREACHABLE, Wayfinder};

impl Wayfinder {
    /// Compute the shortest route from `from` to `to` with breadth-first
    /// search over the 4-connected grid, stepping only where `pather`
    /// permits.
    ///
    /// Returns the full route including both endpoints, `Ok(None)` when `to`
    /// is unreachable (a normal outcome, not an error), or
    /// [`RouteError::OutOfBounds`] when either endpoint lies outside the
    /// grid — a caller contract violation. `from == to` yields the
    /// single-element route.
    ///
    /// Each cell is enqueued at most once and the first enqueue wins, so the
    /// route length is the true shortest-path length; ties follow the
    /// oracle's neighbour order. Work is O(width × height).
    pub fn route<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<Vec<Point>>, RouteError> {
        let start = self.idx(from).ok_or(RouteError::OutOfBounds(from))?;
        let goal = self.idx(to).ok_or(RouteError::OutOfBounds(to))?;

        if start == goal {
            return Ok(Some(vec![from]));
        }

        // Reset.
        for v in self.dist.iter_mut() {
            *v = UNREACHABLE;
        }
        self.queue.clear();
        self.dist[start] = 0;
        self.prev[start] = usize::MAX;
        self.queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut found = false;
        while let Some(ci) = self.queue.pop_front() {
            if ci == goal {
                found = true;
                break;
            }
            let current_dist = self.dist[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                self.dist[ni] = current_dist + 1;
                self.prev[ni] = ci;
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return Ok(None);
        }

        // Trace predecessors back from the goal, then reverse.
        let mut path = Vec::with_capacity(self.dist[goal] as usize + 1);
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.prev[ci];
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Compute a multi-source breadth-first distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Out-of-grid sources are skipped. Returns a slice of all
    /// reached nodes; query individual cells with
    /// [`distance_at`](Self::distance_at).
    pub fn distance_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        for v in self.dist.iter_mut() {
            *v = UNREACHABLE;
        }
        self.results.clear();
        self.queue.clear();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.dist[si] != UNREACHABLE {
                    continue;
                }
                self.dist[si] = 0;
                self.queue.push_back(si);
                self.results.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            let current_dist = self.dist[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.dist[ni] = nd;
                self.queue.push_back(ni);
                self.results.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.results
    }

    /// Query the distance at a specific point after the most recent
    /// [`route`](Self::route) or [`distance_map`](Self::distance_map) call.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the grid or was not
    /// reached by that query.
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }
}
