use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;

use log::debug;
use pathfinding::prelude::{astar, dijkstra_reach};

use crate::maze::{Coordinate, Maze};

/// Puzzle specific callbacks driving the generic searches. Every edge
/// returned by `neighbours` costs one step.
pub trait SearchAdapter<N> {
    fn neighbours(&mut self, node: &N) -> Vec<N>;

    /// Admissible estimate of the remaining steps. Zero turns A* into
    /// Dijkstra.
    fn cost_to_finish(&mut self, _node: &N) -> u32 {
        0
    }

    fn is_finish(&mut self, node: &N) -> bool;
}

// The search crate takes one closure per callback and never calls them
// re-entrantly, so the adapter is shared through a RefCell.
fn weighted<N, A: SearchAdapter<N>>(adapter: &RefCell<&mut A>, node: &N) -> Vec<(N, u32)> {
    let next = adapter.borrow_mut().neighbours(node);
    next.into_iter().map(|n| (n, 1)).collect()
}

/// Shortest path from `start` to the first node the adapter accepts as a
/// finish, both ends included. `None` when no finish is reachable.
pub fn a_star<N, A>(start: N, adapter: &mut A) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    A: SearchAdapter<N>,
{
    let adapter = RefCell::new(adapter);
    let found = astar(
        &start,
        |node| weighted(&adapter, node),
        |node| adapter.borrow_mut().cost_to_finish(node),
        |node| adapter.borrow_mut().is_finish(node),
    );

    match found {
        Some((path, steps)) => {
            debug!("a*: reached finish in {} steps", steps);
            Some(path)
        }
        None => {
            debug!("a*: no finish reachable");
            None
        }
    }
}

/// Every node at most `max_cost` steps away from `start`, `start` included.
/// The adapter's finish test is not consulted.
pub fn reachable_within<N, A>(start: N, adapter: &mut A, max_cost: u32) -> HashSet<N>
where
    N: Clone + Eq + Hash,
    A: SearchAdapter<N>,
{
    let adapter = RefCell::new(adapter);
    // Nodes come out in nondecreasing cost order.
    let visited: HashSet<N> = dijkstra_reach(&start, |node| weighted(&adapter, node))
        .take_while(|item| item.total_cost <= max_cost)
        .map(|item| item.node)
        .collect();

    debug!("bfs: {} nodes within {} steps", visited.len(), max_cost);
    visited
}

/// Walks the open cells of a [`Maze`] towards a fixed finish cell.
pub struct MazeWalk<'m> {
    maze: &'m mut Maze,
    finish: Coordinate,
}

impl<'m> MazeWalk<'m> {
    pub fn new(maze: &'m mut Maze, finish: Coordinate) -> Self {
        Self { maze, finish }
    }
}

impl SearchAdapter<Coordinate> for MazeWalk<'_> {
    fn neighbours(&mut self, node: &Coordinate) -> Vec<Coordinate> {
        self.maze.open_neighbours(*node)
    }

    fn cost_to_finish(&mut self, node: &Coordinate) -> u32 {
        node.distance(self.finish)
    }

    fn is_finish(&mut self, node: &Coordinate) -> bool {
        *node == self.finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::maze::{ACTUAL_SEED, SAMPLE_SEED};

    fn init() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    fn steps(seed: u32, finish: Coordinate) -> Option<usize> {
        let mut maze = Maze::new(seed).unwrap();
        let mut walk = MazeWalk::new(&mut maze, finish);
        a_star(Coordinate::new(1, 1), &mut walk).map(|path| path.len() - 1)
    }

    fn reachable(seed: u32, max_cost: u32) -> usize {
        let mut maze = Maze::new(seed).unwrap();
        let mut walk = MazeWalk::new(&mut maze, Coordinate::new(31, 39));
        reachable_within(Coordinate::new(1, 1), &mut walk, max_cost).len()
    }

    /// Integers on a line, edges only between neighbours below `limit`.
    struct Line {
        limit: i32,
        finish: i32,
    }

    impl SearchAdapter<i32> for Line {
        fn neighbours(&mut self, node: &i32) -> Vec<i32> {
            [node - 1, node + 1]
                .into_iter()
                .filter(|n| (0..self.limit).contains(n))
                .collect()
        }

        fn is_finish(&mut self, node: &i32) -> bool {
            *node == self.finish
        }
    }

    #[test]
    fn sample_shortest_path() {
        init();
        assert_eq!(steps(SAMPLE_SEED, Coordinate::new(7, 4)), Some(11));
    }

    #[test]
    fn actual_shortest_path() {
        init();
        assert_eq!(steps(ACTUAL_SEED, Coordinate::new(31, 39)), Some(86));
    }

    #[test]
    fn path_is_connected_through_open_cells() {
        init();
        let mut maze = Maze::new(SAMPLE_SEED).unwrap();
        let finish = Coordinate::new(7, 4);
        let path = a_star(Coordinate::new(1, 1), &mut MazeWalk::new(&mut maze, finish)).unwrap();

        assert_eq!(path.first(), Some(&Coordinate::new(1, 1)));
        assert_eq!(path.last(), Some(&finish));
        for pair in path.windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1);
            assert!(maze.is_open(pair[1]));
        }
    }

    #[test]
    fn start_is_finish() {
        init();
        assert_eq!(steps(SAMPLE_SEED, Coordinate::new(1, 1)), Some(0));
    }

    #[test]
    fn unreachable_finish() {
        init();
        let mut line = Line {
            limit: 10,
            finish: 42,
        };
        assert_eq!(a_star(3, &mut line), None);
    }

    #[test]
    fn line_path() {
        init();
        let mut line = Line {
            limit: 10,
            finish: 7,
        };
        assert_eq!(a_star(3, &mut line), Some(vec![3, 4, 5, 6, 7]));
    }

    #[test]
    fn sample_reachable_sets() {
        init();
        assert_eq!(reachable(SAMPLE_SEED, 0), 1);
        assert_eq!(reachable(SAMPLE_SEED, 1), 3);
        assert_eq!(reachable(SAMPLE_SEED, 2), 5);
        assert_eq!(reachable(SAMPLE_SEED, 50), 151);
    }

    #[test]
    fn actual_reachable_within_fifty() {
        init();
        assert_eq!(reachable(ACTUAL_SEED, 50), 127);
    }

    #[test]
    fn reachable_ignores_finish() {
        init();
        let mut line = Line {
            limit: 100,
            finish: 5,
        };
        let set = reachable_within(5, &mut line, 3);
        let mut nodes: Vec<i32> = set.into_iter().collect();
        nodes.sort();
        assert_eq!(nodes, vec![2, 3, 4, 5, 6, 7, 8]);
    }
}
