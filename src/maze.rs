use caches::Cache;
use log::debug;

use crate::error::MazeError;

pub const SAMPLE_SEED: u32 = 10;
pub const ACTUAL_SEED: u32 = 1364;

const FLOOR_CACHE_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two coordinates.
    pub fn distance(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Orthogonal neighbours. Coordinates outside the `u32` range do not
    /// exist.
    pub fn neighbours(self) -> Vec<Coordinate> {
        let candidates = [
            self.x.checked_add(1).map(|x| Coordinate::new(x, self.y)),
            self.y.checked_add(1).map(|y| Coordinate::new(self.x, y)),
            self.x.checked_sub(1).map(|x| Coordinate::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Coordinate::new(self.x, y)),
        ];
        candidates.into_iter().flatten().collect()
    }
}

type FloorCache = caches::AdaptiveCache<Coordinate, bool>;

/// An office floor generated from a designer's favourite number. Walkability
/// is memoised in a cache owned by this value, so separate searches never
/// share state.
pub struct Maze {
    seed: u32,
    floor: FloorCache,
}

impl Maze {
    pub fn new(seed: u32) -> Result<Self, MazeError> {
        Self::with_cache_size(seed, FLOOR_CACHE_SIZE)
    }

    pub fn with_cache_size(seed: u32, size: usize) -> Result<Self, MazeError> {
        let floor = FloorCache::new(size).map_err(|e| MazeError::Cache(format!("{:?}", e)))?;
        Ok(Self { seed, floor })
    }

    pub fn is_open(&mut self, c: Coordinate) -> bool {
        if let Some(&open) = self.floor.get(&c) {
            return open;
        }

        let open = is_walkable(c, self.seed);
        self.floor.put(c, open);
        open
    }

    pub fn open_neighbours(&mut self, c: Coordinate) -> Vec<Coordinate> {
        let mut n = c.neighbours();
        n.retain(|&next| self.is_open(next));
        n
    }

    /// Draws the `width` x `height` corner of the floor, `.` for open space
    /// and `#` for walls.
    pub fn render(&mut self, width: u32, height: u32) -> String {
        debug!("rendering {}x{} floor for seed {}", width, height, self.seed);
        let line = (width as usize).saturating_add(1);
        let mut out = String::with_capacity(line.saturating_mul(height as usize));
        for y in 0..height {
            for x in 0..width {
                out.push(if self.is_open(Coordinate::new(x, y)) { '.' } else { '#' });
            }
            out.push('\n');
        }
        out
    }
}

fn is_walkable(c: Coordinate, seed: u32) -> bool {
    let (x, y) = (u128::from(c.x), u128::from(c.y));
    let key = x * x + 3 * x + 2 * x * y + y + y * y + u128::from(seed);
    key.count_ones() % 2 == 0
}
