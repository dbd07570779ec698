use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::error::ConfigError;
use Direction::*;

/// Smallest width or height for which self-collision is possible.
pub const MIN_GRID_SIDE: u16 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: u16,
    pub row: u16,
}

impl Cell {
    pub const fn new(col: u16, row: u16) -> Self {
        Cell { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit step as `(dx, dy)`, rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Fixed-size toroidal coordinate space.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width < MIN_GRID_SIDE || height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall { width, height, min: MIN_GRID_SIDE });
        }

        Ok(Grid { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }

    /// Moves `cell` one step towards `direction`, leaving through one edge
    /// and coming back in through the opposite one.
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let col = (cell.col as i32 + dx).rem_euclid(self.width as i32);
        let row = (cell.row as i32 + dy).rem_euclid(self.height as i32);
        Cell::new(col as u16, row as u16)
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }
}
