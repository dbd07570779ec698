use rand::Rng;

use crate::error::ConfigError;
use crate::grid::{Cell, Direction, Grid};

pub const DEFAULT_GRID_WIDTH: u16 = 20;
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Where a fresh snake appears.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartCell {
    Center,
    At(Cell),
    Random,
}

/// Which way a fresh snake heads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartDirection {
    Fixed(Direction),
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub start_cell: StartCell,
    pub start_direction: StartDirection,
    /// Seed for food placement and random start policies. `None` draws
    /// from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            start_cell: StartCell::Center,
            start_direction: StartDirection::Fixed(Direction::Right),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new(grid_width: u16, grid_height: u16) -> Self {
        EngineConfig { grid_width, grid_height, ..Default::default() }
    }

    pub fn with_start_cell(mut self, start_cell: StartCell) -> Self {
        self.start_cell = start_cell;
        self
    }

    pub fn with_start_direction(mut self, start_direction: StartDirection) -> Self {
        self.start_direction = start_direction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration and builds the grid it describes.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::new(self.grid_width, self.grid_height)?;

        if let StartCell::At(cell) = self.start_cell {
            if !grid.contains(cell) {
                return Err(ConfigError::StartOutsideGrid(cell));
            }
        }

        Ok(grid)
    }
}

impl StartCell {
    pub fn resolve<R: Rng + ?Sized>(self, grid: &Grid, rng: &mut R) -> Cell {
        match self {
            StartCell::Center => grid.center(),
            StartCell::At(cell) => cell,
            StartCell::Random => grid.random_cell(rng),
        }
    }
}

impl StartDirection {
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Direction {
        match self {
            StartDirection::Fixed(dir) => dir,
            StartDirection::Random => rng.gen(),
        }
    }
}
