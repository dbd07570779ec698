use std::collections::HashSet;

use log::{trace, warn};

use crate::error::ConfigError;
use crate::grid::{Cell, Direction, Grid};
use crate::occupant::{Occupant, OccupantKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SnakeState {
    Running,
    Collided,
}

/// What a single [`Snake::step`] did.
///
/// `head` is the head after the step (the untouched head when nothing moved),
/// `previous_head` the head before it and `vacated` the tail cell freed by a
/// non-growing move. Together they are enough for incremental redraws.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub moved: bool,
    pub ate: bool,
    pub collided: bool,
    pub head: Cell,
    pub previous_head: Cell,
    pub vacated: Option<Cell>,
}

impl StepOutcome {
    fn blocked(head: Cell) -> Self {
        StepOutcome { moved: false, ate: false, collided: true, head, previous_head: head, vacated: None }
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    grid: Grid,
    body: Vec<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    state: SnakeState,
}

impl Snake {
    /// A one-cell snake at `start`. `start` must lie inside `grid`.
    pub fn new(grid: Grid, start: Cell, direction: Direction) -> Self {
        debug_assert!(grid.contains(start), "start cell {} outside grid", start);

        Snake {
            grid,
            body: vec![start],
            direction,
            pending_direction: None,
            target_length: 1,
            state: SnakeState::Running,
        }
    }

    /// A snake laid out along an explicit head-first body.
    pub fn from_body(grid: Grid, body: Vec<Cell>, direction: Direction) -> Result<Self, ConfigError> {
        if body.is_empty() {
            return Err(ConfigError::EmptyBody);
        }

        let mut seen = HashSet::with_capacity(body.len());
        for cell in &body {
            if !grid.contains(*cell) {
                return Err(ConfigError::BodyOutsideGrid(*cell));
            }
            if !seen.insert(*cell) {
                return Err(ConfigError::OverlappingBody(*cell));
            }
        }

        let target_length = body.len();
        Ok(Snake { grid, body, direction, pending_direction: None, target_length, state: SnakeState::Running })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn state(&self) -> SnakeState {
        self.state
    }

    pub fn is_collided(&self) -> bool {
        self.state == SnakeState::Collided
    }

    /// Buffers `direction` for the next step. Turning straight back onto the
    /// neck is ignored; a later call before the step overrides this one.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            trace!("ignoring reversal {:?} while heading {:?}", direction, self.direction);
            return;
        }

        self.pending_direction = Some(direction);
    }

    pub fn step(&mut self, food: Cell) -> StepOutcome {
        if self.is_collided() {
            warn!("step on a collided snake at {}; reset it first", self.head());
            return StepOutcome::blocked(self.head());
        }

        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }

        let previous_head = self.head();
        let new_head = self.grid.wrap(previous_head, self.direction);
        let ate = new_head == food;

        // The tail moves out of the way this step unless the snake grows.
        let blocking = if ate { &self.body[..] } else { &self.body[..self.body.len() - 1] };
        if blocking.contains(&new_head) {
            self.state = SnakeState::Collided;
            return StepOutcome::blocked(previous_head);
        }

        self.body.insert(0, new_head);

        if ate {
            self.target_length += 1;
        }

        // Following the tail closely frees nothing: the head takes its cell.
        let vacated = if self.body.len() > self.target_length { self.body.pop() } else { None };
        let vacated = vacated.filter(|cell| *cell != new_head);

        StepOutcome { moved: true, ate, collided: false, head: new_head, previous_head, vacated }
    }

    pub fn reset(&mut self, start: Cell, direction: Direction) {
        *self = Snake::new(self.grid, start, direction);
    }
}

impl Occupant for Snake {
    fn cells(&self) -> &[Cell] {
        &self.body
    }

    fn kind(&self) -> OccupantKind {
        OccupantKind::Snake
    }
}
