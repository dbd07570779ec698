use thiserror::Error;

use crate::grid::Cell;

/// Precondition violations detected while building the simulation.
///
/// Self-collision is not an error; it is reported through
/// [`StepOutcome::collided`](crate::StepOutcome::collided).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: u16, height: u16, min: u16 },

    #[error("start cell {0} lies outside the grid")]
    StartOutsideGrid(Cell),

    #[error("snake body must contain at least one cell")]
    EmptyBody,

    #[error("snake body cell {0} lies outside the grid")]
    BodyOutsideGrid(Cell),

    #[error("snake body visits cell {0} more than once")]
    OverlappingBody(Cell),

    #[error("food at {0} overlaps the snake")]
    FoodOnSnake(Cell),
}
