use crate::grid::Cell;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OccupantKind {
    Snake,
    Food,
}

/// Something a renderer can draw on the grid.
pub trait Occupant {
    /// Covered cells; for the snake the head comes first.
    fn cells(&self) -> &[Cell];

    fn kind(&self) -> OccupantKind;
}
