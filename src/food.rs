use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::occupant::{Occupant, OccupantKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }
}

impl Occupant for Food {
    fn cells(&self) -> &[Cell] {
        std::slice::from_ref(&self.position)
    }

    fn kind(&self) -> OccupantKind {
        OccupantKind::Food
    }
}

#[derive(Debug, Copy, Clone)]
pub struct FoodSpawner {
    grid: Grid,
}

impl FoodSpawner {
    pub fn new(grid: Grid) -> Self {
        FoodSpawner { grid }
    }

    /// Draws uniformly random cells until one falls outside `occupied`.
    ///
    /// `occupied` must leave at least one cell of the grid free, otherwise
    /// this never returns.
    pub fn randomize_position<R: Rng + ?Sized>(&self, rng: &mut R, occupied: &[Cell]) -> Cell {
        debug_assert!(occupied.len() < self.grid.area(), "no free cell left for food");

        loop {
            let cell = self.grid.random_cell(rng);
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }

    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, occupied: &[Cell]) -> Food {
        Food::new(self.randomize_position(rng, occupied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn never_lands_on_occupied_cells() {
        let grid = Grid::new(4, 4).unwrap();
        let spawner = FoodSpawner::new(grid);
        let occupied: Vec<Cell> = grid.cells().take(12).collect();
        let mut rng = ChaCha12Rng::seed_from_u64(3);

        for _ in 0..200 {
            let cell = spawner.randomize_position(&mut rng, &occupied);
            assert!(grid.contains(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let grid = Grid::new(3, 3).unwrap();
        let spawner = FoodSpawner::new(grid);
        let free = Cell::new(2, 1);
        let occupied: Vec<Cell> = grid.cells().filter(|c| *c != free).collect();
        let mut rng = ChaCha12Rng::seed_from_u64(99);

        assert_eq!(spawner.spawn(&mut rng, &occupied).position(), free);
    }

    #[test]
    fn same_seed_same_food() {
        let grid = Grid::new(10, 10).unwrap();
        let spawner = FoodSpawner::new(grid);
        let occupied = [grid.center()];

        let a = spawner.randomize_position(&mut ChaCha12Rng::seed_from_u64(5), &occupied);
        let b = spawner.randomize_position(&mut ChaCha12Rng::seed_from_u64(5), &occupied);
        assert_eq!(a, b);
    }

    #[test]
    fn food_is_a_single_cell_occupant() {
        let food = Food::new(Cell::new(1, 2));
        assert_eq!(food.kind(), OccupantKind::Food);
        assert_eq!(food.cells(), &[Cell::new(1, 2)]);
    }
}
