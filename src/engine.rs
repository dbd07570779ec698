use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::food::{Food, FoodSpawner};
use crate::grid::{Direction, Grid};
use crate::snake::{Snake, StepOutcome};

/// One snake, one food item and the rules tying them together.
///
/// The caller owns the clock: every [`Engine::tick`] advances the
/// simulation by exactly one cell.
pub struct Engine<R = ChaCha12Rng> {
    config: EngineConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    spawner: FoodSpawner,
    rng: R,
    last_outcome: Option<StepOutcome>,
}

impl Engine<ChaCha12Rng> {
    /// Builds an engine seeded from `config.seed`, or from OS entropy when
    /// no seed is given.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };
        Engine::with_rng(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(config: EngineConfig, mut rng: R) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let spawner = FoodSpawner::new(grid);

        let start = config.start_cell.resolve(&grid, &mut rng);
        let direction = config.start_direction.resolve(&mut rng);
        let snake = Snake::new(grid, start, direction);
        let food = spawner.spawn(&mut rng, snake.body());

        info!("new {}x{} game, snake at {} heading {:?}", grid.width(), grid.height(), start, direction);
        Ok(Engine { config, grid, snake, food, spawner, rng, last_outcome: None })
    }

    /// Resumes from an explicit snake and food, e.g. a scripted position.
    pub fn from_parts(config: EngineConfig, snake: Snake, food: Food, rng: R) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        debug_assert_eq!(snake.grid(), &grid, "snake built for another grid");
        if snake.body().contains(&food.position()) {
            return Err(ConfigError::FoodOnSnake(food.position()));
        }

        let spawner = FoodSpawner::new(grid);
        Ok(Engine { config, grid, snake, food, spawner, rng, last_outcome: None })
    }

    /// Advances the simulation by one step, steering first if `input` is set.
    ///
    /// A collision resets the snake and replaces the food before returning,
    /// so the engine is always ready for the next tick.
    pub fn tick(&mut self, input: Option<Direction>) -> StepOutcome {
        if let Some(dir) = input {
            self.snake.set_pending_direction(dir);
        }

        let outcome = self.snake.step(self.food.position());

        if outcome.collided {
            info!("snake collided at length {}, resetting", self.snake.len());
            self.restart();
        } else if outcome.ate {
            self.food = self.spawner.spawn(&mut self.rng, self.snake.body());
            debug!("ate at {}, length {}, food now at {}", outcome.head, self.snake.len(), self.food.position());
        }

        self.last_outcome = Some(outcome);
        outcome
    }

    /// Puts a fresh snake on the board and respawns the food around it.
    pub fn restart(&mut self) {
        let start = self.config.start_cell.resolve(&self.grid, &mut self.rng);
        let direction = self.config.start_direction.resolve(&mut self.rng);
        self.snake.reset(start, direction);
        self.food = self.spawner.spawn(&mut self.rng, self.snake.body());
        debug!("snake restarted at {} heading {:?}, food at {}", start, direction, self.food.position());
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn last_outcome(&self) -> Option<StepOutcome> {
        self.last_outcome
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }
}
