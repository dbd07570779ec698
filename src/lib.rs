//! Simulation core of a snake that lives on a toroidal grid.
//!
//! The crate holds no rendering, input or timing code. A caller drives the
//! [`Engine`] one [`Engine::tick`] at a time and draws whatever the read-only
//! snapshots ([`Engine::snake`], [`Engine::food`], [`StepOutcome`]) describe.

pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod occupant;
pub mod snake;

pub use config::{EngineConfig, StartCell, StartDirection};
pub use engine::Engine;
pub use error::ConfigError;
pub use food::{Food, FoodSpawner};
pub use grid::{Cell, Direction, Grid};
pub use occupant::{Occupant, OccupantKind};
pub use snake::{Snake, SnakeState, StepOutcome};
