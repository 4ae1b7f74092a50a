//! Deterministic cellular-automata cave generation for grid-based levels.

mod automata;
mod carve;
mod connect;
mod generator;
mod grid;
mod model;
mod params;
mod regions;
mod rooms;
mod seed;
mod types;

pub use generator::LevelGenerator;
pub use grid::Grid;
pub use model::GeneratedLevel;
pub use params::GenerationParams;
pub use rooms::Room;
pub use seed::Seed;
pub use types::{CellState, GenerationError, Pos, WorldPos};

/// Validates `params` and runs one generation pass.
pub fn generate_level(params: GenerationParams) -> Result<GeneratedLevel, GenerationError> {
    LevelGenerator::new(params)?.generate()
}
