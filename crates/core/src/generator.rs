//! Pipeline orchestration from validated parameters to a finished level.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::RngCore;

use crate::automata::{fill_noise, smooth};
use crate::connect::connect_rooms;
use crate::grid::Grid;
use crate::model::GeneratedLevel;
use crate::params::GenerationParams;
use crate::rooms::{Room, build_rooms};
use crate::types::{GenerationError, Pos};

/// One generator drives one level. Construction validates the parameters,
/// so a held generator can only fail for seed-dependent reasons (no
/// surviving rooms, unconnectable room graph).
pub struct LevelGenerator {
    params: GenerationParams,
}

impl LevelGenerator {
    pub fn new(params: GenerationParams) -> Result<Self, GenerationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Runs the full pipeline: noise fill, smoothing passes, region
    /// filtering, room connection, spawn choice. Every call starts from a
    /// fresh grid; nothing carries over between runs.
    pub fn generate(&self) -> Result<GeneratedLevel, GenerationError> {
        let mut rng = self.params.seed.rng();

        let mut grid = Grid::new_solid(self.params.width, self.params.height);
        fill_noise(&mut grid, self.params.fill_percent, &mut rng);
        for _ in 0..self.params.smooth_iterations {
            grid = smooth(&grid, self.params.wall_threshold);
        }

        let mut rooms = build_rooms(&mut grid, self.params.min_region_size)?;
        connect_rooms(&mut grid, &mut rooms, self.params.carve_radius)?;

        let spawn_tile = choose_spawn_tile(&rooms, &mut rng);
        Ok(GeneratedLevel { grid, rooms, spawn_tile })
    }
}

fn choose_spawn_tile(rooms: &[Room], rng: &mut ChaCha8Rng) -> Pos {
    // build_rooms sorts largest-first, so the main room is the first entry.
    let main_room = &rooms[0];
    main_room.cells[rng.next_u64() as usize % main_room.cells.len()]
}
