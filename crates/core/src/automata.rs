//! Cellular-automata synthesis: seeded noise fill plus majority-vote smoothing.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::RngCore;

use crate::grid::Grid;
use crate::types::{CellState, Pos};

/// Fills the grid with seeded noise in row-major order. Border cells are
/// forced solid and consume nothing from the stream.
pub(crate) fn fill_noise(grid: &mut Grid, fill_percent: u8, rng: &mut ChaCha8Rng) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos { y: y as i32, x: x as i32 };
            if !grid.is_interior(pos) {
                grid.set(pos, CellState::Solid);
                continue;
            }
            let roll = rng.next_u32() % 100;
            let state =
                if roll < u32::from(fill_percent) { CellState::Solid } else { CellState::Open };
            grid.set(pos, state);
        }
    }
}

/// One smoothing pass over a snapshot of the previous grid, so the vote for
/// each cell never sees this pass's own writes. Border cells stay solid.
pub(crate) fn smooth(previous: &Grid, wall_threshold: u8) -> Grid {
    let mut next = Grid::new_solid(previous.width(), previous.height());
    for y in 1..previous.height().saturating_sub(1) {
        for x in 1..previous.width().saturating_sub(1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            let solid_neighbours = solid_neighbour_count(previous, pos);
            let state = if solid_neighbours > wall_threshold {
                CellState::Solid
            } else if solid_neighbours < wall_threshold {
                CellState::Open
            } else {
                previous.state_at(pos)
            };
            next.set(pos, state);
        }
    }
    next
}

/// Solid count over the 8-connected Moore neighbourhood; cells outside the
/// grid count as solid.
fn solid_neighbour_count(grid: &Grid, pos: Pos) -> u8 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let neighbour = Pos { y: pos.y + dy, x: pos.x + dx };
            if grid.state_at(neighbour) == CellState::Solid {
                count += 1;
            }
        }
    }
    count
}
