//! Region filtering and room construction.

use crate::grid::Grid;
use crate::regions::{Region, extract_regions};
use crate::types::{CellState, GenerationError, Pos};

/// A surviving floor region, the unit the connector works on.
///
/// Rooms refer to each other by index into the level's room list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub cells: Vec<Pos>,
    /// Cells with at least one solid cardinal neighbour; corridor endpoints
    /// are chosen from these.
    pub edge_cells: Vec<Pos>,
    pub connections: Vec<usize>,
    pub is_main: bool,
    pub accessible_from_main: bool,
}

impl Room {
    fn from_region(region: Region, grid: &Grid) -> Self {
        let edge_cells = region
            .cells
            .iter()
            .copied()
            .filter(|&pos| {
                pos.cardinal_neighbours()
                    .iter()
                    .any(|&neighbour| grid.state_at(neighbour) == CellState::Solid)
            })
            .collect();
        Self {
            cells: region.cells,
            edge_cells,
            connections: Vec::new(),
            is_main: false,
            accessible_from_main: false,
        }
    }
}

/// Fills undersized wall pockets, culls undersized floor pockets, and wraps
/// the surviving floor regions into rooms sorted largest-first. The largest
/// room becomes the main room and the accessibility root.
pub(crate) fn build_rooms(
    grid: &mut Grid,
    min_region_size: usize,
) -> Result<Vec<Room>, GenerationError> {
    for region in extract_regions(grid, CellState::Solid) {
        // The border ring must stay solid no matter how small the grid is.
        if region.cells.len() < min_region_size && !region.touches_border(grid) {
            for pos in region.cells {
                grid.set(pos, CellState::Open);
            }
        }
    }

    let mut survivors = Vec::new();
    for region in extract_regions(grid, CellState::Open) {
        if region.cells.len() < min_region_size {
            for &pos in &region.cells {
                grid.set(pos, CellState::Solid);
            }
        } else {
            survivors.push(region);
        }
    }

    if survivors.is_empty() {
        return Err(GenerationError::NoSurvivingRooms);
    }

    let mut rooms: Vec<Room> =
        survivors.into_iter().map(|region| Room::from_region(region, grid)).collect();
    // Stable sort keeps extraction order between equal-sized rooms.
    rooms.sort_by(|a, b| b.cells.len().cmp(&a.cells.len()));
    rooms[0].is_main = true;
    rooms[0].accessible_from_main = true;
    Ok(rooms)
}
