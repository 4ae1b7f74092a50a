//! Public data model for finished levels.

use crate::grid::Grid;
use crate::rooms::Room;
use crate::types::{CellState, Pos, WorldPos};

/// Everything a consumer gets from one successful generation run: the final
/// grid, the connected room list, and a recommended spawn tile inside the
/// main room. Treat it as read-only; a new run builds a new level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub spawn_tile: Pos,
}

impl GeneratedLevel {
    /// Stable byte encoding of the whole level, for fingerprinting and
    /// byte-identity checks. Open encodes as 0 and solid as 1.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                bytes.push(match self.grid.state(x, y) {
                    CellState::Open => 0,
                    CellState::Solid => 1,
                });
            }
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend((room.cells.len() as u32).to_le_bytes());
            for cell in &room.cells {
                bytes.extend(cell.y.to_le_bytes());
                bytes.extend(cell.x.to_le_bytes());
            }
            bytes.extend((room.edge_cells.len() as u32).to_le_bytes());
            for cell in &room.edge_cells {
                bytes.extend(cell.y.to_le_bytes());
                bytes.extend(cell.x.to_le_bytes());
            }
            bytes.extend((room.connections.len() as u32).to_le_bytes());
            for &connected in &room.connections {
                bytes.extend((connected as u32).to_le_bytes());
            }
            bytes.push(u8::from(room.is_main));
            bytes.push(u8::from(room.accessible_from_main));
        }

        bytes.extend(self.spawn_tile.y.to_le_bytes());
        bytes.extend(self.spawn_tile.x.to_le_bytes());
        bytes
    }

    pub fn state(&self, x: usize, y: usize) -> CellState {
        self.grid.state(x, y)
    }

    pub fn is_walkable(&self, world: WorldPos) -> bool {
        self.grid.is_walkable(world)
    }

    pub fn main_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.is_main)
    }

    pub fn spawn_world_position(&self) -> WorldPos {
        self.grid.cell_to_world(self.spawn_tile)
    }

    /// Renders the grid as one line per row: `#` solid, `.` open, `@` for
    /// the spawn tile.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.grid.width() + 1) * self.grid.height());
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let pos = Pos { y: y as i32, x: x as i32 };
                if pos == self.spawn_tile {
                    out.push('@');
                } else {
                    out.push(match self.grid.state(x, y) {
                        CellState::Open => '.',
                        CellState::Solid => '#',
                    });
                }
            }
            out.push('\n');
        }
        out
    }
}
