//! Cell-grid primitive shared by every generation stage.

use crate::types::{CellState, Pos, WorldPos};

/// A fixed-size 2D grid of open/solid cells.
///
/// Out-of-bounds lookups through [`Grid::state_at`] answer `Solid`, so
/// everything outside the map reads as wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub(crate) fn new_solid(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![CellState::Solid; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// True for cells strictly inside the solid border ring.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x > 0
            && pos.y > 0
            && (pos.x as usize) < self.width - 1
            && (pos.y as usize) < self.height - 1
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    pub fn state(&self, x: usize, y: usize) -> CellState {
        self.state_at(Pos { y: y as i32, x: x as i32 })
    }

    pub fn state_at(&self, pos: Pos) -> CellState {
        if !self.in_bounds(pos) {
            return CellState::Solid;
        }
        self.cells[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Pos, state: CellState) {
        let index = self.index(pos);
        self.cells[index] = state;
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == CellState::Open).count()
    }

    /// Maps a cell to the centre of its world-space tile. The grid midpoint
    /// sits at the world origin.
    pub fn cell_to_world(&self, pos: Pos) -> WorldPos {
        WorldPos {
            x: pos.x as f32 - self.width as f32 / 2.0 + 0.5,
            y: pos.y as f32 - self.height as f32 / 2.0 + 0.5,
        }
    }

    pub fn world_to_cell(&self, world: WorldPos) -> Option<Pos> {
        let pos = Pos {
            y: (world.y + self.height as f32 / 2.0).floor() as i32,
            x: (world.x + self.width as f32 / 2.0).floor() as i32,
        };
        self.in_bounds(pos).then_some(pos)
    }

    pub fn is_walkable(&self, world: WorldPos) -> bool {
        self.world_to_cell(world)
            .is_some_and(|pos| self.state_at(pos) == CellState::Open)
    }
}

pub(crate) fn squared_distance(a: Pos, b: Pos) -> u64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    (dx * dx + dy * dy) as u64
}
