//! Flood-fill labelling of maximal 4-connected regions.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::{CellState, Pos};

/// One maximal 4-connected component of same-state cells.
///
/// Cell order is load-bearing: it is the breadth-first visit order from a
/// row-major scan, so downstream consumers (edge lists, tie-breaks) are
/// reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    pub(crate) state: CellState,
    pub(crate) cells: Vec<Pos>,
}

impl Region {
    pub(crate) fn touches_border(&self, grid: &Grid) -> bool {
        self.cells.iter().any(|&pos| !grid.is_interior(pos))
    }
}

/// Partitions all cells of `target` state into regions via multi-source
/// flood fill: row-major scan, FIFO expansion over cardinal neighbours.
pub(crate) fn extract_regions(grid: &Grid, target: CellState) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let start = Pos { y: y as i32, x: x as i32 };
            if visited[grid.index(start)] || grid.state_at(start) != target {
                continue;
            }

            let mut cells = Vec::new();
            let mut queue = VecDeque::from([start]);
            visited[grid.index(start)] = true;
            while let Some(pos) = queue.pop_front() {
                cells.push(pos);
                for neighbour in pos.cardinal_neighbours() {
                    if !grid.in_bounds(neighbour)
                        || visited[grid.index(neighbour)]
                        || grid.state_at(neighbour) != target
                    {
                        continue;
                    }
                    visited[grid.index(neighbour)] = true;
                    queue.push_back(neighbour);
                }
            }
            regions.push(Region { state: target, cells });
        }
    }

    regions
}
