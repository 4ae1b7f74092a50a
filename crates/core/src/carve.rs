//! Corridor rasterization: 4-connected Bresenham lines and disk stamping.

use crate::grid::Grid;
use crate::types::{CellState, Pos};

/// Opens a corridor between two tiles by stamping a disk of `radius` at
/// every cell of the line between them. Carving only ever opens cells.
pub(crate) fn carve_corridor(grid: &mut Grid, from: Pos, to: Pos, radius: usize) {
    for point in line_between(from, to) {
        stamp_disk(grid, point, radius);
    }
}

/// Integer Bresenham rasterization from `from` to `to`, inclusive.
///
/// Diagonal steps are split in two (dominant axis first) so consecutive
/// cells always share an edge; a radius-0 corridor is then still walkable
/// under 4-connected movement.
pub(crate) fn line_between(from: Pos, to: Pos) -> Vec<Pos> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut x = from.x;
    let mut y = from.y;
    let mut error = dx + dy;
    let mut points = Vec::with_capacity((dx - dy) as usize + 1);
    loop {
        points.push(Pos { y, x });
        if x == to.x && y == to.y {
            break;
        }
        let doubled = 2 * error;
        let advance_x = doubled >= dy;
        let advance_y = doubled <= dx;
        if advance_x && advance_y {
            let intermediate =
                if dx + dy >= 0 { Pos { y, x: x + step_x } } else { Pos { y: y + step_y, x } };
            points.push(intermediate);
        }
        if advance_x {
            error += dy;
            x += step_x;
        }
        if advance_y {
            error += dx;
            y += step_y;
        }
    }
    points
}

/// Opens every interior cell within `radius` Euclidean distance of the
/// centre. Border and out-of-bounds cells are silently skipped.
pub(crate) fn stamp_disk(grid: &mut Grid, centre: Pos, radius: usize) {
    // A disk wider than the grid covers the whole interior already;
    // clamping keeps the squared-distance test inside i64.
    let radius = radius.min(grid.width().max(grid.height())) as i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let pos = Pos { y: centre.y + dy as i32, x: centre.x + dx as i32 };
            if grid.is_interior(pos) {
                grid.set(pos, CellState::Open);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_interior(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new_solid(width, height);
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                grid.set(Pos { y: y as i32, x: x as i32 }, CellState::Open);
            }
        }
        grid
    }

    fn is_cardinal_step(a: Pos, b: Pos) -> bool {
        (a.y - b.y).abs() + (a.x - b.x).abs() == 1
    }

    #[test]
    fn line_includes_both_endpoints_in_order() {
        let points = line_between(Pos { y: 2, x: 1 }, Pos { y: 2, x: 5 });
        assert_eq!(points.first(), Some(&Pos { y: 2, x: 1 }));
        assert_eq!(points.last(), Some(&Pos { y: 2, x: 5 }));
        assert_eq!(points.len(), 5);
    }

    #[test]
    fn degenerate_line_is_a_single_cell() {
        assert_eq!(line_between(Pos { y: 3, x: 3 }, Pos { y: 3, x: 3 }), vec![Pos { y: 3, x: 3 }]);
    }

    #[test]
    fn lines_are_four_connected_in_every_octant() {
        let origin = Pos { y: 8, x: 8 };
        for target in [
            Pos { y: 1, x: 14 },
            Pos { y: 14, x: 1 },
            Pos { y: 1, x: 1 },
            Pos { y: 14, x: 14 },
            Pos { y: 8, x: 0 },
            Pos { y: 0, x: 8 },
            Pos { y: 3, x: 15 },
            Pos { y: 15, x: 5 },
        ] {
            let points = line_between(origin, target);
            assert_eq!(points.first(), Some(&origin));
            assert_eq!(points.last(), Some(&target));
            for pair in points.windows(2) {
                assert!(
                    is_cardinal_step(pair[0], pair[1]),
                    "steps must share an edge: {:?} -> {:?} (target {target:?})",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn disk_stamp_respects_the_euclidean_radius() {
        let mut grid = Grid::new_solid(11, 11);
        stamp_disk(&mut grid, Pos { y: 5, x: 5 }, 2);

        assert_eq!(grid.state(5, 5), CellState::Open);
        assert_eq!(grid.state(7, 5), CellState::Open);
        assert_eq!(grid.state(6, 6), CellState::Open, "distance sqrt(2) is within radius 2");
        assert_eq!(grid.state(7, 7), CellState::Solid, "distance sqrt(8) exceeds radius 2");
    }

    #[test]
    fn zero_radius_stamp_opens_only_the_centre() {
        let mut grid = Grid::new_solid(7, 7);
        stamp_disk(&mut grid, Pos { y: 3, x: 3 }, 0);
        assert_eq!(grid.open_cell_count(), 1);
    }

    #[test]
    fn stamping_never_opens_the_border() {
        let mut grid = Grid::new_solid(9, 9);
        carve_corridor(&mut grid, Pos { y: 1, x: 1 }, Pos { y: 7, x: 7 }, 3);
        for index in 0..9 {
            assert_eq!(grid.state(index, 0), CellState::Solid);
            assert_eq!(grid.state(index, 8), CellState::Solid);
            assert_eq!(grid.state(0, index), CellState::Solid);
            assert_eq!(grid.state(8, index), CellState::Solid);
        }
    }

    #[test]
    fn oversized_radius_opens_the_whole_interior() {
        let mut grid = Grid::new_solid(7, 5);
        stamp_disk(&mut grid, Pos { y: 2, x: 3 }, usize::MAX);
        assert_eq!(grid.open_cell_count(), 5 * 3);
        for x in 0..7 {
            assert_eq!(grid.state(x, 0), CellState::Solid);
            assert_eq!(grid.state(x, 4), CellState::Solid);
        }
    }

    #[test]
    fn carving_through_open_cells_changes_nothing() {
        let mut grid = open_interior(12, 10);
        let before = grid.clone();
        carve_corridor(&mut grid, Pos { y: 2, x: 2 }, Pos { y: 7, x: 9 }, 2);
        assert_eq!(grid, before);
    }
}
