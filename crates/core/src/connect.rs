//! Room connection: nearest-edge-pair search with accessibility closure.

use std::collections::VecDeque;

use crate::carve::carve_corridor;
use crate::grid::{Grid, squared_distance};
use crate::rooms::Room;
use crate::types::{GenerationError, Pos};

struct ClosestPair {
    distance: u64,
    unreachable_room: usize,
    reachable_room: usize,
    unreachable_tile: Pos,
    reachable_tile: Pos,
}

/// Connects every room to the main room, one corridor per pass.
///
/// Each pass carves the globally shortest corridor between a room that
/// cannot yet reach the main room and one that can, then spreads the
/// accessibility flag over the connection graph. Ties keep the first pair
/// found, under room-index then edge-cell insertion order, so the result is
/// a pure function of the room list.
pub(crate) fn connect_rooms(
    grid: &mut Grid,
    rooms: &mut [Room],
    carve_radius: usize,
) -> Result<(), GenerationError> {
    loop {
        let unreachable: Vec<usize> =
            (0..rooms.len()).filter(|&index| !rooms[index].accessible_from_main).collect();
        if unreachable.is_empty() {
            return Ok(());
        }
        let reachable: Vec<usize> =
            (0..rooms.len()).filter(|&index| rooms[index].accessible_from_main).collect();

        let Some(pair) = closest_unconnected_pair(rooms, &unreachable, &reachable) else {
            return Err(GenerationError::UnconnectableRooms { unreachable: unreachable.len() });
        };

        carve_corridor(grid, pair.unreachable_tile, pair.reachable_tile, carve_radius);
        rooms[pair.unreachable_room].connections.push(pair.reachable_room);
        rooms[pair.reachable_room].connections.push(pair.unreachable_room);
        spread_accessibility(rooms, pair.unreachable_room);
    }
}

fn closest_unconnected_pair(
    rooms: &[Room],
    unreachable: &[usize],
    reachable: &[usize],
) -> Option<ClosestPair> {
    let mut best: Option<ClosestPair> = None;
    for &from_index in unreachable {
        for &to_index in reachable {
            if rooms[from_index].connections.contains(&to_index) {
                continue;
            }
            for &from_tile in &rooms[from_index].edge_cells {
                for &to_tile in &rooms[to_index].edge_cells {
                    let distance = squared_distance(from_tile, to_tile);
                    if best.as_ref().is_none_or(|current| distance < current.distance) {
                        best = Some(ClosestPair {
                            distance,
                            unreachable_room: from_index,
                            reachable_room: to_index,
                            unreachable_tile: from_tile,
                            reachable_tile: to_tile,
                        });
                    }
                }
            }
        }
    }
    best
}

/// Worklist flood over the room graph, not the grid. Bounded by the room
/// count, so deep connection chains cannot overflow the stack.
fn spread_accessibility(rooms: &mut [Room], start: usize) {
    let mut queue = VecDeque::from([start]);
    while let Some(index) = queue.pop_front() {
        if rooms[index].accessible_from_main {
            continue;
        }
        rooms[index].accessible_from_main = true;
        for &next in &rooms[index].connections {
            if !rooms[next].accessible_from_main {
                queue.push_back(next);
            }
        }
    }
}
