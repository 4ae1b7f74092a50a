use std::{error, fmt};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    /// The four edge-sharing neighbours, in up/right/down/left order.
    pub fn cardinal_neighbours(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellState {
    Open,
    Solid,
}

/// A position in the continuous space consumers render and move in.
/// The origin sits at the centre of the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationError {
    InvalidDimensions { width: usize, height: usize },
    FillPercentOutOfRange { fill_percent: u8 },
    WallThresholdOutOfRange { wall_threshold: u8 },
    ZeroMinRegionSize,
    NoSurvivingRooms,
    UnconnectableRooms { unreachable: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions {width}x{height} cannot hold a solid border (minimum 3x3)")
            }
            Self::FillPercentOutOfRange { fill_percent } => {
                write!(f, "fill percent {fill_percent} is outside 0..=100")
            }
            Self::WallThresholdOutOfRange { wall_threshold } => {
                write!(f, "wall threshold {wall_threshold} is outside 0..=8")
            }
            Self::ZeroMinRegionSize => write!(f, "minimum region size must be at least 1"),
            Self::NoSurvivingRooms => {
                write!(f, "no floor region survived filtering; retry with a new seed or a smaller minimum region size")
            }
            Self::UnconnectableRooms { unreachable } => {
                write!(f, "{unreachable} room(s) could not be connected to the main room")
            }
        }
    }
}

impl error::Error for GenerationError {}
