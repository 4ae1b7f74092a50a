//! Generation parameters and their up-front validation.

use serde::{Deserialize, Serialize};

use crate::seed::Seed;
use crate::types::GenerationError;

/// Immutable inputs for one generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    pub seed: Seed,
    /// Probability (0..=100) that a non-border cell starts solid.
    pub fill_percent: u8,
    pub smooth_iterations: u32,
    /// Moore-neighbourhood solid count above which a cell turns solid (0..=8).
    pub wall_threshold: u8,
    /// Regions with fewer cells than this are filled in or culled.
    pub min_region_size: usize,
    pub carve_radius: usize,
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width < 3 || self.height < 3 {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.fill_percent > 100 {
            return Err(GenerationError::FillPercentOutOfRange {
                fill_percent: self.fill_percent,
            });
        }
        if self.wall_threshold > 8 {
            return Err(GenerationError::WallThresholdOutOfRange {
                wall_threshold: self.wall_threshold,
            });
        }
        if self.min_region_size == 0 {
            return Err(GenerationError::ZeroMinRegionSize);
        }
        Ok(())
    }
}
