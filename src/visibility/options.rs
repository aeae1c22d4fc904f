use crate::occupancy::OccupancyGrid;
use serde::{Deserialize, Serialize};

/// Ray fan parameters.
///
/// - `ray_spacing_deg`: angular step between consecutive rays. Must divide
///   360 evenly for the fan to close on itself.
/// - `max_length`: length of an unblocked ray in cell units. Should exceed the
///   grid diagonal so open rays always leave the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastOptions {
    pub ray_spacing_deg: f32,
    pub max_length: f32,
}

impl Default for CastOptions {
    fn default() -> Self {
        Self {
            ray_spacing_deg: 2.0,
            max_length: 1000.0,
        }
    }
}

const DIVISOR_TOL: f32 = 1e-4;

impl CastOptions {
    pub fn new(ray_spacing_deg: f32, max_length: f32) -> Self {
        Self {
            ray_spacing_deg,
            max_length,
        }
    }

    /// Number of rays per observer: angles `k * spacing` below 360.
    pub fn ray_count(&self) -> usize {
        if !(self.ray_spacing_deg.is_finite() && self.ray_spacing_deg > 0.0) {
            return 0;
        }
        let steps = 360.0 / self.ray_spacing_deg;
        let rounded = steps.round();
        if (steps - rounded).abs() <= DIVISOR_TOL * rounded.max(1.0) {
            rounded as usize
        } else {
            steps.ceil() as usize
        }
    }

    /// Sampled angles in degrees, increasing from 0.
    pub fn angles(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.ray_count()).map(move |k| k as f32 * self.ray_spacing_deg)
    }

    pub fn validate(&self) -> Result<(), String> {
        let step = self.ray_spacing_deg;
        if !step.is_finite() || step <= 0.0 || step > 360.0 {
            return Err(format!(
                "Ray spacing must be in (0, 360] degrees, got {step}"
            ));
        }
        let steps = 360.0 / step;
        if (steps - steps.round()).abs() > DIVISOR_TOL * steps.round().max(1.0) {
            return Err(format!(
                "Ray spacing {step} does not divide 360 evenly; the fan would not close"
            ));
        }
        if !self.max_length.is_finite() || self.max_length <= 0.0 {
            return Err(format!(
                "Maximum cast length must be positive, got {}",
                self.max_length
            ));
        }
        Ok(())
    }

    /// Validate and additionally require rays to reach past the grid diagonal.
    pub fn validate_for(&self, grid: &OccupancyGrid) -> Result<(), String> {
        self.validate()?;
        let diagonal = grid.diagonal();
        if self.max_length <= diagonal {
            return Err(format!(
                "Maximum cast length {} does not exceed the grid diagonal {diagonal:.2}",
                self.max_length
            ));
        }
        Ok(())
    }
}
