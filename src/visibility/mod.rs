//! Ray-cast visibility against extracted wall segments.
//!
//! For every observer a fan of rays is cast over a full turn at a fixed
//! angular step. Each ray starts at the observer's cell center, points at
//! `max_length` along its angle, and is clipped to the nearest crossing with
//! any segment (see [`crate::geometry::intersect_ray_segment`]). The clipped
//! end points, in angle order, outline the observer's visibility polygon.
//!
//! Notes
//! - Every ray scans every segment; there is no spatial index.
//! - Rays parallel to a segment never clip against it, and neither do
//!   crossings that land exactly on a segment end point. A ray passing
//!   exactly through the shared corner of two segments therefore slips past
//!   both.
//! - Casting never mutates the segment list, so observers and rays are cast
//!   in parallel when the `parallel` feature is enabled.

mod caster;
mod options;
mod ray;

pub use caster::VisibilityCaster;
pub use options::CastOptions;
pub use ray::{Ray, VisibilityFan};

use crate::boundary::Segment;
use crate::occupancy::OccupancyGrid;

/// Cast fans for all observers of `grid` against `segments`.
pub fn cast_visibility(
    grid: &OccupancyGrid,
    segments: &[Segment],
    options: CastOptions,
) -> Vec<VisibilityFan> {
    VisibilityCaster::new(options).cast_all(grid.observers(), segments)
}
