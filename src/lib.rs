#![doc = include_str!("../README.md")]

// Core model and algorithms.
pub mod boundary;
pub mod geometry;
pub mod occupancy;
pub mod scene;
pub mod visibility;

// Diagnostics, ingestion and presentation.
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod render;

// --- High-level re-exports -------------------------------------------------

// Main entry points: scene pipeline + results.
pub use crate::scene::{SceneAnalyzer, SceneParams, SceneResult};

// Building blocks usable without the pipeline.
pub use crate::boundary::{extract_boundary, Boundary, Segment, SegmentId};
pub use crate::occupancy::{CellClass, Observer, OccupancyGrid, Side};
pub use crate::visibility::{cast_visibility, CastOptions, Ray, VisibilityFan};

// High-level diagnostics returned by the pipeline.
pub use crate::diagnostics::{SceneReport, SceneTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use grid_sight::prelude::*;
///
/// let grid = OccupancyGrid::from_ascii("#####\n#.O.#\n#####").unwrap();
/// let result = SceneAnalyzer::new(SceneParams::default()).process(&grid);
/// assert_eq!(result.fans.len(), 1);
/// assert!(result.fans[0].rays.iter().all(|ray| ray.is_blocked()));
/// ```
pub mod prelude {
    pub use crate::{
        CastOptions, OccupancyGrid, SceneAnalyzer, SceneParams, SceneResult, Segment,
        VisibilityFan,
    };
}
