use crate::boundary::Boundary;
use crate::occupancy::OccupancyGrid;
use serde::Serialize;

/// Number of segments per wall side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideCounts {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl SideCounts {
    pub fn total(&self) -> usize {
        self.left + self.top + self.right + self.bottom
    }
}

/// Summary of the boundary extraction stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryStage {
    pub elapsed_ms: f64,
    pub wall_cells: usize,
    pub exposed_faces: usize,
    pub segments: usize,
    pub by_side: SideCounts,
    pub longest_run: f32,
    /// Exposed faces per segment; 1.0 means nothing was merged.
    pub merge_ratio: f32,
}

impl BoundaryStage {
    pub fn from_boundary(grid: &OccupancyGrid, boundary: &Boundary, elapsed_ms: f64) -> Self {
        let [left, top, right, bottom] = boundary.counts_by_side();
        let segments = boundary.segments().len();
        let exposed_faces = grid.exposed_face_count();
        let merge_ratio = if segments == 0 {
            0.0
        } else {
            exposed_faces as f32 / segments as f32
        };
        Self {
            elapsed_ms,
            wall_cells: grid.wall_count(),
            exposed_faces,
            segments,
            by_side: SideCounts {
                left,
                top,
                right,
                bottom,
            },
            longest_run: boundary.longest_run(),
            merge_ratio,
        }
    }
}
