//! Wall boundary extraction with run-length merging.
//!
//! The extractor walks the occupancy grid in row-major order and emits one
//! axis-aligned [`Segment`] per maximal run of exposed wall faces:
//!
//! - A face is exposed when the neighbor across it is outside the grid or is
//!   not a wall.
//! - Left/right faces stack into vertical runs that continue from row `y-1`
//!   to row `y` in the same column. Top/bottom faces line up into horizontal
//!   runs that continue from column `x-1` to column `x` in the same row.
//! - A run is kept in an explicit open-run accumulator as a segment index.
//!   Continuing it moves the segment's end point; any wall cell without the
//!   matching exposed face (or any open cell) closes it.
//!
//! Every wall cell records, per side, the id of the segment covering that
//! face. Segment ids index the dense list returned in [`Boundary`], so the
//! list is the sole owner of the geometry.
//!
//! Complexity
//! - One pass over the grid, O(W*H), four face checks per wall cell.

mod extractor;
mod run_accumulator;
mod segment;

pub use segment::{Segment, SegmentId};

use crate::occupancy::{OccupancyGrid, Side};
use serde::Serialize;

/// Edge references of one cell, indexed by [`Side::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellEdges([Option<SegmentId>; 4]);

impl CellEdges {
    #[inline]
    pub fn get(&self, side: Side) -> Option<SegmentId> {
        self.0[side.index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, side: Side, id: SegmentId) {
        self.0[side.index()] = Some(id);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, SegmentId)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(move |side| self.get(side).map(|id| (side, id)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

/// Result of boundary extraction: the segment list plus per-cell references.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundary {
    pub width: usize,
    pub height: usize,
    pub segments: Vec<Segment>,
    #[serde(skip)]
    cell_edges: Vec<CellEdges>,
}

impl Boundary {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index())
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Edge references of cell `(x, y)`, or `None` outside the grid.
    pub fn edges_at(&self, x: usize, y: usize) -> Option<&CellEdges> {
        if x < self.width && y < self.height {
            self.cell_edges.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Total number of faces referenced by wall cells.
    pub fn referenced_face_count(&self) -> usize {
        self.cell_edges.iter().map(|e| e.iter().count()).sum()
    }

    /// Segment count per side, in [`Side::ALL`] order.
    pub fn counts_by_side(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for seg in &self.segments {
            counts[seg.side.index()] += 1;
        }
        counts
    }

    /// Length of the longest merged run, in cells.
    pub fn longest_run(&self) -> f32 {
        self.segments
            .iter()
            .map(Segment::length)
            .fold(0.0, f32::max)
    }
}

/// Extract the merged wall boundary of `grid`.
pub fn extract_boundary(grid: &OccupancyGrid) -> Boundary {
    extractor::BoundaryExtractor::new(grid).extract()
}
