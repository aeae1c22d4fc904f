use super::run_accumulator::RunAccumulator;
use super::segment::{Segment, SegmentId};
use super::{Boundary, CellEdges};
use crate::occupancy::{OccupancyGrid, Side};

pub(crate) struct BoundaryExtractor<'a> {
    grid: &'a OccupancyGrid,
    segments: Vec<Segment>,
    cell_edges: Vec<CellEdges>,
    runs: RunAccumulator,
}

impl<'a> BoundaryExtractor<'a> {
    pub(crate) fn new(grid: &'a OccupancyGrid) -> Self {
        let (w, h) = (grid.width(), grid.height());
        Self {
            grid,
            segments: Vec::new(),
            cell_edges: vec![CellEdges::default(); w * h],
            runs: RunAccumulator::with_columns(w),
        }
    }

    /// Scan the grid row by row, left to right. Each exposed face either
    /// extends the run its predecessor left open or starts a new segment.
    pub(crate) fn extract(mut self) -> Boundary {
        let (w, h) = (self.grid.width(), self.grid.height());
        for y in 0..h {
            self.runs.start_row();
            for x in 0..w {
                if !self.grid.is_wall(x, y) {
                    self.runs.close_all(x);
                    continue;
                }
                for side in Side::ALL {
                    self.visit_face(x, y, side);
                }
            }
        }
        Boundary {
            width: w,
            height: h,
            segments: self.segments,
            cell_edges: self.cell_edges,
        }
    }

    fn visit_face(&mut self, x: usize, y: usize, side: Side) {
        if !self.grid.is_exposed(x, y, side) {
            self.runs.close(side, x);
            return;
        }
        let (start, end) = side.face(x, y);
        let id = match self.runs.open(side, x) {
            Some(id) => {
                self.segments[id.index()].extend_to(end);
                id
            }
            None => {
                let id = SegmentId(self.segments.len() as u32);
                self.segments.push(Segment::new(id, side, start, end));
                id
            }
        };
        self.runs.continue_run(side, x, id);
        self.cell_edges[y * self.grid.width() + x].set(side, id);
    }
}
