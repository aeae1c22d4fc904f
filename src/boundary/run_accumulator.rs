use super::segment::SegmentId;
use crate::occupancy::Side;

/// Open boundary runs during a row-major scan.
///
/// Horizontal runs (top/bottom faces) live only within the current row, so a
/// single slot per side is enough. Vertical runs (left/right faces) continue
/// from one row to the next and need one slot per column.
pub(crate) struct RunAccumulator {
    horizontal: [Option<SegmentId>; 2],
    vertical: Vec<[Option<SegmentId>; 2]>,
}

impl RunAccumulator {
    pub(crate) fn with_columns(width: usize) -> Self {
        Self {
            horizontal: [None; 2],
            vertical: vec![[None; 2]; width],
        }
    }

    /// Top and bottom runs never wrap to the next row.
    pub(crate) fn start_row(&mut self) {
        self.horizontal = [None; 2];
    }

    /// Run that the face `side` of the cell in column `x` would extend.
    pub(crate) fn open(&self, side: Side, x: usize) -> Option<SegmentId> {
        if side.is_vertical() {
            self.vertical[x][Self::slot(side)]
        } else {
            self.horizontal[Self::slot(side)]
        }
    }

    pub(crate) fn continue_run(&mut self, side: Side, x: usize, id: SegmentId) {
        self.set(side, x, Some(id));
    }

    pub(crate) fn close(&mut self, side: Side, x: usize) {
        self.set(side, x, None);
    }

    /// A non-wall cell terminates every run passing through its column and row.
    pub(crate) fn close_all(&mut self, x: usize) {
        for side in Side::ALL {
            self.close(side, x);
        }
    }

    fn set(&mut self, side: Side, x: usize, value: Option<SegmentId>) {
        let slot = Self::slot(side);
        if side.is_vertical() {
            self.vertical[x][slot] = value;
        } else {
            self.horizontal[slot] = value;
        }
    }

    #[inline]
    fn slot(side: Side) -> usize {
        match side {
            Side::Left | Side::Top => 0,
            Side::Right | Side::Bottom => 1,
        }
    }
}
