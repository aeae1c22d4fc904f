use crate::occupancy::Side;
use serde::{Deserialize, Serialize};

/// Index of a segment in the dense segment list produced by the extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

impl SegmentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Maximal straight run of exposed wall boundary on one side of a row or
/// column of wall cells.
///
/// Endpoints live in cell-center coordinates, so every coordinate is an
/// integer offset by 0.5. `p0` is the top/left end, `p1` the bottom/right end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: SegmentId,
    pub side: Side,
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

impl Segment {
    pub fn new(id: SegmentId, side: Side, p0: [f32; 2], p1: [f32; 2]) -> Self {
        Self { id, side, p0, p1 }
    }

    /// Move the end point while the run continues.
    #[inline]
    pub(crate) fn extend_to(&mut self, end: [f32; 2]) {
        self.p1 = end;
    }

    /// Endpoints flattened as `(xs, ys, xe, ye)`.
    pub fn endpoints(&self) -> [f32; 4] {
        [self.p0[0], self.p0[1], self.p1[0], self.p1[1]]
    }

    pub fn length(&self) -> f32 {
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p0[0] == self.p1[0]
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.p0[1] == self.p1[1]
    }

    /// Whether the unit face `[a, b]` lies on this segment.
    pub fn covers(&self, a: [f32; 2], b: [f32; 2]) -> bool {
        let on = |p: [f32; 2]| {
            if self.is_vertical() {
                p[0] == self.p0[0] && p[1] >= self.p0[1] && p[1] <= self.p1[1]
            } else {
                p[1] == self.p0[1] && p[0] >= self.p0[0] && p[0] <= self.p1[0]
            }
        };
        on(a) && on(b)
    }
}
