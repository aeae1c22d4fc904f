use serde::{Deserialize, Serialize};

/// Classification of a single grid cell supplied by the ingestion layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellClass {
    #[default]
    Empty,
    Wall,
    Observer,
}

/// One of the four faces of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// Visiting order used by the boundary extractor.
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Top => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }

    /// Offset from a cell to its neighbor across this face (y grows downwards).
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Side::Left => (-1, 0),
            Side::Top => (0, -1),
            Side::Right => (1, 0),
            Side::Bottom => (0, 1),
        }
    }

    /// Faces on the left/right of a cell stack into vertical runs; top/bottom
    /// faces line up into horizontal runs.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    /// Start and end point of the unit face of cell `(x, y)` in cell-center
    /// coordinates. Start is always the top/left end so that extending a run
    /// only ever moves the end point.
    pub fn face(self, x: usize, y: usize) -> ([f32; 2], [f32; 2]) {
        let (xf, yf) = (x as f32, y as f32);
        match self {
            Side::Left => ([xf - 0.5, yf - 0.5], [xf - 0.5, yf + 0.5]),
            Side::Top => ([xf - 0.5, yf - 0.5], [xf + 0.5, yf - 0.5]),
            Side::Right => ([xf + 0.5, yf - 0.5], [xf + 0.5, yf + 0.5]),
            Side::Bottom => ([xf - 0.5, yf + 0.5], [xf + 0.5, yf + 0.5]),
        }
    }
}

/// Observer location in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observer {
    pub x: usize,
    pub y: usize,
}

impl Observer {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Casting origin: the cell center, in the same space as segment endpoints.
    #[inline]
    pub fn position(&self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}
