//! Occupancy grid model.
//!
//! A grid is a row-major array of wall flags plus the list of observer cells.
//! It is built once from a per-cell classification and is read-only for the
//! rest of the pipeline. Coordinates are `(x, y)` with `y` growing downwards;
//! every neighbor query is bounds-checked and reports out-of-grid cells as
//! absent.

mod cell;

pub use cell::{CellClass, Observer, Side};

use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    #[serde(skip)]
    walls: Vec<bool>,
    observers: Vec<Observer>,
}

impl OccupancyGrid {
    /// Build a grid by classifying every cell in row-major order.
    ///
    /// A zero width or height yields an empty grid without observers.
    pub fn from_fn<F>(width: usize, height: usize, mut classify: F) -> Self
    where
        F: FnMut(usize, usize) -> CellClass,
    {
        if width == 0 || height == 0 {
            return Self::default();
        }
        let mut walls = vec![false; width * height];
        let mut observers = Vec::new();
        for y in 0..height {
            for x in 0..width {
                match classify(x, y) {
                    CellClass::Wall => walls[y * width + x] = true,
                    CellClass::Observer => observers.push(Observer::new(x, y)),
                    CellClass::Empty => {}
                }
            }
        }
        Self {
            width,
            height,
            walls,
            observers,
        }
    }

    /// Build a grid from a row-major classification table.
    pub fn from_classes(width: usize, height: usize, classes: &[CellClass]) -> Result<Self, String> {
        let expected = width * height;
        if classes.len() != expected {
            return Err(format!(
                "Class table has {} cells, expected {width}x{height}={expected}",
                classes.len()
            ));
        }
        Ok(Self::from_fn(width, height, |x, y| classes[y * width + x]))
    }

    /// Parse an ASCII map: `#` wall, `O` or `@` observer, `.` or space empty.
    ///
    /// Leading and trailing empty lines are ignored; all remaining rows must
    /// have the same length. A line of spaces is a row of empty cells.
    pub fn from_ascii(map: &str) -> Result<Self, String> {
        let rows: Vec<&str> = map
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .skip_while(|l| l.is_empty())
            .collect();
        let rows: Vec<&str> = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => Vec::new(),
        };
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());

        let mut classes = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(format!(
                    "Map row {y} has {len} cells, expected {width}"
                ));
            }
            for (x, ch) in row.chars().enumerate() {
                let class = match ch {
                    '#' => CellClass::Wall,
                    'O' | '@' => CellClass::Observer,
                    '.' | ' ' => CellClass::Empty,
                    other => {
                        return Err(format!("Unknown map symbol {other:?} at ({x}, {y})"));
                    }
                };
                classes.push(class);
            }
        }
        Self::from_classes(width, height, &classes)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn observers(&self) -> &[Observer] {
        &self.observers
    }

    /// Wall flag at `(x, y)`; cells outside the grid are not walls.
    #[inline]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.walls[y * self.width + x]
    }

    /// Neighbor of `(x, y)` across `side`, or `None` when it lies outside the grid.
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, side: Side) -> Option<(usize, usize)> {
        let (dx, dy) = side.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < self.width && ny < self.height).then_some((nx, ny))
    }

    /// A wall face is exposed when the neighbor across it is absent or open.
    #[inline]
    pub fn is_exposed(&self, x: usize, y: usize, side: Side) -> bool {
        match self.neighbor(x, y, side) {
            Some((nx, ny)) => !self.is_wall(nx, ny),
            None => true,
        }
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Number of `(wall cell, side)` pairs with an exposed face.
    pub fn exposed_face_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_wall(x, y) {
                    count += Side::ALL
                        .iter()
                        .filter(|&&side| self.is_exposed(x, y, side))
                        .count();
                }
            }
        }
        count
    }

    /// Diagonal extent of the grid in cell units.
    pub fn diagonal(&self) -> f32 {
        let (w, h) = (self.width as f32, self.height as f32);
        (w * w + h * h).sqrt()
    }
}
