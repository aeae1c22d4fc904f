//! Color classification of input images into occupancy grids.
//!
//! Each pixel becomes one cell. A pixel is a wall when every channel is
//! within `tolerance` of the wall color; otherwise an observer when it
//! matches the observer color the same way; otherwise empty.

use crate::image::ImageView;
use crate::occupancy::{CellClass, OccupancyGrid};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorClassifier {
    pub wall: [u8; 3],
    pub observer: [u8; 3],
    /// Maximum per-channel deviation still counted as a match.
    pub tolerance: u8,
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self {
            wall: [0, 0, 0],
            observer: [0, 255, 0],
            tolerance: 0,
        }
    }
}

impl ColorClassifier {
    #[inline]
    fn matches(&self, pixel: [u8; 3], target: [u8; 3]) -> bool {
        pixel
            .iter()
            .zip(target.iter())
            .all(|(&p, &t)| p.abs_diff(t) <= self.tolerance)
    }

    pub fn classify(&self, pixel: [u8; 3]) -> CellClass {
        if self.matches(pixel, self.wall) {
            CellClass::Wall
        } else if self.matches(pixel, self.observer) {
            CellClass::Observer
        } else {
            CellClass::Empty
        }
    }
}

/// Build an occupancy grid with one cell per pixel.
pub fn grid_from_image<I>(image: &I, classifier: &ColorClassifier) -> OccupancyGrid
where
    I: ImageView<Pixel = [u8; 3]>,
{
    OccupancyGrid::from_fn(image.width(), image.height(), |x, y| {
        classifier.classify(image.row(y)[x])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbImageU8;
    use crate::occupancy::Observer;

    #[test]
    fn default_colors_follow_black_walls_and_green_observers() {
        let c = ColorClassifier::default();
        assert_eq!(c.classify([0, 0, 0]), CellClass::Wall);
        assert_eq!(c.classify([0, 255, 0]), CellClass::Observer);
        assert_eq!(c.classify([255, 255, 255]), CellClass::Empty);
        assert_eq!(c.classify([1, 0, 0]), CellClass::Empty);
    }

    #[test]
    fn tolerance_absorbs_compression_noise() {
        let c = ColorClassifier {
            tolerance: 8,
            ..Default::default()
        };
        assert_eq!(c.classify([5, 3, 8]), CellClass::Wall);
        assert_eq!(c.classify([4, 250, 2]), CellClass::Observer);
        assert_eq!(c.classify([9, 0, 0]), CellClass::Empty);
    }

    #[test]
    fn image_pixels_map_to_cells() {
        let w = [255u8, 255, 255];
        let b = [0u8, 0, 0];
        let g = [0u8, 255, 0];
        let img = RgbImageU8::new(3, 2, vec![b, w, g, w, b, w]).unwrap();
        let grid = grid_from_image(&img.as_view(), &ColorClassifier::default());
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert!(grid.is_wall(0, 0));
        assert!(grid.is_wall(1, 1));
        assert_eq!(grid.wall_count(), 2);
        assert_eq!(grid.observers(), &[Observer::new(2, 0)]);
    }
}
