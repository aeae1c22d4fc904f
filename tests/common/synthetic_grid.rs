use grid_sight::image::RgbImageU8;
use grid_sight::occupancy::{CellClass, OccupancyGrid};

pub const WALL_RGB: [u8; 3] = [0, 0, 0];
pub const OBSERVER_RGB: [u8; 3] = [0, 255, 0];
pub const FLOOR_RGB: [u8; 3] = [255, 255, 255];

/// A `width` x `height` room enclosed by a one-cell wall border, with
/// observers at the given interior cells.
pub fn bordered_room(width: usize, height: usize, observers: &[(usize, usize)]) -> OccupancyGrid {
    assert!(width >= 3 && height >= 3, "room needs an interior");
    OccupancyGrid::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            CellClass::Wall
        } else if observers.contains(&(x, y)) {
            CellClass::Observer
        } else {
            CellClass::Empty
        }
    })
}

/// Two rooms joined by a doorway, with one observer in each.
pub fn two_rooms() -> OccupancyGrid {
    OccupancyGrid::from_ascii(
        "
#############
#.....#.....#
#..O..#.....#
#...........#
#.....#..@..#
#.....#.....#
#############
",
    )
    .expect("valid floor plan")
}

/// Pseudo-random wall scatter, deterministic in its arguments.
pub fn scattered_walls(width: usize, height: usize, seed: usize) -> OccupancyGrid {
    OccupancyGrid::from_fn(width, height, |x, y| {
        let h = (x * 31 + y * 17 + seed * 7 + (x * y) % 11) % 5;
        if h == 0 {
            CellClass::Wall
        } else if (x + y * width) % 37 == seed % 37 {
            CellClass::Observer
        } else {
            CellClass::Empty
        }
    })
}

/// Paint a grid back into an RGB image, one pixel per cell.
pub fn grid_to_rgb(grid: &OccupancyGrid) -> RgbImageU8 {
    let mut data = Vec::with_capacity(grid.width() * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let px = if grid.is_wall(x, y) {
                WALL_RGB
            } else if grid.observers().iter().any(|o| o.x == x && o.y == y) {
                OBSERVER_RGB
            } else {
                FLOOR_RGB
            };
            data.push(px);
        }
    }
    RgbImageU8::new(grid.width(), grid.height(), data).expect("consistent buffer")
}
