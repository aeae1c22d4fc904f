use image::{Rgb, RgbImage};

/// RGB raster with bounds-checked drawing primitives. Coordinates outside
/// the canvas are silently dropped.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn put(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64 {
            self.image.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    /// Fill the half-open pixel rectangle `[x0, x1) x [y0, y1)`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: [u8; 3]) {
        let xs = x0.max(0)..x1.min(self.width() as i64);
        for y in y0.max(0)..y1.min(self.height() as i64) {
            for x in xs.clone() {
                self.image.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }

    pub fn fill_disc(&mut self, center: [f32; 2], radius: u32, color: [u8; 3]) {
        let (cx, cy) = (center[0].round() as i64, center[1].round() as i64);
        let r = radius as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bresenham line, thickened to a `width`-pixel square brush.
    ///
    /// The line is clipped to the canvas (plus the brush margin) first, so
    /// the cost is bounded by the canvas size however far the end points lie
    /// outside it. Lines with non-finite end points are skipped.
    pub fn draw_line(&mut self, from: [f32; 2], to: [f32; 2], width: u32, color: [u8; 3]) {
        let width = width.max(1) as i64;
        let lo = -((width - 1) / 2);
        let hi = lo + width - 1;

        let margin = width as f64 + 1.0;
        let bounds = [
            -margin,
            self.width() as f64 - 1.0 + margin,
            -margin,
            self.height() as f64 - 1.0 + margin,
        ];
        let Some((from, to)) = clip_line(from, to, bounds) else {
            return;
        };

        let (mut x, mut y) = (from[0].round() as i64, from[1].round() as i64);
        let (x1, y1) = (to[0].round() as i64, to[1].round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            for oy in lo..=hi {
                for ox in lo..=hi {
                    self.put(x + ox, y + oy, color);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        (x < self.width() && y < self.height()).then(|| self.image.get_pixel(x, y).0)
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Liang-Barsky clipping of `from -> to` against `[xmin, xmax, ymin, ymax]`.
///
/// Works in `f64` so that far-away `f32` end points cannot overflow the
/// direction vector.
fn clip_line(from: [f32; 2], to: [f32; 2], bounds: [f64; 4]) -> Option<([f64; 2], [f64; 2])> {
    if !from.iter().chain(to.iter()).all(|v| v.is_finite()) {
        return None;
    }
    let [xmin, xmax, ymin, ymax] = bounds;
    let (x0, y0) = (from[0] as f64, from[1] as f64);
    let (dx, dy) = (to[0] as f64 - x0, to[1] as f64 - y0);

    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [
        (-dx, x0 - xmin),
        (dx, xmax - x0),
        (-dy, y0 - ymin),
        (dy, ymax - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((
        [x0 + t0 * dx, y0 + t0 * dy],
        [x0 + t1 * dx, y0 + t1 * dy],
    ))
}
