use super::traits::ImageView;

/// Borrowed RGB view with a row stride in pixels.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [[u8; 3]],
}

impl<'a> ImageView for ImageRgb8<'a> {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned, tightly packed RGB buffer.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl RgbImageU8 {
    /// Wrap row-major pixels; fails when the length does not match the size.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Result<Self, String> {
        if data.len() != width * height {
            return Err(format!(
                "RGB buffer has {} pixels, expected {width}x{height}",
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
