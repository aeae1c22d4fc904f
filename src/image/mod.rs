pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{ImageRgb8, RgbImageU8};
pub use self::traits::ImageView;
