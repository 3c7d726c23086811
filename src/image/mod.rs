//! Minimal raster containers used by the edge pipeline.
//!
//! - [`ImageU8`]: borrowed 8-bit grayscale view.
//! - [`GrayImageU8`]: owned 8-bit grayscale buffer (blur, NMS, edge maps).
//! - [`ImageF32`]: owned float plane (gradient magnitude and direction).
//! - [`luma`]: RGB decoding and luma conversion.
//! - [`io`]: PNG/JSON helpers for the bundled tools.
pub mod f32;
pub mod io;
pub mod luma;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::{GrayImageU8, ImageU8};
