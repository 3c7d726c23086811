//! Polygon refiners.
//!
//! - [`snap`]: moves vertices onto nearby cells of a Canny [`EdgeMap`].
//! - [`geometric`]: smoothing and angle regularization, the always-available
//!   fallback.
//! - [`projection`]: geographic ↔ pixel mapping for a tile.
//!
//! [`EdgeMap`]: crate::edges::EdgeMap
pub mod geometric;
pub mod options;
pub mod projection;
pub mod snap;

pub use geometric::{geometric_refine, regularize_angles, smooth_polygon};
pub use options::RefineOptions;
pub use projection::PixelProjection;
pub use snap::{nearest_edge_pixel, snap_to_edges, EdgeSnapOutcome};
