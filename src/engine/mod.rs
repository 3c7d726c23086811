//! Refinement orchestrator.
//!
//! Overview
//! - Validates the rough polygon (at least three vertices).
//! - With an image source: requests a tile for the bounds, decodes it, runs
//!   the configured [`EdgeMapProvider`] (Canny by default) and snaps the
//!   vertices to nearby edges.
//! - Any acquisition or processing failure on that path is captured as an
//!   [`EdgeSnapFailure`](crate::error::EdgeSnapFailure) and answered with the
//!   geometric fallback. Without an image source the fallback runs directly.
//! - The area is always computed on the refined polygon.
//!
//! Modules
//! - [`params`] – configuration of the engine.
//! - [`provider`] – swappable edge map strategies.
//! - `pipeline` – the [`BoundaryRefiner`] implementation.

pub mod params;
mod pipeline;
pub mod provider;

pub use params::EngineParams;
pub use pipeline::BoundaryRefiner;
pub use provider::{EdgeMapProvider, PrecomputedEdges};
