//! Diagnostics returned next to a refinement result.
//!
//! `RefinementReport` bundles the caller-facing [`RefinementResult`] with a
//! [`RefinementTrace`] describing which path ran, why a fallback happened and
//! how long each stage took.
//!
//! [`RefinementResult`]: crate::types::RefinementResult

pub mod timing;
pub mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{RefinementReport, RefinementTrace};
