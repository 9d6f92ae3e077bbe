//! The crate's (deliberately small) error taxonomy.
//!
//! Construction and traversal are total, per the engine's design: there is
//! no `Result` on the hot path. The one caller-facing fallible operation is
//! validating a [`crate::BhConfig`] up front, for callers who'd rather catch
//! a negative theta at config time than silently invert the opening
//! criterion at traversal time.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BhConfigError {
    #[error("BhConfig::theta must be non-negative, got {0}")]
    NegativeTheta(f64),
    #[error("BhConfig::coincidence_eps must be non-negative, got {0}")]
    NegativeCoincidenceEps(f64),
}
