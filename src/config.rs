//! Construction and traversal knobs, bundled so callers don't thread theta
//! and the coincidence/depth safety nets through every call individually.
//! Field shape mirrors the `BhConfig` used by the `David-OConnor/barnes_hut`
//! crate this engine's 3D counterpart is built on.

use crate::error::BhConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BhConfig {
    /// Opening angle θ. 0 disables approximation (the tree is walked to every
    /// leaf, giving the exact all-pairs sum up to float reassociation).
    /// Larger values admit more aggregation and more error. Must be >= 0.
    pub theta: f64,
    /// Two particles closer together than this are coalesced into a single
    /// leaf carrying their summed mass, rather than splitting the tree
    /// indefinitely to try to separate them.
    pub coincidence_eps: f64,
    /// Hard cap on insertion recursion depth, as a backstop beyond
    /// `coincidence_eps` for particles that are very close but not within
    /// tolerance, across many halvings of the bounding box.
    pub max_tree_depth: usize,
}

impl Default for BhConfig {
    fn default() -> Self {
        Self {
            theta: 0.5,
            coincidence_eps: 1e-9,
            max_tree_depth: 64,
        }
    }
}

impl BhConfig {
    pub fn validate(&self) -> Result<(), BhConfigError> {
        if self.theta < 0.0 {
            return Err(BhConfigError::NegativeTheta(self.theta));
        }
        if self.coincidence_eps < 0.0 {
            return Err(BhConfigError::NegativeCoincidenceEps(self.coincidence_eps));
        }
        Ok(())
    }
}
