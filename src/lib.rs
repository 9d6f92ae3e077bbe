//! 2D Barnes-Hut n-body approximation.
//!
//! Builds a mass-weighted quadtree over a set of massive points and
//! approximates the net pairwise force on a probe body under the
//! Barnes-Hut opening-angle criterion, reducing pairwise interaction
//! computation from O(N^2) to O(N log N). The force law is supplied by the
//! caller as a kernel `Fn(m1, m2, delta) -> Point2`; [`gravity2`] and
//! [`gravity2_softened`] cover the common gravitational case.
//!
//! ```
//! use barnes_hut2d::{BhConfig, Body2, Plane, Point2, gravity2};
//!
//! let bodies = vec![
//!     Body2::new(Point2::new(1.0, 1.0), 1.0),
//!     Body2::new(Point2::new(-1.0, 1.0), 1.0),
//!     Body2::new(Point2::new(-1.0, -1.0), 1.0),
//! ];
//! let plane = Plane::build(&bodies);
//! let cfg = BhConfig::default();
//! let force_on_first = plane.force_on(0, &cfg, gravity2);
//! ```
//!
//! Construction is total and single-threaded; a built [`Plane`] is
//! immutable and `force_on` queries are reentrant — safe to call from
//! multiple threads on disjoint probes without synchronization, or in bulk
//! via [`Plane::forces_on_all`]. The tree is not incrementally updatable:
//! moving a body requires rebuilding.

mod config;
mod error;
mod geometry;
mod kernel;
mod particle;
mod plane;
mod tree;

pub use config::BhConfig;
pub use error::BhConfigError;
pub use geometry::{Box2, Point2, Quadrant};
pub use kernel::{gravity2, gravity2_softened, GRAVITATIONAL_CONSTANT};
pub use particle::{Body2, Particle2};
pub use plane::{Plane, PlaneStats};
pub use tree::QuadNode;
