//! `Plane`: the top-level tree. Builds the root from a particle slice,
//! retains the particle list, and exposes the force-query operations.

use crate::{
    config::BhConfig,
    geometry::{Box2, Point2},
    particle::Particle2,
    tree::{self, QuadNode},
};

/// Diagnostic counts over a built [`Plane`], for tests and callers curious
/// about tree shape. Not used by construction or traversal themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PlaneStats {
    pub node_count: usize,
    pub leaf_count: usize,
    pub max_depth: usize,
}

/// Owns the quadtree arena and the particle list it was built from. Built
/// once by [`Plane::build`]; immutable thereafter. `force_on` queries are
/// read-only and reentrant across threads on disjoint probes.
#[derive(Debug)]
pub struct Plane<P> {
    particles: Vec<P>,
    nodes: Vec<QuadNode>,
}

impl<P: Particle2 + Clone> Plane<P> {
    /// Build a plane over `particles` using the default [`BhConfig`]'s
    /// coalescing/depth knobs (theta itself only matters at query time).
    /// An empty slice yields an empty plane: `force_on` then returns zero
    /// for any probe.
    pub fn build(particles: &[P]) -> Self {
        Self::build_with_config(particles, &BhConfig::default())
    }

    pub fn build_with_config(particles: &[P], cfg: &BhConfig) -> Self {
        if particles.is_empty() {
            return Self {
                particles: Vec::new(),
                nodes: Vec::new(),
            };
        }

        let particles = particles.to_vec();
        let bounds = Box2::enclosing(particles.iter().map(|p| p.coord()))
            .expect("non-empty particle slice always yields a bounding box");

        let mut nodes = vec![QuadNode::empty(bounds)];
        for idx in 0..particles.len() {
            tree::insert(&mut nodes, 0, idx, &particles, 0, cfg);
        }
        tree::recompute_aggregates(&mut nodes, 0, &particles);

        Self { particles, nodes }
    }
}

impl<P: Particle2> Plane<P> {
    pub fn particles(&self) -> &[P] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn stats(&self) -> PlaneStats {
        let (node_count, leaf_count, max_depth) = tree::collect_stats(&self.nodes);
        PlaneStats {
            node_count,
            leaf_count,
            max_depth,
        }
    }

    /// The net force on `particles()[probe_idx]` from every other particle
    /// in the plane, approximated under `cfg.theta`. The probe excludes
    /// itself by index identity, not by coordinate comparison, so two
    /// distinct particles sharing a position are still handled correctly.
    pub fn force_on<F>(&self, probe_idx: usize, cfg: &BhConfig, kernel: F) -> Point2
    where
        F: Fn(f64, f64, Point2) -> Point2,
    {
        self.force_on_counting(probe_idx, cfg, kernel).0
    }

    /// As [`Plane::force_on`], additionally returning the number of kernel
    /// invocations made — the quantity the O(log N) scaling property is
    /// stated over.
    pub fn force_on_counting<F>(&self, probe_idx: usize, cfg: &BhConfig, kernel: F) -> (Point2, usize)
    where
        F: Fn(f64, f64, Point2) -> Point2,
    {
        if self.nodes.is_empty() {
            return (Point2::new_zero(), 0);
        }
        let probe = &self.particles[probe_idx];
        let mut calls = 0usize;
        let force = tree::traverse(
            &self.nodes,
            0,
            probe.coord(),
            probe.mass(),
            Some(probe_idx),
            cfg.theta,
            &kernel,
            &mut calls,
        );
        (force, calls)
    }

    /// Force on an arbitrary point not necessarily in the plane's own
    /// particle list (no self-exclusion is applied).
    pub fn force_on_point<F>(&self, probe: Point2, probe_mass: f64, cfg: &BhConfig, kernel: F) -> Point2
    where
        F: Fn(f64, f64, Point2) -> Point2,
    {
        if self.nodes.is_empty() {
            return Point2::new_zero();
        }
        let mut calls = 0usize;
        tree::traverse(
            &self.nodes,
            0,
            probe,
            probe_mass,
            None,
            cfg.theta,
            &kernel,
            &mut calls,
        )
    }
}

impl<P: Particle2 + Sync> Plane<P> {
    /// Compute the force on every particle in the plane concurrently via
    /// `rayon`, following `causal_grav::accel::acc_newton_parallel` and
    /// `David-OConnor/barnes_hut::run_bh`'s use of `par_iter` for exactly
    /// this caller-facing parallel dispatch boundary.
    pub fn forces_on_all<F>(&self, cfg: &BhConfig, kernel: F) -> Vec<Point2>
    where
        F: Fn(f64, f64, Point2) -> Point2 + Sync,
    {
        use rayon::prelude::*;

        (0..self.particles.len())
            .into_par_iter()
            .map(|i| self.force_on(i, cfg, &kernel))
            .collect()
    }
}
