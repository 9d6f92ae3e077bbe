//! Force kernels: pure functions of `(m1, m2, delta)` where `delta` points
//! from the probe to the source (or source aggregate). The engine invokes
//! these read-only; they carry no state of their own.

use crate::geometry::Point2;

/// SI gravitational constant (m^3 kg^-1 s^-2). Callers working in a
/// different unit system — as `causal_grav` does, converting into
/// kpc/Myr/M☉ in its own `units` module — should supply their own kernel
/// closure instead of `gravity2`.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Newtonian inverse-square attraction, no softening. Returns zero on zero
/// displacement, per the kernel contract.
pub fn gravity2(m1: f64, m2: f64, delta: Point2) -> Point2 {
    let r2 = delta.magnitude_sq();
    if r2 <= 0.0 {
        return Point2::new_zero();
    }
    let r = r2.sqrt();
    delta * (GRAVITATIONAL_CONSTANT * m1 * m2 / (r2 * r))
}

/// Plummer-softened variant: non-singular as `delta` approaches zero.
/// Grounded in `causal_grav::accel::acc_newton_inner`'s `softening_factor_sq`
/// term, useful when probing coincident or near-coincident bodies with a
/// kernel that shouldn't blow up.
pub fn gravity2_softened(m1: f64, m2: f64, delta: Point2, softening_sq: f64) -> Point2 {
    let r2 = delta.magnitude_sq() + softening_sq;
    if r2 <= 0.0 {
        return Point2::new_zero();
    }
    delta * (GRAVITATIONAL_CONSTANT * m1 * m2 / (r2 * r2.sqrt()))
}
