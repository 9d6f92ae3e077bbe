//! 2D point arithmetic and axis-aligned box operations.
//!
//! `Point2` plays the role `lin_alg::f64::Vec3` plays in `causal_grav`'s own
//! code: an immutable value type with the usual vector operators. It's
//! defined here, rather than pulled in from a vector crate, because the
//! quadrant split and bounding-box logic below are the actual subject of
//! this crate, not incidental plumbing.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "encode", derive(bincode::Encode, bincode::Decode))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn new_zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn magnitude_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn to_normalized(self) -> Self {
        let mag = self.magnitude();
        if mag <= f64::EPSILON {
            return Self::new_zero();
        }
        self / mag
    }
}

impl Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Point2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Point2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

/// One of the four axis-aligned sub-rectangles formed by splitting a `Box2`
/// at its midpoint. Naming follows compass convention with north at the
/// y-minimum edge; see `Box2::quadrant_of` for the exact tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    Ne = 0,
    Nw = 1,
    Sw = 2,
    Se = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Ne, Quadrant::Nw, Quadrant::Sw, Quadrant::Se];
}

/// Axis-aligned rectangle. Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "encode", derive(bincode::Encode, bincode::Decode))]
pub struct Box2 {
    pub min: Point2,
    pub max: Point2,
}

impl Box2 {
    pub const fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Construct the tightest axis-aligned box enclosing `points`. `None` if
    /// `points` is empty.
    pub fn enclosing(mut points: impl Iterator<Item = Point2>) -> Option<Self> {
        let first = points.next()?;
        let mut min = first;
        let mut max = first;

        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Some(Self { min, max })
    }

    pub fn contains(&self, p: Point2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// The width used by the Barnes-Hut opening criterion: the wider of the
    /// box's two axis extents.
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(self.max.y - self.min.y)
    }

    /// Which quadrant of this box `p` falls in, under the fixed tie-break
    /// `NE iff x >= mx && y < my`, `NW iff x < mx && y < my`,
    /// `SW iff x < mx && y >= my`, `SE iff x >= mx && y >= my`. A point
    /// exactly on the midpoint has `y < my` false, so it lands in SE.
    pub fn quadrant_of(&self, p: Point2) -> Quadrant {
        let m = self.midpoint();
        match (p.x >= m.x, p.y < m.y) {
            (true, true) => Quadrant::Ne,
            (false, true) => Quadrant::Nw,
            (false, false) => Quadrant::Sw,
            (true, false) => Quadrant::Se,
        }
    }

    /// Split into the four quadrant sub-boxes. These partition `self` exactly
    /// (shared edges are assigned consistently with `quadrant_of`).
    pub fn sub_box(&self, q: Quadrant) -> Box2 {
        let m = self.midpoint();
        match q {
            Quadrant::Ne => Box2::new(Point2::new(m.x, self.min.y), Point2::new(self.max.x, m.y)),
            Quadrant::Nw => Box2::new(self.min, m),
            Quadrant::Sw => Box2::new(Point2::new(self.min.x, m.y), Point2::new(m.x, self.max.y)),
            Quadrant::Se => Box2::new(m, self.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_assignment_matches_spec() {
        let b = Box2::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0));
        assert_eq!(b.quadrant_of(Point2::new(0.5, -0.5)), Quadrant::Ne);
        assert_eq!(b.quadrant_of(Point2::new(-0.5, -0.5)), Quadrant::Nw);
        assert_eq!(b.quadrant_of(Point2::new(-0.5, 0.5)), Quadrant::Sw);
        assert_eq!(b.quadrant_of(Point2::new(0.5, 0.5)), Quadrant::Se);
        // On the midpoint itself: SE, since `y < my` is false there.
        assert_eq!(b.quadrant_of(Point2::new(0.0, 0.0)), Quadrant::Se);
    }

    #[test]
    fn sub_boxes_partition_the_parent() {
        let b = Box2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0));
        for q in Quadrant::ALL {
            let sub = b.sub_box(q);
            assert!(sub.min.x >= b.min.x && sub.max.x <= b.max.x);
            assert!(sub.min.y >= b.min.y && sub.max.y <= b.max.y);
        }
        assert_eq!(b.sub_box(Quadrant::Ne).width(), 2.0);
    }

    #[test]
    fn enclosing_is_tight() {
        let pts = [
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(-1.0, -1.0),
        ];
        let b = Box2::enclosing(pts.into_iter()).unwrap();
        assert_eq!(b.min, Point2::new(-1.0, -1.0));
        assert_eq!(b.max, Point2::new(1.0, 1.0));
        for p in pts {
            assert!(b.contains(p));
        }
    }

    #[test]
    fn enclosing_empty_is_none() {
        assert!(Box2::enclosing(std::iter::empty()).is_none());
    }
}
