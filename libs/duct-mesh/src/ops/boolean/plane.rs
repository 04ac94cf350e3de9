//! # Plane for BSP Operations
//!
//! Plane representation with point classification.

use glam::DVec3;

/// Epsilon for floating point comparisons.
///
/// Matches the csg.js value: thick enough to absorb extrusion arithmetic,
/// thin enough to split millimetre-scale features cleanly.
pub(crate) const EPSILON: f64 = 1.0e-5;

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// In front of the plane (positive side).
    Front,
    /// Behind the plane (negative side).
    Back,
    /// On the plane.
    Coplanar,
    /// Spanning the plane (vertices on both sides).
    Spanning,
}

/// A plane in 3D space defined by unit normal and distance from origin.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane from three points in counter-clockwise order.
    ///
    /// Returns `None` for a degenerate (collinear) triple.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        let len = normal.length();
        if len < EPSILON {
            return None;
        }
        let normal = normal / len;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// The plane normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Flips the plane (reverses the normal).
    #[must_use]
    pub fn flip(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > EPSILON {
            Classification::Front
        } else if dist < -EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_from_ccw_points_faces_up() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).expect("valid triple");
        assert!((plane.normal().z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn collinear_points_give_no_plane() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn classify_points_around_the_xy_plane() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).expect("valid triple");
        assert_eq!(
            plane.classify_point(DVec3::new(0.0, 0.0, 1.0)),
            Classification::Front
        );
        assert_eq!(
            plane.classify_point(DVec3::new(0.0, 0.0, -1.0)),
            Classification::Back
        );
        assert_eq!(
            plane.classify_point(DVec3::new(3.0, -2.0, 0.0)),
            Classification::Coplanar
        );
    }

    #[test]
    fn flip_negates_normal_and_distance() {
        let plane = Plane::from_points(
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::new(1.0, 0.0, 5.0),
            DVec3::new(0.0, 1.0, 5.0),
        )
        .expect("valid triple");
        let flipped = plane.flip();
        assert!((flipped.normal().z + 1.0).abs() < EPSILON);
        assert!((flipped.signed_distance(DVec3::new(0.0, 0.0, 5.0))).abs() < EPSILON);
    }
}
