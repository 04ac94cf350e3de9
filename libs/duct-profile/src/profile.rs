//! # Profile
//!
//! A closed 2D polygon in the cross-section (XY) plane.
//!
//! Profiles are always stored counter-clockwise so the extrusion layer can
//! rely on the winding for outward-facing side quads.

use crate::error::{ProfileError, ProfileResult};
use config::constants::EPSILON_TOLERANCE;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A closed, simple polygon with counter-clockwise winding.
///
/// # Example
///
/// ```rust
/// use duct_profile::Profile;
/// use glam::DVec2;
///
/// let square = Profile::rect(DVec2::ZERO, DVec2::new(10.0, 5.0));
/// assert_eq!(square.vertex_count(), 4);
/// assert!(square.signed_area() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    points: Vec<DVec2>,
}

impl Profile {
    /// Creates a profile from vertices, dropping consecutive duplicates and
    /// normalizing the winding to counter-clockwise.
    ///
    /// # Errors
    ///
    /// Fails when fewer than three distinct vertices remain or the polygon
    /// encloses no area.
    pub fn from_points(points: Vec<DVec2>) -> ProfileResult<Self> {
        let mut distinct: Vec<DVec2> = Vec::with_capacity(points.len());
        for p in points {
            if distinct
                .last()
                .is_some_and(|last| last.distance_squared(p) < EPSILON_TOLERANCE)
            {
                continue;
            }
            distinct.push(p);
        }
        if distinct.len() > 1
            && distinct[0].distance_squared(distinct[distinct.len() - 1]) < EPSILON_TOLERANCE
        {
            distinct.pop();
        }
        if distinct.len() < 3 {
            return Err(ProfileError::Degenerate {
                points: distinct.len(),
            });
        }

        let mut profile = Self { points: distinct };
        let area = profile.signed_area();
        if area.abs() < EPSILON_TOLERANCE {
            return Err(ProfileError::ZeroArea);
        }
        if area < 0.0 {
            profile.points.reverse();
        }
        Ok(profile)
    }

    /// Creates an axis-aligned rectangle from opposite corners.
    #[must_use]
    pub fn rect(min: DVec2, max: DVec2) -> Self {
        Self {
            points: vec![
                DVec2::new(min.x, min.y),
                DVec2::new(max.x, min.y),
                DVec2::new(max.x, max.y),
                DVec2::new(min.x, max.y),
            ],
        }
    }

    /// Returns the polygon vertices in counter-clockwise order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Signed area via the shoelace formula; positive for counter-clockwise
    /// winding.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Axis-aligned bounding box as (min, max) corners.
    pub fn bounding_box(&self) -> (DVec2, DVec2) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }

    /// Translates every vertex by the given offset.
    pub fn translate(&mut self, offset: DVec2) {
        for p in &mut self.points {
            *p += offset;
        }
    }

    /// Reflects the profile across the x = 0 plane.
    ///
    /// The vertex order is reversed so the mirrored polygon stays
    /// counter-clockwise: for every point (x, y) the counterpart is (−x, y),
    /// with matching edge count.
    #[must_use]
    pub fn mirror_x(&self) -> Self {
        let mut points: Vec<DVec2> = self
            .points
            .iter()
            .map(|p| DVec2::new(-p.x, p.y))
            .collect();
        points.reverse();
        Self { points }
    }
}
