//! # Region
//!
//! A declarative cross-section: additive profiles minus subtractive
//! profiles. The solid layer extrudes both sets along the length axis and
//! applies the boolean difference.

use crate::profile::Profile;
use serde::{Deserialize, Serialize};

/// Additive and subtractive profiles making up one cross-section.
///
/// # Example
///
/// ```rust
/// use duct_profile::{Profile, Region};
/// use glam::DVec2;
///
/// let mut region = Region::new();
/// region.add(Profile::rect(DVec2::new(-5.0, 0.0), DVec2::new(5.0, 10.0)));
/// region.cut(Profile::rect(DVec2::new(-4.0, 1.0), DVec2::new(4.0, 10.5)));
/// assert_eq!(region.additive.len(), 1);
/// assert_eq!(region.subtractive.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Profiles whose extrusions are united.
    pub additive: Vec<Profile>,
    /// Profiles whose extrusions are subtracted from the union.
    pub subtractive: Vec<Profile>,
}

impl Region {
    /// Creates an empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an additive profile.
    pub fn add(&mut self, profile: Profile) {
        self.additive.push(profile);
    }

    /// Appends a subtractive profile.
    pub fn cut(&mut self, profile: Profile) {
        self.subtractive.push(profile);
    }

    /// Appends a sub-shape and its reflection across x = 0 as additive
    /// profiles.
    pub fn add_mirrored(&mut self, profile: Profile) {
        let mirrored = profile.mirror_x();
        self.additive.push(profile);
        self.additive.push(mirrored);
    }

    /// Appends a sub-shape and its reflection across x = 0 as subtractive
    /// profiles.
    pub fn cut_mirrored(&mut self, profile: Profile) {
        let mirrored = profile.mirror_x();
        self.subtractive.push(profile);
        self.subtractive.push(mirrored);
    }

    /// True when no additive profile exists.
    pub fn is_empty(&self) -> bool {
        self.additive.is_empty()
    }
}
