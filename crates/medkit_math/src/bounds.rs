use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Interval;

/// Axis-aligned bounds of a set of physical points.
///
/// Unlike a padded bounding box, a single point gives zero-size bounds; voxel
/// corners and landmarks are reported exactly.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Bounds {
    /// Smallest bounds containing every point. Empty input gives [`Bounds::EMPTY`].
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec3>,
    {
        points
            .into_iter()
            .fold(Bounds::EMPTY, |bounds, p| bounds.include_point(p))
    }

    /// Grow the bounds so they contain `p`.
    pub fn include_point(&self, p: DVec3) -> Bounds {
        Bounds {
            x: self.x.include(p.x),
            y: self.y.include(p.y),
            z: self.z.include(p.z),
        }
    }

    /// Bounds that surround two other bounds.
    pub fn surrounding(a: &Bounds, b: &Bounds) -> Self {
        Self {
            x: Interval::surrounding(&a.x, &b.x),
            y: Interval::surrounding(&a.y, &b.y),
            z: Interval::surrounding(&a.z, &b.z),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    pub fn min_corner(&self) -> DVec3 {
        DVec3::new(self.x.min, self.y.min, self.z.min)
    }

    pub fn max_corner(&self) -> DVec3 {
        DVec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Extent along each axis.
    pub fn size(&self) -> DVec3 {
        DVec3::new(self.x.size(), self.y.size(), self.z.size())
    }

    /// Returns the center point of the bounds.
    pub fn centroid(&self) -> DVec3 {
        (self.min_corner() + self.max_corner()) * 0.5
    }

    pub const EMPTY: Bounds = Bounds {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}
