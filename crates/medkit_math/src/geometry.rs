// Physical layout of an image grid.
//
// Maps continuous voxel indices to physical coordinates the same way medical
// image headers do: origin + direction * (spacing * index).

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Bounds;

/// Errors from building an [`ImageGeometry`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("image axis {0} has zero size")]
    EmptyAxis(usize),

    #[error("image spacing must be positive, got {0:?}")]
    InvalidSpacing([f64; 3]),
}

/// Size, spacing, origin and direction of a 3-D image grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageGeometry {
    pub size: [usize; 3],
    pub spacing: DVec3,
    pub origin: DVec3,
    /// Columns are the physical directions of the index axes.
    pub direction: DMat3,
}

impl ImageGeometry {
    /// Unit spacing, zero origin, identity direction.
    pub fn new(size: [usize; 3]) -> Result<Self, GeometryError> {
        if let Some(axis) = size.iter().position(|&n| n == 0) {
            return Err(GeometryError::EmptyAxis(axis));
        }
        Ok(Self {
            size,
            spacing: DVec3::ONE,
            origin: DVec3::ZERO,
            direction: DMat3::IDENTITY,
        })
    }

    pub fn with_spacing(mut self, spacing: DVec3) -> Result<Self, GeometryError> {
        if !spacing.is_finite() || !spacing.cmpgt(DVec3::ZERO).all() {
            return Err(GeometryError::InvalidSpacing(spacing.to_array()));
        }
        self.spacing = spacing;
        Ok(self)
    }

    pub fn with_origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_direction(mut self, direction: DMat3) -> Self {
        self.direction = direction;
        self
    }

    /// Physical position of a (possibly fractional) voxel index.
    pub fn index_to_physical(&self, index: [f64; 3]) -> DVec3 {
        self.origin + self.direction * (self.spacing * DVec3::from_array(index))
    }

    /// Indices of the 8 corner voxels; x varies fastest, then y, then z.
    pub fn corner_indices(&self) -> [[f64; 3]; 8] {
        let last = self.size.map(|n| n.saturating_sub(1) as f64);
        let mut corners = [[0.0; 3]; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            for (axis, c) in corner.iter_mut().enumerate() {
                if (i >> axis) & 1 == 1 {
                    *c = last[axis];
                }
            }
        }
        corners
    }

    /// Physical positions of the 8 corner voxels.
    pub fn corners(&self) -> [DVec3; 8] {
        self.corner_indices().map(|c| self.index_to_physical(c))
    }

    /// Physical bounds of the corner voxel centers.
    pub fn physical_bounds(&self) -> Bounds {
        Bounds::from_points(self.corners())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_rejects_empty_axis() {
        assert_eq!(
            ImageGeometry::new([4, 0, 2]),
            Err(GeometryError::EmptyAxis(1))
        );
    }

    #[test]
    fn test_geometry_rejects_bad_spacing() {
        let geom = ImageGeometry::new([2, 2, 2]).unwrap();
        assert!(geom.with_spacing(DVec3::new(1.0, 0.0, 1.0)).is_err());
        assert!(geom.with_spacing(DVec3::new(1.0, -0.5, 1.0)).is_err());
        assert_eq!(
            geom.with_spacing(DVec3::new(1.0, 1.0, f64::INFINITY)),
            Err(GeometryError::InvalidSpacing([1.0, 1.0, f64::INFINITY]))
        );
        // NaN compares false against everything, so it must not slip through
        let nan = geom.with_spacing(DVec3::new(f64::NAN, 1.0, 1.0));
        assert!(matches!(nan, Err(GeometryError::InvalidSpacing(_))));
    }

    #[test]
    fn test_index_to_physical_identity() {
        let geom = ImageGeometry::new([10, 10, 10]).unwrap();
        assert_eq!(
            geom.index_to_physical([1.0, 2.0, 3.0]),
            DVec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_index_to_physical_spacing_origin() {
        let geom = ImageGeometry::new([10, 10, 10])
            .unwrap()
            .with_spacing(DVec3::new(0.5, 0.5, 2.0))
            .unwrap()
            .with_origin(DVec3::new(-100.0, 50.0, 10.0));

        assert_eq!(
            geom.index_to_physical([2.0, 4.0, 3.0]),
            DVec3::new(-99.0, 52.0, 16.0)
        );
    }

    #[test]
    fn test_index_to_physical_flipped_direction() {
        // LPS to RAS style flip of x and y
        let flip = DMat3::from_diagonal(DVec3::new(-1.0, -1.0, 1.0));
        let geom = ImageGeometry::new([4, 4, 4]).unwrap().with_direction(flip);

        assert_eq!(
            geom.index_to_physical([1.0, 2.0, 3.0]),
            DVec3::new(-1.0, -2.0, 3.0)
        );
    }

    #[test]
    fn test_corner_indices_order() {
        let geom = ImageGeometry::new([3, 5, 7]).unwrap();
        let corners = geom.corner_indices();

        assert_eq!(corners[0], [0.0, 0.0, 0.0]);
        assert_eq!(corners[1], [2.0, 0.0, 0.0]);
        assert_eq!(corners[2], [0.0, 4.0, 0.0]);
        assert_eq!(corners[3], [2.0, 4.0, 0.0]);
        assert_eq!(corners[4], [0.0, 0.0, 6.0]);
        assert_eq!(corners[7], [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_physical_bounds() {
        let geom = ImageGeometry::new([11, 21, 5])
            .unwrap()
            .with_spacing(DVec3::new(0.5, 1.0, 2.5))
            .unwrap()
            .with_origin(DVec3::new(1.0, 1.0, 1.0));
        let bounds = geom.physical_bounds();

        assert_eq!(bounds.min_corner(), DVec3::new(1.0, 1.0, 1.0));
        assert_eq!(bounds.max_corner(), DVec3::new(6.0, 21.0, 11.0));
    }

    #[test]
    fn test_physical_bounds_single_voxel() {
        let geom = ImageGeometry::new([1, 1, 1])
            .unwrap()
            .with_origin(DVec3::new(3.0, 2.0, 1.0));
        let bounds = geom.physical_bounds();

        assert_eq!(bounds.size(), DVec3::ZERO);
        assert_eq!(bounds.centroid(), DVec3::new(3.0, 2.0, 1.0));
    }
}
