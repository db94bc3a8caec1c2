// Re-export the glam types used across the workspace
pub use glam::{DMat3, DVec3};

mod bounds;
mod geometry;
mod interval;
pub mod vector;

pub use bounds::Bounds;
pub use geometry::{GeometryError, ImageGeometry};
pub use interval::Interval;
pub use vector::{VectorError, VectorResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_dvec3_agree() {
        let a = [3.0, 4.0, 12.0];
        let v = DVec3::from_array(a);
        assert_eq!(vector::length(&a), v.length());
        assert_eq!(vector::dot(&a, &a), v.dot(v));
    }
}
