//! medkit core - landmark files, output naming and histograms.
//!
//! This crate provides:
//!
//! - **Points**: Elastix landmark file reading and point-list helpers
//! - **Naming**: derived output names for registration and series conversion
//! - **Histogram**: fixed-bin intensity histograms
//!
//! # Example
//!
//! ```ignore
//! use medkit_core::points::{read_points, flatten_point_list};
//!
//! let fixed = read_points("fixed.pts")?;
//! println!("{:?}", flatten_point_list(&fixed));
//! ```

pub mod histogram;
pub mod naming;
pub mod points;

// Re-export commonly used types
pub use histogram::{Histogram, HistogramError};
pub use points::{read_points, Point, PointsError};
