//! Landmark point lists.
//!
//! Landmarks are stored in Elastix point files:
//!
//! ```text
//! point
//! 4
//! 120.5 88.0
//! 301.0 92.25
//! 298.0 240.0
//! 115.0 236.5
//! ```
//!
//! Line 0 is the `index`/`point` header, line 1 the count, and the remaining
//! four lines hold one point each. Two or three numbers per line are used;
//! any further tokens are ignored.

use std::path::Path;

use medkit_math::vector;
use thiserror::Error;

/// A 2-D or 3-D landmark.
pub type Point = Vec<f64>;

/// Number of lines in a landmark file.
pub const POINT_FILE_LINES: usize = 6;

/// Errors that can occur while reading point files.
#[derive(Error, Debug)]
pub enum PointsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected {POINT_FILE_LINES} lines, found {0}")]
    LineCount(usize),

    #[error("invalid number {token:?} on line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {0} has fewer than 2 coordinates")]
    TooFewCoordinates(usize),
}

/// Result type for point file operations.
pub type PointsResult<T> = Result<T, PointsError>;

/// Read an Elastix point file from disk.
pub fn read_points<P: AsRef<Path>>(path: P) -> PointsResult<Vec<Point>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    parse_points(&text).inspect_err(|e| {
        log::warn!("{} seems wonky: {}", path.display(), e);
    })
}

/// Parse the contents of an Elastix point file.
pub fn parse_points(text: &str) -> PointsResult<Vec<Point>> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != POINT_FILE_LINES {
        return Err(PointsError::LineCount(lines.len()));
    }

    lines[2..]
        .iter()
        .enumerate()
        .map(|(i, line)| parse_point(line, i + 2))
        .collect()
}

fn parse_point(line: &str, line_no: usize) -> PointsResult<Point> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return Err(PointsError::TooFewCoordinates(line_no));
    }
    if words.len() > 3 {
        log::debug!("line {}: ignoring {} extra tokens", line_no, words.len() - 3);
    }

    words
        .iter()
        .take(3)
        .map(|w| {
            w.parse::<f64>().map_err(|_| PointsError::InvalidNumber {
                line: line_no,
                token: w.to_string(),
            })
        })
        .collect()
}

/// Flatten a list of points into one coordinate array, as landmark
/// initializers expect.
pub fn flatten_point_list(points: &[Point]) -> Vec<f64> {
    points.iter().flatten().copied().collect()
}

/// Make sure all points are 3-D; 2-D points get `z = 0.0`.
pub fn make_points_3d(points: Vec<Point>) -> Vec<Point> {
    points
        .into_iter()
        .map(|mut p| {
            if p.len() == 2 {
                p.push(0.0);
            }
            p
        })
        .collect()
}

/// Mean of a point list over the dimension shared by every point.
pub fn centroid(points: &[Point]) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    let sum = rest.iter().fold(first.clone(), |acc, p| vector::add(&acc, p));
    Some(vector::scale(&sum, 1.0 / points.len() as f64))
}

/// Distance between corresponding points of two lists.
pub fn residuals(fixed: &[Point], moving: &[Point]) -> Vec<f64> {
    fixed
        .iter()
        .zip(moving)
        .map(|(f, m)| vector::distance(f, m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_2D: &str = "point\n4\n1 2\n3 4\n5 6\n7 8\n";

    #[test]
    fn test_parse_points_2d() {
        let pts = parse_points(SAMPLE_2D).unwrap();
        assert_eq!(
            pts,
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0], vec![7.0, 8.0]]
        );
    }

    #[test]
    fn test_parse_points_3d_and_extra_tokens() {
        let text = "index\n4\n1 2 3\n4 5 6 99\n7.5 8 9\n0 0 0\n";
        let pts = parse_points(text).unwrap();
        assert_eq!(pts[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(pts[1], vec![4.0, 5.0, 6.0]);
        assert_eq!(pts[2], vec![7.5, 8.0, 9.0]);
    }

    #[test]
    fn test_parse_points_wrong_line_count() {
        let err = parse_points("point\n2\n1 2\n3 4\n").unwrap_err();
        assert!(matches!(err, PointsError::LineCount(4)));
    }

    #[test]
    fn test_parse_points_bad_number() {
        let text = "point\n4\n1 2\n3 x\n5 6\n7 8\n";
        match parse_points(text).unwrap_err() {
            PointsError::InvalidNumber { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "x");
            }
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_parse_points_too_few_coordinates() {
        let text = "point\n4\n1 2\n3\n5 6\n7 8\n";
        assert!(matches!(
            parse_points(text).unwrap_err(),
            PointsError::TooFewCoordinates(3)
        ));
    }

    #[test]
    fn test_read_points_from_file() {
        let path = std::env::temp_dir().join(format!("medkit_points_{}.txt", std::process::id()));
        std::fs::write(&path, SAMPLE_2D).unwrap();

        let pts = read_points(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn test_read_points_wonky_file() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = std::env::temp_dir().join(format!("medkit_wonky_{}.txt", std::process::id()));
        std::fs::write(&path, "point\n1\n1 2\n").unwrap();

        let result = read_points(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(PointsError::LineCount(3))));
    }

    #[test]
    fn test_read_points_missing_file() {
        let err = read_points("/nonexistent/medkit/points.txt").unwrap_err();
        assert!(matches!(err, PointsError::Io(_)));
    }

    #[test]
    fn test_flatten_point_list() {
        let pts = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
        assert_eq!(flatten_point_list(&pts), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(flatten_point_list(&[]).is_empty());
    }

    #[test]
    fn test_make_points_3d() {
        let pts = make_points_3d(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(pts, vec![vec![1.0, 2.0, 0.0], vec![3.0, 4.0, 5.0]]);
    }

    #[test]
    fn test_centroid() {
        let pts = parse_points(SAMPLE_2D).unwrap();
        assert_eq!(centroid(&pts), Some(vec![4.0, 5.0]));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_centroid_mixed_dimension_uses_common_prefix() {
        let pts = vec![vec![2.0, 2.0, 2.0], vec![4.0, 4.0]];
        assert_eq!(centroid(&pts), Some(vec![3.0, 3.0]));
    }

    #[test]
    fn test_residuals() {
        let fixed = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let moving = vec![vec![3.0, 4.0], vec![1.0, 1.0]];
        assert_eq!(residuals(&fixed, &moving), vec![5.0, 0.0]);
    }
}
