//! Output file naming.
//!
//! Derived names follow the conventions of the registration and series
//! conversion tools: results sit next to their inputs and carry a short tag.

/// Placeholders for DICOM tags that are missing from a series.
pub const UNKNOWN_NAME: &str = "UnknownName";
pub const UNKNOWN_DATE: &str = "UnknownDate";
pub const UNKNOWN_SERIES: &str = "UnknownSeries";

/// Remove any suffix (from the last `.`) from a file name.
pub fn remove_any_suffix(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// Transform file written for a moving point file: `moving.pts` -> `moving.tfm`.
pub fn transform_name(moving_points: &str) -> String {
    format!("{}.tfm", remove_any_suffix(moving_points))
}

/// Resampled moving image: `moving.png` -> `moving-reg.png`.
pub fn registered_name(moving_image: &str) -> String {
    format!("{}-reg.png", remove_any_suffix(moving_image))
}

/// Fixed/moving overlay image: `moving.png` -> `moving-overlay.png`.
pub fn overlay_name(moving_image: &str) -> String {
    format!("{}-overlay.png", remove_any_suffix(moving_image))
}

/// Make a DICOM string safe to use in a file name.
///
/// Trailing whitespace is trimmed, spaces become `_`, slashes become `-` and
/// asterisks are dropped.
pub fn sanitize(s: &str) -> String {
    s.trim_end()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '/' => Some('-'),
            '*' => None,
            c => Some(c),
        })
        .collect()
}

/// `patient-date-description` name for a converted series.
///
/// A blank description counts as missing. The date is used as given.
pub fn series_name(patient: Option<&str>, date: Option<&str>, description: Option<&str>) -> String {
    let description = description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(UNKNOWN_SERIES);
    format!(
        "{}-{}-{}",
        sanitize(patient.unwrap_or(UNKNOWN_NAME)),
        date.unwrap_or(UNKNOWN_DATE),
        sanitize(description),
    )
}

/// Numbered output for the i-th extracted object: `mask_03.nii.gz`.
pub fn object_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index:02}.nii.gz")
}
