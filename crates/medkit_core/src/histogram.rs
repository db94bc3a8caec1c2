//! Fixed-bin intensity histograms.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Standard Hounsfield unit range for CT volumes.
pub const HOUNSFIELD_RANGE: (f64, f64) = (-1000.0, 2000.0);

pub const DEFAULT_BINS: usize = 50;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistogramError {
    #[error("histogram needs at least one bin")]
    NoBins,

    #[error("no samples to derive a range from")]
    EmptyInput,

    #[error("invalid histogram range [{0}, {1}]")]
    InvalidRange(f64, f64),
}

/// Equal-width histogram over a closed range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bin `samples` into `nbins` equal-width bins.
    ///
    /// Without an explicit `range` the sample minimum and maximum are used.
    /// Samples outside the range are not counted. Every bin is half-open except
    /// the last, which also holds values equal to the maximum. A degenerate
    /// range is widened by 0.5 on each side.
    pub fn compute(
        samples: &[f64],
        nbins: usize,
        range: Option<(f64, f64)>,
    ) -> Result<Self, HistogramError> {
        if nbins == 0 {
            return Err(HistogramError::NoBins);
        }

        let (mut min, mut max) = match range {
            Some(r) => r,
            None => sample_range(samples).ok_or(HistogramError::EmptyInput)?,
        };
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(HistogramError::InvalidRange(min, max));
        }
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / nbins as f64;
        let mut counts = vec![0u64; nbins];
        for &v in samples.iter().filter(|v| (min..=max).contains(*v)) {
            let bin = (((v - min) / width) as usize).min(nbins - 1);
            counts[bin] += 1;
        }

        log::debug!("histogram over [{}, {}]: {} samples", min, max, samples.len());
        Ok(Self { min, max, counts })
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// Lower edge of each bin.
    pub fn bin_starts(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..self.counts.len())
            .map(|i| self.min + width * i as f64)
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram")?;
        writeln!(f, "   bin_start    bin_count")?;
        for (start, count) in self.bin_starts().iter().zip(&self.counts) {
            writeln!(f, "{start:12.2}\t{count}")?;
        }
        Ok(())
    }
}

fn sample_range(samples: &[f64]) -> Option<(f64, f64)> {
    samples
        .iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
