//! Equal-width histogram of customer spending

use serde::{Deserialize, Serialize};

/// One histogram bucket covering `[lower, upper)`; the last bucket also
/// includes its upper edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Spending distribution
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bucket values into `bin_count` equal-width bins over their min..max
    ///
    /// When every value is equal the range is widened to `v - 0.5 .. v + 0.5`.
    /// No values (or zero bins) produce an empty histogram.
    pub fn from_values(values: &[f64], bin_count: usize) -> Self {
        if values.is_empty() || bin_count == 0 {
            return Self::default();
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bin_count {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for value in values {
            let idx = (((value - lo) / width).floor() as usize).min(bin_count - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of values counted
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bucket count
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_equal_bins() {
        let values: Vec<f64> = (0..=100).map(|v| v as f64).collect();
        let hist = Histogram::from_values(&values, 10);

        assert_eq!(hist.bins.len(), 10);
        assert_eq!(hist.bins[0].lower, 0.0);
        assert_eq!(hist.bins[9].upper, 100.0);
        assert_eq!(hist.total(), 101);
        // 0..=9 in the first bin, 90..=100 in the last
        assert_eq!(hist.bins[0].count, 10);
        assert_eq!(hist.bins[9].count, 11);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let hist = Histogram::from_values(&[1.0, 2.0, 3.0], 2);
        assert_eq!(hist.bins[0].count, 1);
        assert_eq!(hist.bins[1].count, 2);
    }

    #[test]
    fn test_single_distinct_value() {
        let hist = Histogram::from_values(&[100.0, 100.0], 10);

        assert_eq!(hist.bins.len(), 10);
        assert_eq!(hist.bins[0].lower, 99.5);
        assert_eq!(hist.bins[9].upper, 100.5);
        assert_eq!(hist.total(), 2);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(Histogram::from_values(&[], 10).is_empty());
        assert!(Histogram::from_values(&[1.0], 0).is_empty());
        assert_eq!(Histogram::default().max_count(), 0);
    }
}
