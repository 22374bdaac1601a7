//! Age category buckets
//!
//! Coarse age groups used for grouping and for coloring the scatter chart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bucket derived from a customer's age
///
/// Rules are checked in declaration order and the first match wins.
/// Anything that matches no rule (missing, negative, under 18, or a
/// fractional age between two ranges such as 30.5) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    /// 18 to 30 inclusive
    Young,
    /// 31 to 45 inclusive
    Mid,
    /// 46 and over
    Senior,
    /// Everything else
    Other,
}

impl AgeCategory {
    /// All categories in rule order
    pub const ALL: [AgeCategory; 4] = [
        AgeCategory::Young,
        AgeCategory::Mid,
        AgeCategory::Senior,
        AgeCategory::Other,
    ];

    /// Bucket an age
    pub fn from_age(age: Option<f64>) -> Self {
        match age {
            Some(a) if (18.0..=30.0).contains(&a) => AgeCategory::Young,
            Some(a) if (31.0..=45.0).contains(&a) => AgeCategory::Mid,
            Some(a) if a >= 46.0 => AgeCategory::Senior,
            _ => AgeCategory::Other,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AgeCategory::Young => "Young",
            AgeCategory::Mid => "Mid",
            AgeCategory::Senior => "Senior",
            AgeCategory::Other => "Other",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(AgeCategory::from_age(Some(17.0)), AgeCategory::Other);
        assert_eq!(AgeCategory::from_age(Some(18.0)), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(Some(30.0)), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(Some(31.0)), AgeCategory::Mid);
        assert_eq!(AgeCategory::from_age(Some(45.0)), AgeCategory::Mid);
        assert_eq!(AgeCategory::from_age(Some(46.0)), AgeCategory::Senior);
        assert_eq!(AgeCategory::from_age(Some(99.0)), AgeCategory::Senior);
    }

    #[test]
    fn test_gaps_and_missing_fall_to_other() {
        assert_eq!(AgeCategory::from_age(None), AgeCategory::Other);
        assert_eq!(AgeCategory::from_age(Some(-4.0)), AgeCategory::Other);
        assert_eq!(AgeCategory::from_age(Some(30.5)), AgeCategory::Other);
        assert_eq!(AgeCategory::from_age(Some(45.5)), AgeCategory::Other);
    }

    #[test]
    fn test_every_age_lands_in_exactly_one_bucket() {
        let mut age = -5.0;
        while age <= 120.0 {
            let bucket = AgeCategory::from_age(Some(age));
            let matches = AgeCategory::ALL.iter().filter(|c| **c == bucket).count();
            assert_eq!(matches, 1);
            age += 0.25;
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(AgeCategory::Senior.to_string(), "Senior");
    }
}
