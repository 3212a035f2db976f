//! Widget state owned by the hosting runtime.

use serde::{Deserialize, Serialize};

/// Sentinel dropdown value selecting every launch site at once.
pub const ALL_SITES: &str = "ALL";

/// Closed payload-mass interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// True when `mass` falls inside the interval, both ends inclusive.
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.low && mass <= self.high
    }

    /// Reorder the endpoints so `low <= high` holds.
    pub fn normalized(self) -> Self {
        if self.low <= self.high {
            self
        } else {
            Self { low: self.high, high: self.low }
        }
    }
}

/// Current user-selected values of the dropdown and range slider.
///
/// Read-only to the query handlers; only the dispatcher (or the hosting
/// runtime's signals) ever replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetState {
    pub selected_site: String,
    pub payload_range: PayloadRange,
}

impl WidgetState {
    /// Initial state: all sites, full payload range.
    pub fn initial(payload_range: PayloadRange) -> Self {
        Self {
            selected_site: ALL_SITES.to_string(),
            payload_range,
        }
    }

    pub fn all_sites_selected(&self) -> bool {
        self.selected_site == ALL_SITES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = PayloadRange::new(500.0, 2000.0);
        assert!(range.contains(500.0));
        assert!(range.contains(2000.0));
        assert!(range.contains(1250.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn degenerate_range_matches_exact_value() {
        let range = PayloadRange::new(1500.0, 1500.0);
        assert!(range.contains(1500.0));
        assert!(!range.contains(1500.5));
    }

    #[test]
    fn normalized_reorders_reversed_endpoints() {
        let range = PayloadRange::new(2000.0, 500.0).normalized();
        assert_eq!(range.low, 500.0);
        assert_eq!(range.high, 2000.0);
    }
}
