//! Assertion helpers for `TestOcean` integration tests.

use crate::route_risk::RouteStatus;

use super::TestOcean;

impl TestOcean {
    /// Assert an analysis exists and has the given status.
    pub fn assert_status(&self, expected: RouteStatus) {
        let analysis = self
            .analysis()
            .unwrap_or_else(|| panic!("Expected route status {expected:?}, but no analysis"));
        assert_eq!(
            analysis.status, expected,
            "Expected route status {expected:?}, got {:?} (danger level {})",
            analysis.status, analysis.danger_level
        );
    }

    pub fn assert_no_analysis(&self) {
        assert!(
            self.analysis().is_none(),
            "Expected no route analysis, got {:?}",
            self.analysis()
        );
    }

    pub fn assert_safety_score(&self, expected: u32) {
        let score = self
            .analysis()
            .map(|a| a.safety_score)
            .unwrap_or_else(|| panic!("Expected safety score {expected}, but no analysis"));
        assert_eq!(score, expected, "Expected safety score {expected}, got {score}");
    }
}
