//! Layout optimization scores.

use serde::Serialize;

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 100;

/// Four heuristic scores for a proposed layout, each in `[0,100]`.
///
/// Values are computed once by the scorer and never mutated afterwards; the
/// constructor is the only place a score is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationMetrics {
    conversion_potential: u8,
    engagement_score: u8,
    accessibility_score: u8,
    performance_score: u8,
}

impl OptimizationMetrics {
    /// Builds metrics from raw accumulated points, clamping each to 100.
    #[must_use]
    pub fn from_points(conversion: u32, engagement: u32, accessibility: u32, performance: u32) -> Self {
        let clamp = |points: u32| points.min(u32::from(MAX_SCORE)) as u8;
        Self {
            conversion_potential: clamp(conversion),
            engagement_score: clamp(engagement),
            accessibility_score: clamp(accessibility),
            performance_score: clamp(performance),
        }
    }

    /// Likelihood the page converts visitors.
    #[must_use]
    pub const fn conversion_potential(&self) -> u8 {
        self.conversion_potential
    }

    /// How interactive and varied the page is.
    #[must_use]
    pub const fn engagement_score(&self) -> u8 {
        self.engagement_score
    }

    /// Navigability for assistive technology.
    #[must_use]
    pub const fn accessibility_score(&self) -> u8 {
        self.accessibility_score
    }

    /// Rendering cost estimate.
    #[must_use]
    pub const fn performance_score(&self) -> u8 {
        self.performance_score
    }

    /// Unweighted mean of the four scores.
    #[must_use]
    pub fn overall(&self) -> u8 {
        let sum = u32::from(self.conversion_potential)
            + u32::from(self.engagement_score)
            + u32::from(self.accessibility_score)
            + u32::from(self.performance_score);
        (f64::from(sum) / 4.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_clamps() {
        let m = OptimizationMetrics::from_points(150, 100, 0, 101);
        assert_eq!(m.conversion_potential(), 100);
        assert_eq!(m.engagement_score(), 100);
        assert_eq!(m.accessibility_score(), 0);
        assert_eq!(m.performance_score(), 100);
    }

    #[test]
    fn test_serializes_camel_case() {
        let m = OptimizationMetrics::from_points(50, 60, 70, 90);
        let value = serde_json::to_value(m).unwrap();
        assert_eq!(value["conversionPotential"], 50);
        assert_eq!(value["engagementScore"], 60);
        assert_eq!(value["accessibilityScore"], 70);
        assert_eq!(value["performanceScore"], 90);
        assert_eq!(m.overall(), 68);
    }
}
