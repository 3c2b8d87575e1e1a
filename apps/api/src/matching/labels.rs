//! Score banding — maps a [0,10] score to a display band. Kept separate
//! from any rendering concern; the band enum is what the API surfaces and
//! the "How We Score" page documents, so the thresholds here are contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Okay,
    Poor,
    VeryPoor,
}

impl ScoreBand {
    /// Boundary values resolve to the higher band: exactly 9.0 is excellent,
    /// exactly 7.0 is good, and so on.
    pub fn for_score(score: f64) -> Self {
        match score {
            s if s >= 9.0 => ScoreBand::Excellent,
            s if s >= 7.0 => ScoreBand::Good,
            s if s >= 5.0 => ScoreBand::Okay,
            s if s >= 3.0 => ScoreBand::Poor,
            _ => ScoreBand::VeryPoor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Okay => "Okay",
            ScoreBand::Poor => "Poor",
            ScoreBand::VeryPoor => "Very poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_resolve_to_higher_band() {
        assert_eq!(ScoreBand::for_score(9.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(7.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(5.0), ScoreBand::Okay);
        assert_eq!(ScoreBand::for_score(3.0), ScoreBand::Poor);
    }

    #[test]
    fn test_just_below_boundary_drops_a_band() {
        assert_eq!(ScoreBand::for_score(8.999), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(6.999), ScoreBand::Okay);
        assert_eq!(ScoreBand::for_score(4.999), ScoreBand::Poor);
        assert_eq!(ScoreBand::for_score(2.999), ScoreBand::VeryPoor);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(ScoreBand::for_score(10.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(0.0), ScoreBand::VeryPoor);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(ScoreBand::Excellent.label(), "Excellent");
        assert_eq!(ScoreBand::VeryPoor.label(), "Very poor");
    }

    #[test]
    fn test_band_wire_form() {
        assert_eq!(
            serde_json::to_string(&ScoreBand::VeryPoor).unwrap(),
            r#""very-poor""#
        );
    }
}
