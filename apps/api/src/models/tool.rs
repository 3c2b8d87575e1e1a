#![allow(dead_code)]

//! AI tool model for the leaderboard — static reference data with a
//! per-dimension neurodivergent assessment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pricing {
    Free,
    Freemium,
    Paid,
}

impl Pricing {
    pub fn label(&self) -> &'static str {
        match self {
            Pricing::Free => "Free",
            Pricing::Freemium => "Freemium",
            Pricing::Paid => "Paid",
        }
    }
}

/// Assessment dimensions, each 1–10. `overall` must equal the arithmetic
/// mean of the four dimensions within rounding tolerance; the catalog
/// recomputes it at load when it drifts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssessmentScores {
    pub lateral_thinking: f64,
    pub linear_thinking: f64,
    pub language_adaptability: f64,
    pub neurodivergent_awareness: f64,
    pub overall: f64,
}

impl AssessmentScores {
    pub fn mean(&self) -> f64 {
        (self.lateral_thinking
            + self.linear_thinking
            + self.language_adaptability
            + self.neurodivergent_awareness)
            / 4.0
    }

    /// True when `overall` agrees with the component mean within `tolerance`.
    pub fn overall_consistent(&self, tolerance: f64) -> bool {
        (self.overall - self.mean()).abs() <= tolerance
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiTool {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub pricing: Pricing,
    pub assessment: AssessmentScores,
}
