#![allow(dead_code)]

//! Job model — static reference data the matching engine scores against.
//! Loaded once at startup by the catalog; never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::models::profile::{Challenge, Strength};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobLevel {
    Entry,
    Mid,
    Senior,
}

impl JobLevel {
    pub fn label(&self) -> &'static str {
        match self {
            JobLevel::Entry => "Entry level",
            JobLevel::Mid => "Mid level",
            JobLevel::Senior => "Senior level",
        }
    }
}

/// Shared low/medium/high scale for noise and lighting demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialDemand {
    Minimal,
    Moderate,
    High,
}

impl SocialDemand {
    pub fn label(&self) -> &'static str {
        match self {
            SocialDemand::Minimal => "Minimal interaction",
            SocialDemand::Moderate => "Moderate interaction",
            SocialDemand::High => "High interaction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthOutlook {
    Declining,
    Stable,
    Growing,
}

impl GrowthOutlook {
    pub fn label(&self) -> &'static str {
        match self {
            GrowthOutlook::Declining => "Declining",
            GrowthOutlook::Stable => "Stable",
            GrowthOutlook::Growing => "Growing",
        }
    }
}

/// Annual salary range in whole dollars. Invariant: min ≤ max.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    /// Range-overlap test against a filter window — overlap, not containment.
    pub fn overlaps(&self, min: u32, max: u32) -> bool {
        self.max >= min && self.min <= max
    }
}

/// Typical team size as a proper range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TeamSize {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensoryDemands {
    pub noise: Intensity,
    pub lights: Intensity,
    pub open_plan: bool,
    pub remote: bool,
}

/// The strength/challenge profile a role tends to reward or strain, plus a
/// 1–10 editorial baseline fit score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveProfile {
    #[serde(default)]
    pub strengths: Vec<Strength>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub industry: String,
    pub description: String,
    pub level: JobLevel,
    pub salary: SalaryRange,
    pub cognitive_profile: CognitiveProfile,
    /// 1 = safe from automation, 10 = high automation risk.
    pub ai_risk_score: u8,
    pub sensory_demands: SensoryDemands,
    pub social_demands: SocialDemand,
    pub team_size: TeamSize,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub skills_needed: Vec<String>,
    pub growth_outlook: GrowthOutlook,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_overlap_is_not_containment() {
        let salary = SalaryRange {
            min: 40_000,
            max: 60_000,
        };
        // Window only touches the bottom of the range — still an overlap.
        assert!(salary.overlaps(30_000, 40_000));
        // Window only touches the top.
        assert!(salary.overlaps(60_000, 90_000));
        // Window strictly inside the range.
        assert!(salary.overlaps(45_000, 55_000));
        // Disjoint windows.
        assert!(!salary.overlaps(61_000, 90_000));
        assert!(!salary.overlaps(0, 39_999));
    }

    #[test]
    fn test_intensity_ordering_low_to_high() {
        assert!(Intensity::Low < Intensity::Medium);
        assert!(Intensity::Medium < Intensity::High);
    }

    #[test]
    fn test_job_deserializes_from_kebab_case() {
        let json = r#"{
            "id": "data-entry-clerk",
            "title": "Data Entry Clerk",
            "industry": "Administration",
            "description": "Accurate high-volume record keeping.",
            "level": "entry",
            "salary": {"min": 30000, "max": 42000},
            "cognitive_profile": {
                "strengths": ["detailed-work"],
                "challenges": ["multitasking"],
                "score": 7
            },
            "ai_risk_score": 9,
            "sensory_demands": {"noise": "low", "lights": "medium", "open_plan": false, "remote": true},
            "social_demands": "minimal",
            "team_size": {"min": 2, "max": 5},
            "tags": ["data", "administration"],
            "skills_needed": ["typing", "attention to detail"],
            "growth_outlook": "declining"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.level, JobLevel::Entry);
        assert_eq!(job.sensory_demands.noise, Intensity::Low);
        assert_eq!(job.social_demands, SocialDemand::Minimal);
        assert_eq!(job.team_size.min, 2);
        assert_eq!(job.team_size.max, 5);
    }
}
