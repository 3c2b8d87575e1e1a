//! Match scoring — pure functions estimating how well a job fits a profile.
//!
//! Every score surfaced here is bounded to [0,10]. Callers are responsible
//! for the profile-completion gate: these functions assume the profile they
//! are handed is the one personalization should run against.

use serde::{Deserialize, Serialize};

use crate::models::job::{Intensity, Job, SocialDemand};
use crate::models::profile::{Challenge, SensoryPreference, UserProfile};

/// Weights for the three cognitive-fit sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveWeights {
    pub strengths: f64,
    pub challenge_avoidance: f64,
    pub interests: f64,
}

impl Default for CognitiveWeights {
    fn default() -> Self {
        Self {
            strengths: 0.4,
            challenge_avoidance: 0.3,
            interests: 0.3,
        }
    }
}

impl CognitiveWeights {
    pub fn sum(&self) -> f64 {
        self.strengths + self.challenge_avoidance + self.interests
    }
}

/// Weighted blend of strength overlap, challenge avoidance, and interest
/// overlap, each normalized to [0,10] before weighting and re-scaled by the
/// total weight. Rounded to one decimal.
///
/// Empty profile sets floor their denominator at 1, so an empty set always
/// contributes 0 for that term rather than an undefined result.
pub fn cognitive_fit(profile: &UserProfile, job: &Job) -> f64 {
    cognitive_fit_weighted(profile, job, &CognitiveWeights::default())
}

pub fn cognitive_fit_weighted(profile: &UserProfile, job: &Job, weights: &CognitiveWeights) -> f64 {
    let strength_score = strength_overlap(profile, job);
    let avoidance_score = challenge_avoidance(profile, job);
    let interest_score = interest_overlap(profile, job);

    let blended = (strength_score * weights.strengths
        + avoidance_score * weights.challenge_avoidance
        + interest_score * weights.interests)
        / weights.sum();

    round_one_decimal(blended)
}

/// Fraction of profile strengths the job's cognitive profile rewards, × 10.
fn strength_overlap(profile: &UserProfile, job: &Job) -> f64 {
    let matched = profile
        .strengths
        .iter()
        .filter(|s| job.cognitive_profile.strengths.contains(s))
        .count();
    let denominator = profile.strengths.len().max(1);
    (matched as f64 / denominator as f64) * 10.0
}

/// Fraction of profile challenges the job does NOT strain, × 10. Rewards
/// roles whose challenge list avoids the user's declared challenges.
fn challenge_avoidance(profile: &UserProfile, job: &Job) -> f64 {
    let conflicting = profile
        .challenges
        .iter()
        .filter(|c| job.cognitive_profile.challenges.contains(c))
        .count();
    let total = profile.challenges.len();
    let denominator = total.max(1);
    ((total - conflicting) as f64 / denominator as f64) * 10.0
}

/// Fraction of career interests whose slug appears as a substring of any job
/// tag, × 10. Tags are compared lowercase.
fn interest_overlap(profile: &UserProfile, job: &Job) -> f64 {
    let tags_lower: Vec<String> = job.tags.iter().map(|t| t.to_lowercase()).collect();
    let matched = profile
        .career_interests
        .iter()
        .filter(|interest| tags_lower.iter().any(|tag| tag.contains(interest.slug())))
        .count();
    let denominator = profile.career_interests.len().max(1);
    (matched as f64 / denominator as f64) * 10.0
}

/// Sensory fit: starts at 10 and subtracts independent, additive penalties
/// per mismatch between the declared preference and the job's environment.
pub fn sensory_match(profile: &UserProfile, job: &Job) -> f64 {
    let mut score: f64 = 10.0;

    match profile.sensory_preference {
        SensoryPreference::QuietPreferred => {
            match job.sensory_demands.noise {
                Intensity::High => score -= 4.0,
                Intensity::Medium => score -= 2.0,
                Intensity::Low => {}
            }
            if job.sensory_demands.open_plan {
                score -= 2.0;
            }
        }
        SensoryPreference::SomeNoiseOk => {
            if job.sensory_demands.noise == Intensity::High {
                score -= 2.0;
            }
        }
        SensoryPreference::FlexibleWithBreaks | SensoryPreference::Other => {}
    }

    score.clamp(0.0, 10.0)
}

/// Social fit: a discrete lookup. With the social-interaction challenge
/// declared, demand level maps high→3 / moderate→6 / minimal→10. Without it
/// the result is exactly 8 regardless of demand — never derived from other
/// signals.
pub fn social_match(profile: &UserProfile, job: &Job) -> f64 {
    if profile.challenges.contains(&Challenge::SocialInteraction) {
        match job.social_demands {
            SocialDemand::High => 3.0,
            SocialDemand::Moderate => 6.0,
            SocialDemand::Minimal => 10.0,
        }
    } else {
        8.0
    }
}

/// The ranking key for best-match sorting: cognitive×0.4 + AI-resilience×0.2
/// + sensory×0.2 + social×0.2, rounded to one decimal.
pub fn final_match_score(profile: &UserProfile, job: &Job) -> f64 {
    let cognitive = cognitive_fit(profile, job);
    let resilience = ai_resilience(job);
    let sensory = sensory_match(profile, job);
    let social = social_match(profile, job);

    round_one_decimal(cognitive * 0.4 + resilience * 0.2 + sensory * 0.2 + social * 0.2)
}

/// Inverted automation-risk score: 10 − risk, so safer jobs score higher.
pub fn ai_resilience(job: &Job) -> f64 {
    10.0 - f64::from(job.ai_risk_score)
}

/// Per-dimension breakdown returned by the job endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub cognitive_fit: f64,
    pub sensory_match: f64,
    pub social_match: f64,
    pub ai_resilience: f64,
    pub overall: f64,
}

impl MatchBreakdown {
    pub fn compute(profile: &UserProfile, job: &Job) -> Self {
        Self {
            cognitive_fit: cognitive_fit(profile, job),
            sensory_match: sensory_match(profile, job),
            social_match: social_match(profile, job),
            ai_resilience: ai_resilience(job),
            overall: final_match_score(profile, job),
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{
        CognitiveProfile, GrowthOutlook, JobLevel, SalaryRange, SensoryDemands, TeamSize,
    };
    use crate::models::profile::{CareerInterest, Strength};

    fn make_job() -> Job {
        Job {
            id: "test-job".to_string(),
            title: "Test Job".to_string(),
            industry: "Testing".to_string(),
            description: "A role for exercising the scorer.".to_string(),
            level: JobLevel::Entry,
            salary: SalaryRange {
                min: 40_000,
                max: 60_000,
            },
            cognitive_profile: CognitiveProfile {
                strengths: vec![Strength::DetailedWork, Strength::PatternRecognition],
                challenges: vec![Challenge::Multitasking],
                score: 7,
            },
            ai_risk_score: 4,
            sensory_demands: SensoryDemands {
                noise: Intensity::Low,
                lights: Intensity::Low,
                open_plan: false,
                remote: true,
            },
            social_demands: SocialDemand::Minimal,
            team_size: TeamSize { min: 3, max: 8 },
            tags: vec!["technology".to_string(), "data-analysis".to_string()],
            skills_needed: vec!["focus".to_string()],
            growth_outlook: GrowthOutlook::Growing,
        }
    }

    fn make_profile() -> UserProfile {
        let mut profile = UserProfile::new();
        profile.strengths.insert(Strength::DetailedWork);
        profile.strengths.insert(Strength::PatternRecognition);
        profile.challenges.insert(Challenge::SocialInteraction);
        profile.career_interests.insert(CareerInterest::Technology);
        profile.sensory_preference = SensoryPreference::QuietPreferred;
        profile.profile_completed = true;
        profile
    }

    #[test]
    fn test_empty_strengths_contribute_zero() {
        let mut profile = make_profile();
        profile.strengths.clear();
        profile.challenges.clear();
        profile.career_interests.clear();
        // All three sub-scores are 0/1 — denominator floored, never NaN.
        assert_eq!(cognitive_fit(&profile, &make_job()), 0.0);
    }

    #[test]
    fn test_empty_challenges_avoidance_is_zero_not_ten() {
        let mut profile = make_profile();
        profile.challenges.clear();
        // (0 − 0) / 1 × 10 = 0: an empty challenge set earns nothing.
        assert_eq!(challenge_avoidance(&profile, &make_job()), 0.0);
    }

    #[test]
    fn test_perfect_profile_scores_ten() {
        let profile = make_profile();
        let job = make_job();
        // strengths 2/2, challenges 1/1 avoided, interests 1/1 matched.
        assert_eq!(cognitive_fit(&profile, &job), 10.0);
    }

    #[test]
    fn test_cognitive_fit_partial_blend() {
        let mut profile = make_profile();
        profile.strengths.insert(Strength::BigPicture); // 2 of 3 match now
        let job = make_job();
        // (6.667×0.4 + 10×0.3 + 10×0.3) / 1.0 = 8.667 → 8.7
        assert_eq!(cognitive_fit(&profile, &job), 8.7);
    }

    #[test]
    fn test_interest_substring_matches_tag() {
        let mut profile = make_profile();
        profile.career_interests.clear();
        profile.career_interests.insert(CareerInterest::Data);
        // "data" is a substring of the "data-analysis" tag.
        assert_eq!(interest_overlap(&profile, &make_job()), 10.0);
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let job = make_job();
        let profiles = [
            make_profile(),
            {
                let mut p = make_profile();
                p.strengths.clear();
                p.challenges.clear();
                p.career_interests.clear();
                p
            },
            {
                let mut p = make_profile();
                p.sensory_preference = SensoryPreference::SomeNoiseOk;
                p
            },
        ];
        for profile in &profiles {
            for score in [
                cognitive_fit(profile, &job),
                sensory_match(profile, &job),
                social_match(profile, &job),
                final_match_score(profile, &job),
            ] {
                assert!((0.0..=10.0).contains(&score), "score {score} out of bounds");
            }
        }
    }

    #[test]
    fn test_sensory_quiet_vs_high_noise_open_plan() {
        let mut job = make_job();
        job.sensory_demands.noise = Intensity::High;
        job.sensory_demands.open_plan = true;
        // 10 − 4 − 2 = 4, penalties additive and independent.
        assert_eq!(sensory_match(&make_profile(), &job), 4.0);
    }

    #[test]
    fn test_sensory_quiet_vs_medium_noise() {
        let mut job = make_job();
        job.sensory_demands.noise = Intensity::Medium;
        assert_eq!(sensory_match(&make_profile(), &job), 8.0);
    }

    #[test]
    fn test_sensory_some_noise_ok_only_penalizes_high() {
        let mut profile = make_profile();
        profile.sensory_preference = SensoryPreference::SomeNoiseOk;

        let mut job = make_job();
        job.sensory_demands.noise = Intensity::High;
        job.sensory_demands.open_plan = true; // no open-plan penalty for this preference
        assert_eq!(sensory_match(&profile, &job), 8.0);

        job.sensory_demands.noise = Intensity::Medium;
        assert_eq!(sensory_match(&profile, &job), 10.0);
    }

    #[test]
    fn test_sensory_floor_across_all_penalty_combinations() {
        // The worst defined case is quiet-preferred vs high noise in an open
        // plan (10 − 4 − 2 = 4); the clamp guards anything additional.
        let mut worst = f64::MAX;
        for preference in [
            SensoryPreference::QuietPreferred,
            SensoryPreference::SomeNoiseOk,
            SensoryPreference::FlexibleWithBreaks,
            SensoryPreference::Other,
        ] {
            for noise in [Intensity::Low, Intensity::Medium, Intensity::High] {
                for open_plan in [false, true] {
                    let mut profile = make_profile();
                    profile.sensory_preference = preference;
                    let mut job = make_job();
                    job.sensory_demands.noise = noise;
                    job.sensory_demands.open_plan = open_plan;
                    let score = sensory_match(&profile, &job);
                    assert!((0.0..=10.0).contains(&score));
                    worst = worst.min(score);
                }
            }
        }
        assert_eq!(worst, 4.0);
    }

    #[test]
    fn test_sensory_flexible_never_penalized() {
        let mut profile = make_profile();
        profile.sensory_preference = SensoryPreference::FlexibleWithBreaks;
        let mut job = make_job();
        job.sensory_demands.noise = Intensity::High;
        job.sensory_demands.open_plan = true;
        assert_eq!(sensory_match(&profile, &job), 10.0);
    }

    #[test]
    fn test_social_lookup_with_challenge() {
        let profile = make_profile(); // declares social-interaction
        let mut job = make_job();

        job.social_demands = SocialDemand::High;
        assert_eq!(social_match(&profile, &job), 3.0);
        job.social_demands = SocialDemand::Moderate;
        assert_eq!(social_match(&profile, &job), 6.0);
        job.social_demands = SocialDemand::Minimal;
        assert_eq!(social_match(&profile, &job), 10.0);
    }

    #[test]
    fn test_social_neutral_eight_without_challenge() {
        let mut profile = make_profile();
        profile.challenges.remove(&Challenge::SocialInteraction);
        let mut job = make_job();
        for demand in [
            SocialDemand::Minimal,
            SocialDemand::Moderate,
            SocialDemand::High,
        ] {
            job.social_demands = demand;
            assert_eq!(social_match(&profile, &job), 8.0);
        }
    }

    #[test]
    fn test_final_score_hand_computed() {
        let profile = make_profile();
        let job = make_job();
        // cognitive 10.0, resilience 10−4=6, sensory 10, social 10 (minimal
        // demand with the challenge declared):
        // 10×0.4 + 6×0.2 + 10×0.2 + 10×0.2 = 9.2
        assert_eq!(final_match_score(&profile, &job), 9.2);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = CognitiveWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_overall_matches_final_score() {
        let profile = make_profile();
        let job = make_job();
        let breakdown = MatchBreakdown::compute(&profile, &job);
        assert_eq!(breakdown.overall, final_match_score(&profile, &job));
        assert_eq!(breakdown.ai_resilience, 6.0);
    }
}
