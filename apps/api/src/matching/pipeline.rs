#![allow(dead_code)]

//! Job search / filter / sort pipeline — pure functions composing over the
//! catalog's job collection, optionally parameterized by a user profile.
//!
//! Filters compose with AND semantics: a job survives only if every active
//! predicate passes. Sorting never mutates its input; it returns a new
//! ordering (or, for fastest-to-learn, a filtered subset — the one
//! cardinality-changing option).

use serde::{Deserialize, Serialize};

use crate::matching::scoring::{cognitive_fit, final_match_score};
use crate::models::job::{Intensity, Job, JobLevel, SocialDemand};
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    BestMatch,
    LowestAiRisk,
    HighestSalary,
    FastestToLearn,
}

/// Filter configuration built from the job-listing query string. Absent
/// fields deactivate their predicate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilters {
    pub search: Option<String>,
    /// Profile-gated: a no-op unless a completed profile is in play.
    pub min_cognitive_fit: Option<f64>,
    pub max_ai_risk: Option<u8>,
    pub noise: Option<Intensity>,
    pub social: Option<SocialDemand>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub sort_by: SortBy,
}

/// The profile-completion gate: personalization only ever runs against a
/// completed profile. An incomplete profile degrades to "no profile".
pub fn personalized(profile: Option<&UserProfile>) -> Option<&UserProfile> {
    profile.filter(|p| p.profile_completed)
}

/// Case-insensitive substring search over title, industry, description,
/// tags, and skills. A job matches if ANY field contains the query; the
/// empty query therefore matches every job.
pub fn search_jobs<'a>(jobs: &[&'a Job], query: &str) -> Vec<&'a Job> {
    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| job_matches_query(job, &needle))
        .copied()
        .collect()
}

fn job_matches_query(job: &Job, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job.industry.to_lowercase().contains(needle)
        || job.description.to_lowercase().contains(needle)
        || job.tags.iter().any(|t| t.to_lowercase().contains(needle))
        || job
            .skills_needed
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

/// AND-composition of the independent filter predicates. Predicate order
/// does not affect the result set.
pub fn filter_jobs<'a>(
    jobs: &[&'a Job],
    filters: &JobFilters,
    profile: Option<&UserProfile>,
) -> Vec<&'a Job> {
    let profile = personalized(profile);

    jobs.iter()
        .filter(|job| {
            if let Some(query) = &filters.search {
                if !job_matches_query(job, &query.to_lowercase()) {
                    return false;
                }
            }
            // Cognitive-fit threshold only applies with a completed profile.
            if let (Some(min_fit), Some(p)) = (filters.min_cognitive_fit, profile) {
                if cognitive_fit(p, job) < min_fit {
                    return false;
                }
            }
            if let Some(max_risk) = filters.max_ai_risk {
                if job.ai_risk_score > max_risk {
                    return false;
                }
            }
            if let Some(noise) = filters.noise {
                if job.sensory_demands.noise != noise {
                    return false;
                }
            }
            if let Some(social) = filters.social {
                if job.social_demands != social {
                    return false;
                }
            }
            // Salary window is an overlap test, not containment.
            let min = filters.salary_min.unwrap_or(0);
            let max = filters.salary_max.unwrap_or(u32::MAX);
            if !job.salary.overlaps(min, max) {
                return false;
            }
            true
        })
        .copied()
        .collect()
}

/// Non-mutating sort. Best-match requires a completed profile and falls
/// back to the input order without one — a defined behavior, not an error.
/// All sorts are stable, so ties keep their input order.
pub fn sort_jobs<'a>(
    jobs: &[&'a Job],
    sort_by: SortBy,
    profile: Option<&UserProfile>,
) -> Vec<&'a Job> {
    let profile = personalized(profile);
    let mut sorted: Vec<&Job> = jobs.to_vec();

    match sort_by {
        SortBy::BestMatch => {
            if let Some(p) = profile {
                sorted.sort_by(|a, b| {
                    final_match_score(p, b).total_cmp(&final_match_score(p, a))
                });
            }
        }
        SortBy::LowestAiRisk => {
            sorted.sort_by_key(|job| job.ai_risk_score);
        }
        SortBy::HighestSalary => {
            sorted.sort_by_key(|job| std::cmp::Reverse(job.salary.max));
        }
        SortBy::FastestToLearn => {
            sorted.retain(|job| job.level == JobLevel::Entry);
        }
    }

    sorted
}

/// Filter-then-sort composition — the single entry point the job listing
/// endpoint uses.
pub fn apply_job_filters<'a>(
    jobs: &'a [Job],
    filters: &JobFilters,
    profile: Option<&UserProfile>,
) -> Vec<&'a Job> {
    let borrowed: Vec<&Job> = jobs.iter().collect();
    let filtered = filter_jobs(&borrowed, filters, profile);
    sort_jobs(&filtered, filters.sort_by, profile)
}
