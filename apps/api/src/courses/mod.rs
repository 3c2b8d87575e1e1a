//! Course progress — pure progress arithmetic over the module catalog and a
//! profile's progress maps. Life-skills modules track a 0–100 percentage;
//! AI-literacy modules track a completed flag.

pub mod handlers;

use crate::models::course::{CourseModule, CourseTrack};
use crate::models::profile::UserProfile;

/// Records life-skills progress for a module. Percentages above 100 are
/// clamped; they are a client bug, not an error worth failing a lesson for.
pub fn set_life_skills_progress(profile: &mut UserProfile, module_id: &str, percent: u8) {
    profile
        .life_skills_progress
        .insert(module_id.to_string(), percent.min(100));
}

pub fn complete_ai_literacy(profile: &mut UserProfile, module_id: &str) {
    profile
        .ai_literacy_progress
        .insert(module_id.to_string(), true);
}

/// Average completion percentage across all life-skills modules in the
/// catalog; modules never started count as 0.
pub fn life_skills_completion(profile: &UserProfile, modules: &[CourseModule]) -> f64 {
    let track: Vec<&CourseModule> = modules
        .iter()
        .filter(|m| m.track == CourseTrack::LifeSkills)
        .collect();
    if track.is_empty() {
        return 0.0;
    }
    let sum: u32 = track
        .iter()
        .map(|m| u32::from(*profile.life_skills_progress.get(&m.id).unwrap_or(&0)))
        .sum();
    round_one_decimal(f64::from(sum) / track.len() as f64)
}

/// Percentage of AI-literacy modules marked complete.
pub fn ai_literacy_completion(profile: &UserProfile, modules: &[CourseModule]) -> f64 {
    let track: Vec<&CourseModule> = modules
        .iter()
        .filter(|m| m.track == CourseTrack::AiLiteracy)
        .collect();
    if track.is_empty() {
        return 0.0;
    }
    let completed = track
        .iter()
        .filter(|m| *profile.ai_literacy_progress.get(&m.id).unwrap_or(&false))
        .count();
    round_one_decimal(completed as f64 / track.len() as f64 * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
