//! Catalog — the static job, tool, and course datasets, loaded once at
//! startup. Records are normalized on the way in (duplicate tag entries and
//! drifted overall scores are data-entry problems, and the fix belongs here,
//! not in the engine).

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::models::course::CourseModule;
use crate::models::job::Job;
use crate::models::tool::AiTool;

const JOBS_JSON: &str = include_str!("data/jobs.json");
const TOOLS_JSON: &str = include_str!("data/tools.json");
const MODULES_JSON: &str = include_str!("data/modules.json");

/// Tolerance for a tool's stored `overall` against the recomputed dimension
/// mean — one decimal of display rounding.
const OVERALL_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct Catalog {
    pub jobs: Vec<Job>,
    pub tools: Vec<AiTool>,
    pub modules: Vec<CourseModule>,
}

impl Catalog {
    /// Loads the datasets bundled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_parts(
            serde_json::from_str(JOBS_JSON).context("parsing bundled jobs dataset")?,
            serde_json::from_str(TOOLS_JSON).context("parsing bundled tools dataset")?,
            serde_json::from_str(MODULES_JSON).context("parsing bundled modules dataset")?,
        )
    }

    /// Loads `jobs.json`, `tools.json`, and `modules.json` from a directory
    /// override instead of the bundled copies.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            fs::read_to_string(dir.join(name))
                .with_context(|| format!("reading {} from {}", name, dir.display()))
        };
        Self::from_parts(
            serde_json::from_str(&read("jobs.json")?).context("parsing jobs.json")?,
            serde_json::from_str(&read("tools.json")?).context("parsing tools.json")?,
            serde_json::from_str(&read("modules.json")?).context("parsing modules.json")?,
        )
    }

    fn from_parts(
        mut jobs: Vec<Job>,
        mut tools: Vec<AiTool>,
        modules: Vec<CourseModule>,
    ) -> Result<Self> {
        ensure_unique_ids("job", jobs.iter().map(|j| j.id.as_str()))?;
        ensure_unique_ids("tool", tools.iter().map(|t| t.id.as_str()))?;
        ensure_unique_ids("module", modules.iter().map(|m| m.id.as_str()))?;

        for job in &mut jobs {
            normalize_job(job)?;
        }
        for tool in &mut tools {
            normalize_tool(tool)?;
        }

        info!(
            "Catalog loaded: {} jobs, {} tools, {} course modules",
            jobs.len(),
            tools.len(),
            modules.len()
        );
        Ok(Self {
            jobs,
            tools,
            modules,
        })
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn tool(&self, id: &str) -> Option<&AiTool> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn module(&self, id: &str) -> Option<&CourseModule> {
        self.modules.iter().find(|m| m.id == id)
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate {kind} id '{id}' in dataset");
        }
    }
    Ok(())
}

fn normalize_job(job: &mut Job) -> Result<()> {
    if job.salary.min > job.salary.max {
        bail!(
            "job '{}': salary min {} exceeds max {}",
            job.id,
            job.salary.min,
            job.salary.max
        );
    }
    if job.team_size.min > job.team_size.max {
        bail!("job '{}': team size min exceeds max", job.id);
    }
    if !(1..=10).contains(&job.ai_risk_score) {
        bail!("job '{}': ai_risk_score {} out of 1–10", job.id, job.ai_risk_score);
    }
    if !(1..=10).contains(&job.cognitive_profile.score) {
        bail!(
            "job '{}': cognitive score {} out of 1–10",
            job.id,
            job.cognitive_profile.score
        );
    }

    // Repeated entries in the source data carry no signal and would skew
    // overlap counts.
    dedupe(&mut job.cognitive_profile.strengths);
    dedupe(&mut job.cognitive_profile.challenges);
    dedupe(&mut job.tags);
    dedupe(&mut job.skills_needed);
    Ok(())
}

fn normalize_tool(tool: &mut AiTool) -> Result<()> {
    let scores = &mut tool.assessment;
    for (name, value) in [
        ("lateral_thinking", scores.lateral_thinking),
        ("linear_thinking", scores.linear_thinking),
        ("language_adaptability", scores.language_adaptability),
        ("neurodivergent_awareness", scores.neurodivergent_awareness),
    ] {
        if !(1.0..=10.0).contains(&value) {
            bail!("tool '{}': {name} score {value} out of 1–10", tool.id);
        }
    }

    if !scores.overall_consistent(OVERALL_TOLERANCE) {
        let recomputed = (scores.mean() * 100.0).round() / 100.0;
        warn!(
            "Tool '{}': overall {} disagrees with dimension mean, recomputing to {}",
            tool.id, scores.overall, recomputed
        );
        scores.overall = recomputed;
    }
    Ok(())
}

/// Removes duplicate entries, keeping first occurrences in order.
fn dedupe<T: PartialEq>(values: &mut Vec<T>) {
    let mut index = 0;
    while index < values.len() {
        if values[..index].contains(&values[index]) {
            values.remove(index);
        } else {
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Strength;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().expect("bundled datasets must parse");
        assert!(!catalog.jobs.is_empty());
        assert!(!catalog.tools.is_empty());
        assert!(!catalog.modules.is_empty());
    }

    #[test]
    fn test_bundled_jobs_satisfy_invariants() {
        let catalog = Catalog::bundled().unwrap();
        for job in &catalog.jobs {
            assert!(job.salary.min <= job.salary.max, "job {}", job.id);
            assert!((1..=10).contains(&job.ai_risk_score), "job {}", job.id);
            assert!(!job.tags.is_empty(), "job {} has no tags", job.id);
        }
    }

    #[test]
    fn test_bundled_tools_overall_is_consistent_after_load() {
        let catalog = Catalog::bundled().unwrap();
        for tool in &catalog.tools {
            assert!(
                tool.assessment.overall_consistent(OVERALL_TOLERANCE),
                "tool {} overall drifted: {} vs mean {}",
                tool.id,
                tool.assessment.overall,
                tool.assessment.mean()
            );
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.job("software-developer").is_some());
        assert!(catalog.tool("goblin-tools").is_some());
        assert!(catalog.module("what-is-ai").is_some());
        assert!(catalog.job("no-such-job").is_none());
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let mut values = vec![
            Strength::DetailedWork,
            Strength::Hyperfocus,
            Strength::DetailedWork,
            Strength::DetailedWork,
            Strength::BigPicture,
            Strength::Hyperfocus,
        ];
        dedupe(&mut values);
        assert_eq!(
            values,
            vec![
                Strength::DetailedWork,
                Strength::Hyperfocus,
                Strength::BigPicture
            ]
        );
    }

    #[test]
    fn test_repeated_strengths_are_deduped_at_load() {
        let catalog = Catalog::bundled().unwrap();
        let mut job = catalog.job("archivist").unwrap().clone();
        job.cognitive_profile.strengths = vec![
            Strength::DetailedWork,
            Strength::DetailedWork,
            Strength::DetailedWork,
            Strength::DetailedWork,
        ];
        normalize_job(&mut job).unwrap();
        assert_eq!(job.cognitive_profile.strengths, vec![Strength::DetailedWork]);
    }

    #[test]
    fn test_invalid_salary_range_is_rejected() {
        let catalog = Catalog::bundled().unwrap();
        let mut job = catalog.job("archivist").unwrap().clone();
        job.salary.min = 90_000;
        job.salary.max = 50_000;
        assert!(normalize_job(&mut job).is_err());
    }

    #[test]
    fn test_drifted_overall_is_recomputed() {
        let catalog = Catalog::bundled().unwrap();
        let mut tool = catalog.tool("claude").unwrap().clone();
        tool.assessment.overall = 2.0;
        normalize_tool(&mut tool).unwrap();
        assert!(tool.assessment.overall_consistent(OVERALL_TOLERANCE));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = ensure_unique_ids("job", ["a", "b", "a"].into_iter());
        assert!(result.is_err());
    }
}
