//! AI-tool leaderboard — thinking-style filtering and ranking over the
//! static tool catalog.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::tool::AiTool;

/// Dimension threshold for a style to "support" a thinking style. Fixed by
/// the leaderboard methodology; boundary inclusive (≥ 8 qualifies).
const STYLE_THRESHOLD: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThinkingStyle {
    #[default]
    All,
    Lateral,
    Linear,
    Balanced,
}

impl ThinkingStyle {
    pub fn label(&self) -> &'static str {
        match self {
            ThinkingStyle::All => "All styles",
            ThinkingStyle::Lateral => "Lateral thinkers",
            ThinkingStyle::Linear => "Linear thinkers",
            ThinkingStyle::Balanced => "Balanced",
        }
    }
}

fn supports_lateral(tool: &AiTool) -> bool {
    tool.assessment.lateral_thinking >= STYLE_THRESHOLD
        && tool.assessment.language_adaptability >= STYLE_THRESHOLD
}

fn supports_linear(tool: &AiTool) -> bool {
    tool.assessment.linear_thinking >= STYLE_THRESHOLD
}

/// Pure predicate filter over the tool collection. `balanced` requires both
/// the lateral and linear rules, so it is always a subset of each.
pub fn filter_by_thinking_style<'a>(tools: &'a [AiTool], style: ThinkingStyle) -> Vec<&'a AiTool> {
    tools
        .iter()
        .filter(|tool| match style {
            ThinkingStyle::All => true,
            ThinkingStyle::Lateral => supports_lateral(tool),
            ThinkingStyle::Linear => supports_linear(tool),
            ThinkingStyle::Balanced => supports_lateral(tool) && supports_linear(tool),
        })
        .collect()
}

/// Stable descending order by overall assessment score — the leaderboard's
/// display order.
pub fn rank_tools<'a>(tools: &[&'a AiTool]) -> Vec<&'a AiTool> {
    let mut ranked = tools.to_vec();
    ranked.sort_by(|a, b| b.assessment.overall.total_cmp(&a.assessment.overall));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tool::{AssessmentScores, Pricing};

    fn make_tool(id: &str, lateral: f64, linear: f64, language: f64, awareness: f64) -> AiTool {
        AiTool {
            id: id.to_string(),
            name: id.to_string(),
            category: "assistant".to_string(),
            description: "A tool.".to_string(),
            pricing: Pricing::Freemium,
            assessment: AssessmentScores {
                lateral_thinking: lateral,
                linear_thinking: linear,
                language_adaptability: language,
                neurodivergent_awareness: awareness,
                overall: (lateral + linear + language + awareness) / 4.0,
            },
        }
    }

    fn fixture_tools() -> Vec<AiTool> {
        vec![
            make_tool("sprint", 9.0, 5.0, 8.5, 7.0),  // lateral only
            make_tool("ledger", 4.0, 9.0, 6.0, 5.0),  // linear only
            make_tool("prism", 8.0, 8.0, 8.0, 9.0),   // balanced, all boundaries
            make_tool("mumble", 7.9, 7.9, 7.9, 7.0),  // just under everywhere
            make_tool("wander", 9.0, 6.0, 7.0, 8.0),  // high lateral, low language
        ]
    }

    #[test]
    fn test_lateral_requires_language_adaptability_too() {
        let tools = fixture_tools();
        let lateral = filter_by_thinking_style(&tools, ThinkingStyle::Lateral);
        let ids: Vec<&str> = lateral.iter().map(|t| t.id.as_str()).collect();
        // "wander" has lateral 9.0 but language 7.0 — excluded.
        assert_eq!(ids, ["sprint", "prism"]);
    }

    #[test]
    fn test_linear_threshold_is_inclusive() {
        let tools = fixture_tools();
        let linear = filter_by_thinking_style(&tools, ThinkingStyle::Linear);
        let ids: Vec<&str> = linear.iter().map(|t| t.id.as_str()).collect();
        // "prism" sits exactly on 8.0 and qualifies; 7.9 does not.
        assert_eq!(ids, ["ledger", "prism"]);
    }

    #[test]
    fn test_balanced_is_subset_of_lateral_and_linear() {
        let tools = fixture_tools();
        let lateral: Vec<&str> = filter_by_thinking_style(&tools, ThinkingStyle::Lateral)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let linear: Vec<&str> = filter_by_thinking_style(&tools, ThinkingStyle::Linear)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let balanced = filter_by_thinking_style(&tools, ThinkingStyle::Balanced);
        for tool in &balanced {
            assert!(lateral.contains(&tool.id.as_str()));
            assert!(linear.contains(&tool.id.as_str()));
        }
        assert_eq!(balanced.len(), 1);
        assert_eq!(balanced[0].id, "prism");
    }

    #[test]
    fn test_all_is_identity() {
        let tools = fixture_tools();
        let all = filter_by_thinking_style(&tools, ThinkingStyle::All);
        assert_eq!(all.len(), tools.len());
        let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["sprint", "ledger", "prism", "mumble", "wander"]);
    }

    #[test]
    fn test_rank_tools_descending_by_overall() {
        let tools = fixture_tools();
        let borrowed: Vec<&AiTool> = tools.iter().collect();
        let ranked = rank_tools(&borrowed);
        let overalls: Vec<f64> = ranked.iter().map(|t| t.assessment.overall).collect();
        for pair in overalls.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }
}
