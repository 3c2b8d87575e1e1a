#![allow(dead_code)]

//! Course module model — the static catalog behind the life-skills and
//! AI-literacy progress maps on the profile.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseTrack {
    LifeSkills,
    AiLiteracy,
}

impl CourseTrack {
    pub fn label(&self) -> &'static str {
        match self {
            CourseTrack::LifeSkills => "Life skills",
            CourseTrack::AiLiteracy => "AI literacy",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    pub track: CourseTrack,
    pub summary: String,
    pub estimated_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_wire_form() {
        assert_eq!(
            serde_json::to_string(&CourseTrack::LifeSkills).unwrap(),
            r#""life-skills""#
        );
        assert_eq!(
            serde_json::to_string(&CourseTrack::AiLiteracy).unwrap(),
            r#""ai-literacy""#
        );
    }
}
