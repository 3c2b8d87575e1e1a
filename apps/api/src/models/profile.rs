#![allow(dead_code)]

//! User profile model — the self-reported neurodivergent profile the matching
//! engine is parameterized by. All categorical fields are closed enums so the
//! label mappings stay exhaustive.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Neurodivergence {
    Autism,
    Adhd,
    Dyslexia,
    Dyscalculia,
    Anxiety,
    Depression,
    Other,
}

impl Neurodivergence {
    pub fn label(&self) -> &'static str {
        match self {
            Neurodivergence::Autism => "Autism",
            Neurodivergence::Adhd => "ADHD",
            Neurodivergence::Dyslexia => "Dyslexia",
            Neurodivergence::Dyscalculia => "Dyscalculia",
            Neurodivergence::Anxiety => "Anxiety",
            Neurodivergence::Depression => "Depression",
            Neurodivergence::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    CreativeThinking,
    ProblemSolving,
    DetailedWork,
    Hyperfocus,
    PatternRecognition,
    PatternCreation,
    BigPicture,
    TechnicalCoding,
    WritingLanguage,
    VisualSpatial,
    TeachingExplaining,
    OrganizingSystematizing,
    Other,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::CreativeThinking => "Creative thinking",
            Strength::ProblemSolving => "Problem solving",
            Strength::DetailedWork => "Detailed work",
            Strength::Hyperfocus => "Hyperfocus",
            Strength::PatternRecognition => "Pattern recognition",
            Strength::PatternCreation => "Pattern creation",
            Strength::BigPicture => "Big-picture thinking",
            Strength::TechnicalCoding => "Technical / coding",
            Strength::WritingLanguage => "Writing & language",
            Strength::VisualSpatial => "Visual-spatial reasoning",
            Strength::TeachingExplaining => "Teaching & explaining",
            Strength::OrganizingSystematizing => "Organizing & systematizing",
            Strength::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Challenge {
    SocialInteraction,
    ExecutiveFunction,
    TimeManagement,
    SensorySensitivity,
    EmotionalRegulation,
    TransitionsChanges,
    ReadingWriting,
    MathNumbers,
    Multitasking,
    UnwrittenRules,
    PublicSpeaking,
    Other,
}

impl Challenge {
    pub fn label(&self) -> &'static str {
        match self {
            Challenge::SocialInteraction => "Social interaction",
            Challenge::ExecutiveFunction => "Executive function",
            Challenge::TimeManagement => "Time management",
            Challenge::SensorySensitivity => "Sensory sensitivity",
            Challenge::EmotionalRegulation => "Emotional regulation",
            Challenge::TransitionsChanges => "Transitions & changes",
            Challenge::ReadingWriting => "Reading & writing",
            Challenge::MathNumbers => "Math & numbers",
            Challenge::Multitasking => "Multitasking",
            Challenge::UnwrittenRules => "Unwritten rules",
            Challenge::PublicSpeaking => "Public speaking",
            Challenge::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensoryPreference {
    QuietPreferred,
    SomeNoiseOk,
    FlexibleWithBreaks,
    Other,
}

impl SensoryPreference {
    pub fn label(&self) -> &'static str {
        match self {
            SensoryPreference::QuietPreferred => "Prefers quiet environments",
            SensoryPreference::SomeNoiseOk => "Some noise is okay",
            SensoryPreference::FlexibleWithBreaks => "Flexible with breaks",
            SensoryPreference::Other => "Other",
        }
    }
}

/// Career interest tags. Matching against job tags is substring-based on the
/// wire slug (e.g. "writing" matches a "technical-writing" tag), so the slug
/// is part of the contract, not just the serde form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerInterest {
    Technology,
    Design,
    Data,
    Writing,
    Art,
    Science,
    Business,
    Education,
    Gaming,
    Nature,
    HelpingPeople,
    Other,
}

impl CareerInterest {
    /// The kebab-case slug used for tag substring matching.
    pub fn slug(&self) -> &'static str {
        match self {
            CareerInterest::Technology => "technology",
            CareerInterest::Design => "design",
            CareerInterest::Data => "data",
            CareerInterest::Writing => "writing",
            CareerInterest::Art => "art",
            CareerInterest::Science => "science",
            CareerInterest::Business => "business",
            CareerInterest::Education => "education",
            CareerInterest::Gaming => "gaming",
            CareerInterest::Nature => "nature",
            CareerInterest::HelpingPeople => "helping-people",
            CareerInterest::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerInterest::Technology => "Technology",
            CareerInterest::Design => "Design",
            CareerInterest::Data => "Data",
            CareerInterest::Writing => "Writing",
            CareerInterest::Art => "Art",
            CareerInterest::Science => "Science",
            CareerInterest::Business => "Business",
            CareerInterest::Education => "Education",
            CareerInterest::Gaming => "Gaming",
            CareerInterest::Nature => "Nature",
            CareerInterest::HelpingPeople => "Helping people",
            CareerInterest::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobPriority {
    Salary,
    Stability,
    RemoteWork,
    LowStress,
    GrowthPotential,
    CreativeFreedom,
}

impl JobPriority {
    pub fn label(&self) -> &'static str {
        match self {
            JobPriority::Salary => "Salary",
            JobPriority::Stability => "Stability",
            JobPriority::RemoteWork => "Remote work",
            JobPriority::LowStress => "Low stress",
            JobPriority::GrowthPotential => "Growth potential",
            JobPriority::CreativeFreedom => "Creative freedom",
        }
    }
}

/// One user's profile. A single record per store — collections default to
/// empty on deserialization so a partially-built profile is still readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub neurodivergence: BTreeSet<Neurodivergence>,
    #[serde(default)]
    pub strengths: BTreeSet<Strength>,
    #[serde(default)]
    pub challenges: BTreeSet<Challenge>,
    pub sensory_preference: SensoryPreference,
    #[serde(default)]
    pub career_interests: BTreeSet<CareerInterest>,
    /// Ordered by preference — position matters, unlike the sets above.
    #[serde(default)]
    pub job_priorities: Vec<JobPriority>,
    #[serde(default)]
    pub saved_jobs: BTreeSet<String>,
    /// Module id → completion percentage (0–100).
    #[serde(default)]
    pub life_skills_progress: BTreeMap<String, u8>,
    /// Module id → completed flag.
    #[serde(default)]
    pub ai_literacy_progress: BTreeMap<String, bool>,
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh, not-yet-completed profile for the quick-start flow.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: None,
            age: None,
            location: None,
            neurodivergence: BTreeSet::new(),
            strengths: BTreeSet::new(),
            challenges: BTreeSet::new(),
            sensory_preference: SensoryPreference::Other,
            career_interests: BTreeSet::new(),
            job_priorities: Vec::new(),
            saved_jobs: BTreeSet::new(),
            life_skills_progress: BTreeMap::new(),
            ai_literacy_progress: BTreeMap::new(),
            profile_completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}
