//! Static subject and scenario profiles: the base tables every plan starts from.
//!
//! Lookups never fail. Unknown subjects get the default share split and
//! unknown scenario tags fall back to general study.

use serde::{Deserialize, Serialize};

/// Study context. Reweights the base time split and changes block wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    ExamPrep,
    Homework,
    GeneralStudy,
    ProjectWork,
}

impl Scenario {
    /// Parse a scenario tag. Unrecognized tags silently map to general study.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "exam_prep" => Self::ExamPrep,
            "homework" => Self::Homework,
            "general_study" => Self::GeneralStudy,
            "project_work" => Self::ProjectWork,
            _ => Self::GeneralStudy,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::ExamPrep => "exam_prep",
            Self::Homework => "homework",
            Self::GeneralStudy => "general_study",
            Self::ProjectWork => "project_work",
        }
    }

    /// Coarse intensity label carried alongside the scenario weights.
    pub fn intensity(self) -> &'static str {
        match self {
            Self::ExamPrep => "high",
            Self::Homework | Self::ProjectWork => "medium",
            Self::GeneralStudy => "low",
        }
    }
}

/// Subjects with dedicated profile tables. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    ComputerScience,
    English,
    History,
    Other,
}

impl SubjectKind {
    /// Case-sensitive match against the fixed table keys.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Mathematics" => Self::Mathematics,
            "Physics" => Self::Physics,
            "Chemistry" => Self::Chemistry,
            "Biology" => Self::Biology,
            "Computer Science" => Self::ComputerScience,
            "English" => Self::English,
            "History" => Self::History,
            _ => Self::Other,
        }
    }
}

/// Base share of study time per activity, before scenario weighting.
/// The three shares sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectProfile {
    pub reading: f64,
    pub practice: f64,
    pub revision: f64,
}

impl SubjectProfile {
    pub fn for_subject(subject: &str) -> Self {
        let (reading, practice, revision) = match SubjectKind::from_name(subject) {
            SubjectKind::Mathematics => (0.3, 0.5, 0.2),
            SubjectKind::Physics => (0.35, 0.45, 0.2),
            SubjectKind::Chemistry => (0.4, 0.4, 0.2),
            SubjectKind::Biology => (0.5, 0.3, 0.2),
            SubjectKind::ComputerScience => (0.25, 0.6, 0.15),
            SubjectKind::English => (0.6, 0.25, 0.15),
            SubjectKind::History => (0.7, 0.15, 0.15),
            SubjectKind::Other => (0.4, 0.4, 0.2),
        };
        Self {
            reading,
            practice,
            revision,
        }
    }
}

/// Multiplicative weights a scenario applies on top of the subject shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProfile {
    pub reading: f64,
    pub practice: f64,
    pub revision: f64,
}

impl ScenarioProfile {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let (reading, practice, revision) = match scenario {
            Scenario::ExamPrep => (0.8, 1.2, 1.5),
            Scenario::Homework => (1.0, 1.3, 0.7),
            Scenario::GeneralStudy => (1.1, 1.0, 0.9),
            Scenario::ProjectWork => (0.7, 1.5, 0.8),
        };
        Self {
            reading,
            practice,
            revision,
        }
    }
}
