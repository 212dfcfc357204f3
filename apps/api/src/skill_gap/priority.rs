//! Skill Priority Table — static importance scores for ranking missing skills.

use std::collections::HashMap;

use serde::Serialize;

use crate::skill_gap::normalize::normalize_skill;

/// Score given to any skill absent from the table.
pub const DEFAULT_PRIORITY_SCORE: u8 = 50;

const MAX_SCORE: u8 = 100;

/// Built-in frequency heuristic: higher means demanded across more career paths.
const BUILTIN_SCORES: &[(&str, u8)] = &[
    // Programming languages
    ("javascript", 95),
    ("python", 90),
    ("java", 85),
    ("typescript", 80),
    ("c++", 75),
    ("sql", 88),
    ("html", 85),
    ("css", 80),
    ("react", 85),
    ("node.js", 80),
    ("angular", 70),
    ("vue.js", 65),
    // Data & analytics
    ("data analysis", 85),
    ("machine learning", 80),
    ("statistics", 75),
    ("excel", 70),
    ("tableau", 65),
    ("power bi", 60),
    ("r programming", 70),
    // Cloud & DevOps
    ("aws", 85),
    ("azure", 80),
    ("docker", 75),
    ("kubernetes", 70),
    ("git", 90),
    ("ci/cd", 70),
    // Soft skills
    ("communication", 95),
    ("leadership", 85),
    ("problem solving", 90),
    ("teamwork", 88),
    ("project management", 80),
    ("critical thinking", 85),
    // Design & UX
    ("ui/ux design", 75),
    ("figma", 70),
    ("photoshop", 65),
    ("wireframing", 60),
];

/// Categorical explanation attached to each prioritized missing skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Critical,
    Important,
    Valuable,
    NiceToHave,
}

impl PriorityTier {
    /// Inclusive lower bounds: 85 / 70 / 60.
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => PriorityTier::Critical,
            70..=84 => PriorityTier::Important,
            60..=69 => PriorityTier::Valuable,
            _ => PriorityTier::NiceToHave,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            PriorityTier::Critical => "Critical skill — highly demanded across most career paths",
            PriorityTier::Important => "Important skill — commonly required in many positions",
            PriorityTier::Valuable => "Valuable skill — good to have for competitive advantage",
            PriorityTier::NiceToHave => {
                "Nice-to-have skill — may be beneficial for specific roles"
            }
        }
    }
}

/// Reason text for a raw score.
pub fn priority_reason(score: u8) -> &'static str {
    PriorityTier::from_score(score).reason()
}

/// Read-only mapping from normalized skill to a score in [0, 100].
///
/// Built once at startup and shared behind an `Arc`; there is no API to mutate it.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    scores: HashMap<String, u8>,
    default_score: u8,
}

impl PriorityTable {
    /// Builds a table from arbitrary entries. Keys are normalized, blank keys
    /// are skipped and scores are clamped to 100.
    pub fn new<I, S>(entries: I, default_score: u8) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: AsRef<str>,
    {
        let scores = entries
            .into_iter()
            .filter_map(|(skill, score)| {
                normalize_skill(skill.as_ref()).map(|s| (s, score.min(MAX_SCORE)))
            })
            .collect();

        Self {
            scores,
            default_score: default_score.min(MAX_SCORE),
        }
    }

    /// The production table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SCORES.iter().copied(), DEFAULT_PRIORITY_SCORE)
    }

    /// Looks up a skill, re-normalizing it first so casing and padding cannot
    /// bypass the table. Unknown or blank skills get the default score.
    pub fn score(&self, skill: &str) -> u8 {
        normalize_skill(skill)
            .and_then(|s| self.scores.get(&s).copied())
            .unwrap_or(self.default_score)
    }

    pub fn default_score(&self) -> u8 {
        self.default_score
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::builtin()
    }
}
