//! Skill Gap Analyzer — partitions a role's required skills into have / missing
//! and ranks the missing ones by priority.
//!
//! Algorithm:
//! 1. Normalize profile skills, build a membership set.
//! 2. Normalize required skills. This order is the output order; duplicates are kept.
//! 3. Partition required skills into `have` and `missing`, preserving order.
//! 4. Score each missing skill against the `PriorityTable`.
//! 5. Stable sort by score descending, so ties keep their `missing` order.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::skill_gap::normalize::{normalize_skills, normalize_strs};
use crate::skill_gap::priority::{priority_reason, PriorityTable};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillGapError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A missing skill annotated with why it matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityItem {
    pub skill: String,
    pub reason: String,
}

/// Immutable output of a single analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapResult {
    pub have: Vec<String>,
    pub missing: Vec<String>,
    pub missing_count: usize,
    pub priority: Vec<PriorityItem>,
}

/// Stateless analyzer over a shared read-only priority table.
#[derive(Debug, Clone)]
pub struct SkillGapAnalyzer {
    table: Arc<PriorityTable>,
}

impl SkillGapAnalyzer {
    pub fn new(table: Arc<PriorityTable>) -> Self {
        Self { table }
    }

    /// Priority score for a single skill, independent of any analysis.
    pub fn score(&self, skill: &str) -> u8 {
        self.table.score(skill)
    }

    /// Analyzes untyped input. Both arguments must be JSON arrays; elements
    /// that are not strings are dropped silently.
    pub fn analyze(
        &self,
        profile_skills: &Value,
        required_skills: &Value,
    ) -> Result<GapResult, SkillGapError> {
        if !profile_skills.is_array() || !required_skills.is_array() {
            return Err(SkillGapError::InvalidArgument(
                "Both profileSkills and requiredSkills must be arrays".to_string(),
            ));
        }

        Ok(self.partition(
            normalize_skills(profile_skills),
            normalize_skills(required_skills),
        ))
    }

    /// Typed variant of [`SkillGapAnalyzer::analyze`]; cannot fail.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn analyze_skills<S: AsRef<str>>(
        &self,
        profile_skills: &[S],
        required_skills: &[S],
    ) -> GapResult {
        self.partition(normalize_strs(profile_skills), normalize_strs(required_skills))
    }

    fn partition(&self, profile: Vec<String>, required: Vec<String>) -> GapResult {
        let profile_set: HashSet<&str> = profile.iter().map(String::as_str).collect();

        let (have, missing): (Vec<String>, Vec<String>) = required
            .into_iter()
            .partition(|skill| profile_set.contains(skill.as_str()));

        let mut scored: Vec<(u8, &str)> = missing
            .iter()
            .map(|skill| (self.table.score(skill), skill.as_str()))
            .collect();
        // sort_by is stable: equal scores keep their `missing` order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let priority = scored
            .into_iter()
            .map(|(score, skill)| PriorityItem {
                skill: skill.to_string(),
                reason: priority_reason(score).to_string(),
            })
            .collect();

        GapResult {
            missing_count: missing.len(),
            have,
            missing,
            priority,
        }
    }
}

impl Default for SkillGapAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(PriorityTable::builtin()))
    }
}
