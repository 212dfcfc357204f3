//! Readiness summary derived from a `GapResult`: how close a user is to a role,
//! plus the next few skills to learn.

use crate::skill_gap::analyzer::GapResult;

const NEXT_STEP_COUNT: usize = 3;
const MIN_WEEKS_PER_SKILL: usize = 2;
const MAX_WEEKS_PER_SKILL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessLevel {
    Excellent,
    Good,
    Moderate,
    Beginner,
}

impl ReadinessLevel {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            ReadinessLevel::Excellent
        } else if percentage >= 60 {
            ReadinessLevel::Good
        } else if percentage >= 40 {
            ReadinessLevel::Moderate
        } else {
            ReadinessLevel::Beginner
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadinessLevel::Excellent => "Excellent - Ready to apply!",
            ReadinessLevel::Good => "Good - Minor skill gaps to address",
            ReadinessLevel::Moderate => "Moderate - Some important skills needed",
            ReadinessLevel::Beginner => "Beginner - Significant learning required",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readiness {
    pub percentage: u32,
    pub level: ReadinessLevel,
    pub total_required: usize,
    pub currently_have: usize,
}

impl Readiness {
    /// `total_required` is the length of the role's required list as stored.
    /// A role that requires nothing counts as fully ready.
    pub fn from_gap(gap: &GapResult, total_required: usize) -> Self {
        let currently_have = gap.have.len();
        let percentage = if total_required == 0 {
            100
        } else {
            ((currently_have as f64 / total_required as f64) * 100.0).round() as u32
        };

        Self {
            percentage,
            level: ReadinessLevel::from_percentage(percentage),
            total_required,
            currently_have,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    pub next_steps: Vec<String>,
    pub time_estimate: String,
}

impl Recommendations {
    pub fn from_gap(gap: &GapResult) -> Self {
        let next_steps = gap
            .priority
            .iter()
            .take(NEXT_STEP_COUNT)
            .map(|p| format!("Learn {}", p.skill))
            .collect();

        let n = gap.missing_count;
        Self {
            next_steps,
            time_estimate: format!(
                "{}-{} weeks",
                n * MIN_WEEKS_PER_SKILL,
                n * MAX_WEEKS_PER_SKILL
            ),
        }
    }
}
