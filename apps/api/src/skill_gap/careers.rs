//! Career path catalog: the required-skill sets a user can be analyzed against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub required_skills: Vec<String>,
}

/// Listing entry for `GET /api/v1/career-paths`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathSummary {
    pub id: String,
    pub title: String,
    pub required_skills_count: usize,
}

/// Read-only catalog keyed by path id. Iteration order is by id.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    paths: BTreeMap<String, CareerPath>,
}

impl CareerCatalog {
    pub fn new(paths: impl IntoIterator<Item = CareerPath>) -> Self {
        Self {
            paths: paths.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new([
            path(
                "frontend-developer",
                "Frontend Developer",
                &["html", "css", "javascript", "react", "typescript", "git", "figma", "responsive design"],
            ),
            path(
                "data-scientist",
                "Data Scientist",
                &["python", "machine learning", "statistics", "sql", "r programming", "tableau", "aws", "data analysis"],
            ),
            path(
                "backend-developer",
                "Backend Developer",
                &["node.js", "javascript", "sql", "mongodb", "express", "git", "docker", "aws"],
            ),
            path(
                "fullstack-developer",
                "Full Stack Developer",
                &["javascript", "react", "node.js", "sql", "git", "html", "css", "mongodb", "express"],
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&CareerPath> {
        self.paths.get(id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.paths.keys().cloned().collect()
    }

    pub fn summaries(&self) -> Vec<CareerPathSummary> {
        self.paths
            .values()
            .map(|p| CareerPathSummary {
                id: p.id.clone(),
                title: p.title.clone(),
                required_skills_count: p.required_skills.len(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

fn path(id: &str, title: &str, skills: &[&str]) -> CareerPath {
    CareerPath {
        id: id.to_string(),
        title: title.to_string(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}
