//! Axum route handlers for the Skill Gap API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::skill_gap::analyzer::{GapResult, PriorityItem};
use crate::skill_gap::careers::CareerPathSummary;
use crate::skill_gap::normalize::normalize_skill;
use crate::skill_gap::priority::PriorityTier;
use crate::skill_gap::readiness::{Readiness, Recommendations};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Both fields stay untyped so a wrong JSON type is reported as a 400
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub user_skills: Value,
    #[serde(default)]
    pub career_path: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBody {
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>,
    pub missing_count: usize,
    pub learning_priority: Vec<PriorityItem>,
}

impl From<GapResult> for AnalysisBody {
    fn from(gap: GapResult) -> Self {
        Self {
            skills_matched: gap.have,
            skills_missing: gap.missing,
            missing_count: gap.missing_count,
            learning_priority: gap.priority,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessBody {
    pub percentage: u32,
    pub level: &'static str,
    pub total_required: usize,
    pub currently_have: usize,
}

impl From<Readiness> for ReadinessBody {
    fn from(r: Readiness) -> Self {
        Self {
            percentage: r.percentage,
            level: r.level.label(),
            total_required: r.total_required,
            currently_have: r.currently_have,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsBody {
    pub next_steps: Vec<String>,
    pub time_estimate: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Human-readable title of the career path.
    pub career_path: String,
    pub user_skills: Value,
    pub required_skills: Vec<String>,
    pub analysis: AnalysisBody,
    pub readiness: ReadinessBody,
    pub recommendations: RecommendationsBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub profile_skills: Value,
    #[serde(default)]
    pub required_skills: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathsResponse {
    pub available_paths: Vec<CareerPathSummary>,
}

#[derive(Debug, Serialize)]
pub struct SkillPriorityResponse {
    pub skill: String,
    pub score: u8,
    pub tier: PriorityTier,
    pub reason: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skill-gap/analyze
///
/// Analyzes a user's skills against a catalog career path and adds a
/// readiness summary and next steps.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if !request.user_skills.is_array() {
        return Err(AppError::Validation(
            "userSkills must be an array of strings".to_string(),
        ));
    }
    check_length("userSkills", &request.user_skills, &state)?;

    let career = request
        .career_path
        .as_str()
        .and_then(|id| state.careers.get(id))
        .ok_or_else(|| AppError::UnknownCareerPath {
            path: match &request.career_path {
                Value::String(id) => id.clone(),
                other => other.to_string(),
            },
            available: state.careers.ids(),
        })?;

    let required = Value::from(career.required_skills.clone());
    let gap = state.analyzer.analyze(&request.user_skills, &required)?;

    let readiness = Readiness::from_gap(&gap, career.required_skills.len());
    let recommendations = Recommendations::from_gap(&gap);

    debug!(
        career_path = %career.id,
        have = gap.have.len(),
        missing = gap.missing_count,
        readiness = readiness.percentage,
        "Skill gap analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        career_path: career.title.clone(),
        user_skills: request.user_skills,
        required_skills: career.required_skills.clone(),
        analysis: gap.into(),
        readiness: readiness.into(),
        recommendations: RecommendationsBody {
            next_steps: recommendations.next_steps,
            time_estimate: recommendations.time_estimate,
        },
    }))
}

/// POST /api/v1/skill-gap/compare
///
/// Raw analysis against a caller-supplied required list. Returns the
/// `GapResult` as-is.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<GapResult>, AppError> {
    check_length("profileSkills", &request.profile_skills, &state)?;
    check_length("requiredSkills", &request.required_skills, &state)?;
    let gap = state
        .analyzer
        .analyze(&request.profile_skills, &request.required_skills)?;

    debug!(
        have = gap.have.len(),
        missing = gap.missing_count,
        "Skill comparison complete"
    );

    Ok(Json(gap))
}

/// GET /api/v1/career-paths
pub async fn handle_career_paths(State(state): State<AppState>) -> Json<CareerPathsResponse> {
    Json(CareerPathsResponse {
        available_paths: state.careers.summaries(),
    })
}

/// GET /api/v1/skills/:skill/priority
pub async fn handle_skill_priority(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<SkillPriorityResponse>, AppError> {
    let skill = normalize_skill(&skill)
        .ok_or_else(|| AppError::Validation("skill cannot be empty".to_string()))?;

    let score = state.analyzer.score(&skill);
    let tier = PriorityTier::from_score(score);

    Ok(Json(SkillPriorityResponse {
        skill,
        score,
        tier,
        reason: tier.reason(),
    }))
}

fn check_length(field: &str, skills: &Value, state: &AppState) -> Result<(), AppError> {
    let limit = state.config.max_skills_per_request;
    match skills.as_array() {
        Some(items) if items.len() > limit => Err(AppError::Validation(format!(
            "{field} cannot contain more than {limit} entries"
        ))),
        _ => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::routes::build_router;
    use crate::skill_gap::careers::CareerCatalog;
    use crate::skill_gap::priority::PriorityTable;
    use crate::state::AppState;

    fn test_app() -> axum::Router {
        let config = Config {
            max_skills_per_request: 10,
            ..Config::default()
        };
        build_router(AppState::new(
            config,
            PriorityTable::builtin(),
            CareerCatalog::builtin(),
        ))
    }

    async fn send(req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = test_app().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_frontend_path() {
        let (status, body) = send(post_json(
            "/api/v1/skill-gap/analyze",
            json!({
                "userSkills": ["HTML", "CSS", "JavaScript", "jQuery"],
                "careerPath": "frontend-developer"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["careerPath"], "Frontend Developer");
        assert_eq!(
            body["analysis"]["skillsMatched"],
            json!(["html", "css", "javascript"])
        );
        assert_eq!(body["analysis"]["missingCount"], 5);
        assert_eq!(body["analysis"]["learningPriority"][0]["skill"], "git");
        assert_eq!(body["readiness"]["percentage"], 38);
        assert_eq!(body["readiness"]["totalRequired"], 8);
        assert_eq!(
            body["readiness"]["level"],
            "Beginner - Significant learning required"
        );
        assert_eq!(
            body["recommendations"]["nextSteps"],
            json!(["Learn git", "Learn react", "Learn typescript"])
        );
        assert_eq!(body["recommendations"]["timeEstimate"], "10-20 weeks");
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_array_skills() {
        let (status, body) = send(post_json(
            "/api/v1/skill-gap/analyze",
            json!({ "userSkills": "python", "careerPath": "data-scientist" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_skills_field() {
        let (status, _) = send(post_json(
            "/api/v1/skill-gap/analyze",
            json!({ "careerPath": "data-scientist" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_unknown_path_lists_available() {
        let (status, body) = send(post_json(
            "/api/v1/skill-gap/analyze",
            json!({ "userSkills": [], "careerPath": "astronaut" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CAREER_PATH");
        assert_eq!(
            body["error"]["details"]["availablePaths"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
    }

    #[tokio::test]
    async fn test_analyze_non_string_path_lists_available() {
        for career_path in [json!(null), json!(5), json!(["data-scientist"])] {
            let (status, body) = send(post_json(
                "/api/v1/skill-gap/analyze",
                json!({ "userSkills": ["python"], "careerPath": career_path }),
            ))
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "INVALID_CAREER_PATH");
            assert_eq!(
                body["error"]["details"]["availablePaths"]
                    .as_array()
                    .unwrap()
                    .len(),
                4
            );
        }
    }

    #[tokio::test]
    async fn test_analyze_path_lookup_is_exact() {
        let (status, body) = send(post_json(
            "/api/v1/skill-gap/analyze",
            json!({ "userSkills": ["python"], "careerPath": " data-scientist " }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CAREER_PATH");
        assert_eq!(
            body["error"]["message"],
            "Invalid career path ' data-scientist '"
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_oversized_skill_list() {
        let skills: Vec<String> = (0..11).map(|i| format!("skill {i}")).collect();
        let (status, body) = send(post_json(
            "/api/v1/skill-gap/analyze",
            json!({ "userSkills": skills, "careerPath": "data-scientist" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("userSkills"));
    }

    #[tokio::test]
    async fn test_compare_returns_gap_result() {
        let (status, body) = send(post_json(
            "/api/v1/skill-gap/compare",
            json!({
                "profileSkills": ["JavaScript", "HTML", "CSS", "Python", "GIT"],
                "requiredSkills": ["javascript", "react", "node.js", "typescript", "docker", "aws"]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["have"], json!(["javascript"]));
        assert_eq!(body["missing_count"], 5);
        assert_eq!(body["priority"][0]["skill"], "react");
        assert_eq!(body["priority"][1]["skill"], "aws");
        assert_eq!(body["priority"][4]["skill"], "docker");
    }

    #[tokio::test]
    async fn test_compare_invalid_argument_is_bad_request() {
        let (status, body) = send(post_json(
            "/api/v1/skill-gap/compare",
            json!({ "profileSkills": "not an array", "requiredSkills": [] }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("profileSkills"));
        assert!(message.contains("requiredSkills"));
    }

    #[tokio::test]
    async fn test_career_paths_listing() {
        let (status, body) = send(get("/api/v1/career-paths")).await;

        assert_eq!(status, StatusCode::OK);
        let paths = body["availablePaths"].as_array().unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0]["id"], "backend-developer");
        assert_eq!(paths[0]["requiredSkillsCount"], 8);
    }

    #[tokio::test]
    async fn test_skill_priority_lookup() {
        let (status, body) = send(get("/api/v1/skills/TypeScript/priority")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill"], "typescript");
        assert_eq!(body["score"], 80);
        assert_eq!(body["tier"], "important");
        assert!(body["reason"]
            .as_str()
            .unwrap()
            .starts_with("Important skill"));
    }

    #[tokio::test]
    async fn test_skill_priority_unknown_skill_defaults() {
        let (status, body) = send(get("/api/v1/skills/cobol/priority")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 50);
        assert_eq!(body["tier"], "nice_to_have");
    }
}
