//! Axum route handlers for the Roles and Evaluation APIs.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::evaluation::breakdown::{
    calculate_resume_breakdown, compare_with_average, improvement_priority, resume_readiness,
    AverageComparison, ResumeBreakdown, ResumeBreakdownInput,
};
use crate::evaluation::catalog::RoleDefinition;
use crate::evaluation::categorize::{categorize_missing_skills, MissingSkills};
use crate::evaluation::comparator::{
    compare_roles, eligibility_label, identify_common_missing_skills, readiness_label,
    role_switch_recommendation, transition_path, CommonMissingSkills, ComparisonResult,
    Eligibility, Readiness, TransitionPath,
};
use crate::evaluation::confidence::{calculate_confidence, ConfidenceResult};
use crate::evaluation::fit_scoring::{RoleFitResult, RoleFitScorer};
use crate::evaluation::resume_score::{ResumeScore, ResumeScoreInput};
use crate::evaluation::roadmap::{
    generate_roadmap, next_skill, roadmap_summary, RoadmapSummary, SkillRoadmap,
    SkillScheduleEntry,
};
use crate::evaluation::simulator::{
    rank_skills_by_impact, simulate, simulation_recommendation, SimulationResult, SkillImpact,
};
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub profile: CandidateProfile,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct FitResponse {
    pub result: RoleFitResult,
    pub missing_skills: MissingSkills,
    pub missing_skill_count: usize,
    pub readiness: Readiness,
    pub eligibility: Eligibility,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub role: String,
    pub role_fit_score: u32,
    pub missing_skills: MissingSkills,
    pub roadmap: SkillRoadmap,
    pub summary: RoadmapSummary,
    pub next_skill: Option<SkillScheduleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub profile: CandidateProfile,
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison: ComparisonResult,
    pub recommendation: String,
    pub common_missing_skills: CommonMissingSkills,
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub profile: CandidateProfile,
    pub current_role: String,
    pub target_role: String,
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub profile: CandidateProfile,
    pub role: String,
    #[serde(default, deserialize_with = "crate::models::profile::deserialize_skills")]
    pub proposed_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub simulation: SimulationResult,
    pub recommendation: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ImpactRequest {
    pub profile: CandidateProfile,
    pub role: String,
    /// Skills to rank. Empty means "everything the role says is missing".
    #[serde(default, deserialize_with = "crate::models::profile::deserialize_skills")]
    pub skill_pool: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ImpactResponse {
    pub role: String,
    pub ranked: Vec<SkillImpact>,
}

#[derive(Debug, Deserialize)]
pub struct ConfidenceRequest {
    pub resume_score: u32,
    pub role_fit_score: u32,
    pub missing_skill_count: usize,
    /// Omitted when the role's requirements are unknown to the caller.
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub breakdown: ResumeBreakdown,
    pub improvement_priority: &'static str,
    pub comparison_with_average: Vec<AverageComparison>,
    pub readiness: Readiness,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: state.scorer.catalog().list_roles(),
    })
}

/// GET /api/v1/roles/:name
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RoleDefinition>, AppError> {
    let role = find_role(&state.scorer, &name)?;
    Ok(Json(role.clone()))
}

/// POST /api/v1/evaluate/fit
///
/// Scores the profile against one role and returns the gaps grouped by priority.
pub async fn handle_fit(
    State(state): State<AppState>,
    Json(request): Json<RoleRequest>,
) -> Result<Json<FitResponse>, AppError> {
    validate_profile(&request.profile)?;
    let result = score(&state.scorer, &request.profile, &request.role)?;

    Ok(Json(FitResponse {
        missing_skills: categorize_missing_skills(&result),
        missing_skill_count: result.missing_count(),
        readiness: readiness_label(result.role_fit_score),
        eligibility: eligibility_label(result.role_fit_score),
        result,
    }))
}

/// POST /api/v1/evaluate/roadmap
///
/// score → categorize → schedule. `next_skill` is null when nothing is missing.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoleRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    validate_profile(&request.profile)?;
    let result = score(&state.scorer, &request.profile, &request.role)?;

    let missing_skills = categorize_missing_skills(&result);
    let roadmap = generate_roadmap(&missing_skills);
    let summary = roadmap_summary(&roadmap);
    let next_skill = next_skill(&roadmap).cloned();

    Ok(Json(RoadmapResponse {
        role: result.role_name,
        role_fit_score: result.role_fit_score,
        missing_skills,
        roadmap,
        summary,
        next_skill,
    }))
}

/// POST /api/v1/evaluate/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    validate_profile(&request.profile)?;
    if request.roles.is_empty() {
        return Err(AppError::Validation("roles cannot be empty".to_string()));
    }

    let comparison = compare_roles(&state.scorer, &request.profile, &request.roles);

    Ok(Json(CompareResponse {
        recommendation: role_switch_recommendation(&comparison),
        common_missing_skills: identify_common_missing_skills(&comparison),
        comparison,
    }))
}

/// POST /api/v1/evaluate/transition
pub async fn handle_transition(
    State(state): State<AppState>,
    Json(request): Json<TransitionRequest>,
) -> Result<Json<TransitionPath>, AppError> {
    validate_profile(&request.profile)?;
    find_role(&state.scorer, &request.current_role)?;
    find_role(&state.scorer, &request.target_role)?;

    let roles = [request.current_role.clone(), request.target_role.clone()];
    let comparison = compare_roles(&state.scorer, &request.profile, &roles);

    transition_path(&comparison, &request.current_role, &request.target_role)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Transition roles not found".to_string()))
}

/// POST /api/v1/evaluate/simulate
pub async fn handle_simulate(
    State(state): State<AppState>,
    Json(request): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, AppError> {
    validate_profile(&request.profile)?;
    let simulation = simulate(
        &state.scorer,
        &request.profile,
        &request.proposed_skills,
        &request.role,
    )
    .ok_or_else(|| unknown_role(&request.role))?;

    Ok(Json(SimulateResponse {
        recommendation: simulation_recommendation(&simulation),
        simulation,
    }))
}

/// POST /api/v1/evaluate/impact
pub async fn handle_impact(
    State(state): State<AppState>,
    Json(request): Json<ImpactRequest>,
) -> Result<Json<ImpactResponse>, AppError> {
    validate_profile(&request.profile)?;

    let pool = if request.skill_pool.is_empty() {
        score(&state.scorer, &request.profile, &request.role)?.all_missing_skills()
    } else {
        request.skill_pool
    };

    let ranked = rank_skills_by_impact(&state.scorer, &request.profile, &pool, &request.role)
        .ok_or_else(|| unknown_role(&request.role))?;

    Ok(Json(ImpactResponse {
        role: request.role,
        ranked,
    }))
}

/// POST /api/v1/evaluate/confidence
pub async fn handle_confidence(
    State(state): State<AppState>,
    Json(request): Json<ConfidenceRequest>,
) -> Result<Json<ConfidenceResult>, AppError> {
    if request.resume_score > 100 || request.role_fit_score > 100 {
        return Err(AppError::Validation(
            "scores must be between 0 and 100".to_string(),
        ));
    }

    let role = match request.role.as_deref() {
        Some(name) => Some(find_role(&state.scorer, name)?),
        None => None,
    };

    Ok(Json(calculate_confidence(
        request.resume_score,
        request.role_fit_score,
        request.missing_skill_count,
        role,
    )))
}

/// POST /api/v1/evaluate/breakdown
pub async fn handle_breakdown(
    Json(request): Json<ResumeBreakdownInput>,
) -> Result<Json<BreakdownResponse>, AppError> {
    if let Some(cgpa) = request.cgpa {
        validate_cgpa(cgpa)?;
    }

    let breakdown = calculate_resume_breakdown(&request);

    Ok(Json(BreakdownResponse {
        improvement_priority: improvement_priority(&breakdown.sections),
        comparison_with_average: compare_with_average(&breakdown),
        readiness: resume_readiness(breakdown.total_score),
        breakdown,
    }))
}

/// POST /api/v1/evaluate/resume
///
/// The general resume score, its readiness and the basic skills it lacks.
pub async fn handle_resume_score(
    Json(request): Json<ResumeScoreInput>,
) -> Result<Json<ResumeScore>, AppError> {
    validate_resume(&request)?;
    Ok(Json(request.evaluate()))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn unknown_role(name: &str) -> AppError {
    AppError::NotFound(format!("Role '{name}' not found"))
}

fn find_role(scorer: &RoleFitScorer, name: &str) -> Result<&'static RoleDefinition, AppError> {
    scorer.catalog().get(name).ok_or_else(|| unknown_role(name))
}

fn score(
    scorer: &RoleFitScorer,
    profile: &CandidateProfile,
    role_name: &str,
) -> Result<RoleFitResult, AppError> {
    scorer
        .score_role(profile, role_name)
        .ok_or_else(|| unknown_role(role_name))
}

/// The engine tolerates any CGPA; requests are held to the 0 – 10 scale.
fn validate_profile(profile: &CandidateProfile) -> Result<(), AppError> {
    validate_cgpa(profile.cgpa)
}

pub(crate) fn validate_resume(resume: &ResumeScoreInput) -> Result<(), AppError> {
    match resume.cgpa {
        Some(cgpa) => validate_cgpa(cgpa),
        None => Ok(()),
    }
}

fn validate_cgpa(cgpa: f64) -> Result<(), AppError> {
    if !(0.0..=10.0).contains(&cgpa) {
        return Err(AppError::Validation(
            "cgpa must be between 0 and 10".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cgpa_range() {
        assert!(validate_cgpa(0.0).is_ok());
        assert!(validate_cgpa(10.0).is_ok());
        assert!(matches!(validate_cgpa(10.5), Err(AppError::Validation(_))));
        assert!(matches!(validate_cgpa(-1.0), Err(AppError::Validation(_))));
        assert!(matches!(validate_cgpa(f64::NAN), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_role_is_not_found() {
        let scorer = RoleFitScorer::default();
        assert!(matches!(
            find_role(&scorer, "data analyst"),
            Err(AppError::NotFound(_))
        ));
        assert!(find_role(&scorer, "Data Analyst").is_ok());
    }

    #[test]
    fn test_simulate_request_accepts_comma_skills() {
        let request: SimulateRequest = serde_json::from_value(serde_json::json!({
            "profile": {"skills": ["Python"], "cgpa": 7.0, "project_count": 1},
            "role": "Data Analyst",
            "proposed_skills": "Excel, Tableau"
        }))
        .unwrap();
        assert_eq!(request.proposed_skills, vec!["Excel", "Tableau"]);
    }
}
