//! Role Comparator — scores one candidate across several roles and ranks them.
//!
//! Unknown role names are skipped; a partial comparison is still a valid result.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluation::fit_scoring::RoleFitScorer;
use crate::models::profile::CandidateProfile;

// ────────────────────────────────────────────────────────────────────────────
// Labels
// ────────────────────────────────────────────────────────────────────────────

/// Readiness ladder: 70 / 50.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    #[serde(rename = "Partially Ready")]
    PartiallyReady,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl Readiness {
    pub fn as_str(self) -> &'static str {
        match self {
            Readiness::Ready => "Ready",
            Readiness::PartiallyReady => "Partially Ready",
            Readiness::NotReady => "Not Ready",
        }
    }
}

/// Eligibility ladder: 70 / 40. Deliberately distinct from readiness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    #[serde(rename = "Partially Eligible")]
    PartiallyEligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
}

pub fn readiness_label(score: u32) -> Readiness {
    match score {
        s if s >= 70 => Readiness::Ready,
        s if s >= 50 => Readiness::PartiallyReady,
        _ => Readiness::NotReady,
    }
}

pub fn eligibility_label(score: u32) -> Eligibility {
    match score {
        s if s >= 70 => Eligibility::Eligible,
        s if s >= 40 => Eligibility::PartiallyEligible,
        _ => Eligibility::NotEligible,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoleComparison {
    pub role_name: String,
    pub role_fit_score: u32,
    pub readiness: Readiness,
    pub eligibility: Eligibility,
    pub missing_skills_count: usize,
    pub missing_skills: Vec<String>,
    pub core_match: usize,
    pub secondary_match: usize,
    pub bonus_match: usize,
    pub cgpa_met: bool,
    pub projects_met: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ComparisonResult {
    /// Sorted by score descending; ties keep request order.
    pub comparisons: Vec<RoleComparison>,
    pub best_fit_role: Option<String>,
    pub best_fit_score: u32,
    pub worst_fit_role: Option<String>,
    pub worst_fit_score: u32,
    pub total_roles_compared: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CommonMissingSkills {
    /// Missing from every compared role.
    pub common_skills: Vec<String>,
    /// Missing from at least half the compared roles, excluding common ones.
    pub frequent_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Feasibility {
    Easy,
    Moderate,
    Difficult,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransitionPath {
    pub feasibility: Feasibility,
    pub skills_to_acquire: Vec<String>,
    pub estimated_time: String,
    pub current_score: u32,
    pub target_score: u32,
    pub score_gap: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Scores `profile` against each named role and ranks the results.
pub fn compare_roles(
    scorer: &RoleFitScorer,
    profile: &CandidateProfile,
    role_names: &[String],
) -> ComparisonResult {
    let mut comparisons: Vec<RoleComparison> = role_names
        .iter()
        .filter_map(|name| {
            let role = scorer.catalog().get(name)?;
            let result = scorer.score_definition(profile, role);
            let missing_skills = result.all_missing_skills();
            Some(RoleComparison {
                role_name: result.role_name,
                role_fit_score: result.role_fit_score,
                readiness: readiness_label(result.role_fit_score),
                eligibility: eligibility_label(result.role_fit_score),
                missing_skills_count: missing_skills.len(),
                missing_skills,
                core_match: result.core_match,
                secondary_match: result.secondary_match,
                bonus_match: result.bonus_match,
                cgpa_met: result.cgpa_met,
                projects_met: result.projects_met,
                description: role.description.to_string(),
            })
        })
        .collect();

    // Stable: equal scores keep request order.
    comparisons.sort_by(|a, b| b.role_fit_score.cmp(&a.role_fit_score));

    debug!(
        requested = role_names.len(),
        compared = comparisons.len(),
        "compared roles"
    );

    let best = comparisons.first();
    let worst = comparisons.last();
    ComparisonResult {
        best_fit_role: best.map(|c| c.role_name.clone()),
        best_fit_score: best.map_or(0, |c| c.role_fit_score),
        worst_fit_role: worst.map(|c| c.role_name.clone()),
        worst_fit_score: worst.map_or(0, |c| c.role_fit_score),
        total_roles_compared: comparisons.len(),
        comparisons,
    }
}

/// Canned advice keyed on the spread between best and worst fit.
pub fn role_switch_recommendation(comparison: &ComparisonResult) -> String {
    let score_gap = comparison
        .best_fit_score
        .saturating_sub(comparison.worst_fit_score);
    let best = comparison.best_fit_role.as_deref().unwrap_or_default();

    if score_gap >= 40 {
        format!("Strong recommendation: Focus on {best} - it's your best match!")
    } else if score_gap >= 20 {
        format!("Consider {best} as your primary target.")
    } else {
        "You have similar fit across multiple roles - choose based on interest.".to_string()
    }
}

/// Skills missing across many of the compared roles, in first-seen order.
pub fn identify_common_missing_skills(comparison: &ComparisonResult) -> CommonMissingSkills {
    let total_roles = comparison.comparisons.len();
    if total_roles == 0 {
        return CommonMissingSkills::default();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for role in &comparison.comparisons {
        let mut seen = HashSet::new();
        for skill in &role.missing_skills {
            // A skill counts at most once per role.
            if !seen.insert(skill.as_str()) {
                continue;
            }
            let count = counts.entry(skill.as_str()).or_insert(0);
            if *count == 0 {
                order.push(skill.as_str());
            }
            *count += 1;
        }
    }

    let mut result = CommonMissingSkills::default();
    for skill in order {
        let count = counts[skill];
        if count == total_roles {
            result.common_skills.push(skill.to_string());
        } else if count * 2 >= total_roles {
            result.frequent_skills.push(skill.to_string());
        }
    }
    result
}

/// How hard moving from `current_role` to `target_role` looks, given a comparison
/// that includes both. `None` if either is absent.
pub fn transition_path(
    comparison: &ComparisonResult,
    current_role: &str,
    target_role: &str,
) -> Option<TransitionPath> {
    let find = |name: &str| comparison.comparisons.iter().find(|c| c.role_name == name);
    let current = find(current_role)?;
    let target = find(target_role)?;

    let score_gap = target.role_fit_score.abs_diff(current.role_fit_score);
    let (feasibility, estimated_time) = match score_gap {
        g if g <= 20 => (Feasibility::Easy, "3-6 months"),
        g if g <= 40 => (Feasibility::Moderate, "6-12 months"),
        _ => (Feasibility::Difficult, "12+ months"),
    };

    Some(TransitionPath {
        feasibility,
        skills_to_acquire: target.missing_skills.clone(),
        estimated_time: estimated_time.to_string(),
        current_score: current.role_fit_score,
        target_score: target.role_fit_score,
        score_gap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roles: &[&str]) -> Vec<String> {
        roles.iter().map(|r| r.to_string()).collect()
    }

    fn data_profile() -> CandidateProfile {
        CandidateProfile::new(&["Python", "SQL", "Statistics", "Pandas"], 7.8, 3)
    }

    #[test]
    fn test_label_thresholds_are_distinct() {
        assert_eq!(readiness_label(70), Readiness::Ready);
        assert_eq!(readiness_label(69), Readiness::PartiallyReady);
        assert_eq!(readiness_label(50), Readiness::PartiallyReady);
        assert_eq!(readiness_label(49), Readiness::NotReady);

        assert_eq!(eligibility_label(70), Eligibility::Eligible);
        assert_eq!(eligibility_label(45), Eligibility::PartiallyEligible);
        assert_eq!(eligibility_label(40), Eligibility::PartiallyEligible);
        assert_eq!(eligibility_label(39), Eligibility::NotEligible);
        // 45 is not ready yet partially eligible
        assert_eq!(readiness_label(45), Readiness::NotReady);
    }

    #[test]
    fn test_sorted_descending_with_best_and_worst() {
        let scorer = RoleFitScorer::default();
        let result = compare_roles(
            &scorer,
            &data_profile(),
            &names(&["UI/UX Designer", "Data Scientist", "Data Analyst"]),
        );

        assert_eq!(result.total_roles_compared, 3);
        let scores: Vec<u32> = result.comparisons.iter().map(|c| c.role_fit_score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(result.worst_fit_role.as_deref(), Some("UI/UX Designer"));
        assert!(result.best_fit_score >= result.worst_fit_score);
        assert_eq!(result.best_fit_role.as_deref(), Some(result.comparisons[0].role_name.as_str()));
    }

    #[test]
    fn test_unknown_roles_skipped() {
        let scorer = RoleFitScorer::default();
        let result = compare_roles(
            &scorer,
            &data_profile(),
            &names(&["Astronaut", "Data Analyst", "Chef"]),
        );
        assert_eq!(result.total_roles_compared, 1);
        assert_eq!(result.comparisons[0].role_name, "Data Analyst");
    }

    #[test]
    fn test_no_resolved_roles_is_empty() {
        let scorer = RoleFitScorer::default();
        let result = compare_roles(&scorer, &data_profile(), &names(&["Astronaut"]));
        assert!(result.comparisons.is_empty());
        assert!(result.best_fit_role.is_none());
        assert_eq!(result.best_fit_score, 0);
        assert_eq!(identify_common_missing_skills(&result), CommonMissingSkills::default());
    }

    #[test]
    fn test_ties_keep_request_order() {
        let scorer = RoleFitScorer::default();
        let empty = CandidateProfile::new(&[], 0.0, 0);
        let result = compare_roles(
            &scorer,
            &empty,
            &names(&["QA Engineer", "Cloud Engineer", "Web Developer"]),
        );
        let order: Vec<&str> = result.comparisons.iter().map(|c| c.role_name.as_str()).collect();
        assert_eq!(order, vec!["QA Engineer", "Cloud Engineer", "Web Developer"]);
    }

    #[test]
    fn test_single_role_recommendation_is_similar_fit() {
        let scorer = RoleFitScorer::default();
        let result = compare_roles(&scorer, &data_profile(), &names(&["Data Analyst"]));
        assert_eq!(result.best_fit_role, result.worst_fit_role);
        assert!(role_switch_recommendation(&result).contains("choose based on interest"));
    }

    #[test]
    fn test_recommendation_ladder() {
        let mut result = ComparisonResult {
            best_fit_role: Some("Data Analyst".to_string()),
            best_fit_score: 80,
            worst_fit_role: Some("UI/UX Designer".to_string()),
            worst_fit_score: 40,
            ..Default::default()
        };
        assert!(role_switch_recommendation(&result).starts_with("Strong recommendation: Focus on Data Analyst"));

        result.worst_fit_score = 60;
        assert_eq!(
            role_switch_recommendation(&result),
            "Consider Data Analyst as your primary target."
        );

        result.worst_fit_score = 61;
        assert!(role_switch_recommendation(&result).contains("similar fit"));
    }

    #[test]
    fn test_common_and_frequent_missing_skills() {
        let scorer = RoleFitScorer::default();
        let profile = CandidateProfile::new(&["Python"], 8.0, 4);
        let result = compare_roles(
            &scorer,
            &profile,
            &names(&["Data Analyst", "Data Scientist", "Backend Developer"]),
        );
        let common = identify_common_missing_skills(&result);

        // SQL is missing everywhere; Statistics only in the two data roles.
        assert!(common.common_skills.contains(&"SQL".to_string()));
        assert!(common.frequent_skills.contains(&"Statistics".to_string()));
        assert!(!common.frequent_skills.contains(&"SQL".to_string()));
        assert!(!common.frequent_skills.contains(&"Excel".to_string()));
        for skill in &common.common_skills {
            assert!(!common.frequent_skills.contains(skill));
        }
    }

    #[test]
    fn test_transition_path() {
        let scorer = RoleFitScorer::default();
        let result = compare_roles(
            &scorer,
            &data_profile(),
            &names(&["Data Analyst", "UI/UX Designer"]),
        );
        let path = transition_path(&result, "Data Analyst", "UI/UX Designer").unwrap();
        let analyst = &result.comparisons[0];
        assert_eq!(path.current_score, analyst.role_fit_score);
        assert_eq!(path.score_gap, analyst.role_fit_score.abs_diff(path.target_score));
        assert_eq!(path.skills_to_acquire, result.comparisons[1].missing_skills);

        assert!(transition_path(&result, "Data Analyst", "Chef").is_none());
    }

    #[test]
    fn test_transition_feasibility_bands() {
        let role = |name: &str, score: u32| RoleComparison {
            role_name: name.to_string(),
            role_fit_score: score,
            readiness: readiness_label(score),
            eligibility: eligibility_label(score),
            missing_skills_count: 0,
            missing_skills: vec![],
            core_match: 0,
            secondary_match: 0,
            bonus_match: 0,
            cgpa_met: true,
            projects_met: true,
            description: String::new(),
        };
        let comparison = ComparisonResult {
            comparisons: vec![role("A", 90), role("B", 70), role("C", 50), role("D", 20)],
            ..Default::default()
        };
        let band = |to: &str| transition_path(&comparison, "A", to).unwrap().feasibility;
        assert_eq!(band("B"), Feasibility::Easy);
        assert_eq!(band("C"), Feasibility::Moderate);
        assert_eq!(band("D"), Feasibility::Difficult);
    }
}
