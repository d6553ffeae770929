//! Confidence Index — folds resume quality, role fit and gap density into one tier.

use serde::{Deserialize, Serialize};

use crate::evaluation::catalog::RoleDefinition;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfidenceFactors {
    pub resume_factor: u32,         // 10 / 20 / 30
    pub role_fit_factor: u32,       // 10 / 20 / 30 / 40
    pub missing_skills_factor: u32, // 5 / 10 / 15 / 20 / 30
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConfidenceResult {
    pub confidence_level: ConfidenceLevel,
    pub confidence_score: u32, // 0 – 100
    pub factors: ConfidenceFactors,
    pub recommendations: Vec<String>,
}

/// Missing-skill factor when the role's requirements are not available at all.
const UNKNOWN_ROLE_MISSING_FACTOR: u32 = 15;
/// Missing-skill factor when the role requires no core or secondary skills.
const NO_REQUIREMENTS_MISSING_FACTOR: u32 = 30;

/// Composite confidence from three independently bucketed factors.
///
/// - resume score: ≥80 → 30, ≥60 → 20, else 10
/// - role fit: ≥80 → 40, ≥60 → 30, ≥40 → 20, else 10
/// - missing / (core + secondary): ≤0.2 → 30, ≤0.4 → 20, ≤0.6 → 10, else 5
///
/// Composite ≥75 is High, ≥50 Medium, else Low.
pub fn calculate_confidence(
    resume_score: u32,
    role_fit_score: u32,
    missing_skill_count: usize,
    role: Option<&RoleDefinition>,
) -> ConfidenceResult {
    let resume_factor = match resume_score {
        s if s >= 80 => 30,
        s if s >= 60 => 20,
        _ => 10,
    };

    let role_fit_factor = match role_fit_score {
        s if s >= 80 => 40,
        s if s >= 60 => 30,
        s if s >= 40 => 20,
        _ => 10,
    };

    let missing_skills_factor = match role.map(RoleDefinition::required_skill_count) {
        None => UNKNOWN_ROLE_MISSING_FACTOR,
        Some(0) => NO_REQUIREMENTS_MISSING_FACTOR,
        Some(required) => match missing_skill_count as f64 / required as f64 {
            r if r <= 0.2 => 30,
            r if r <= 0.4 => 20,
            r if r <= 0.6 => 10,
            _ => 5,
        },
    };

    let confidence_score = resume_factor + role_fit_factor + missing_skills_factor;
    let confidence_level = match confidence_score {
        s if s >= 75 => ConfidenceLevel::High,
        s if s >= 50 => ConfidenceLevel::Medium,
        _ => ConfidenceLevel::Low,
    };

    let mut recommendations = Vec::new();
    if resume_score < 70 {
        recommendations.push("Improve resume quality by adding more projects and skills");
    }
    if role_fit_score < 60 {
        recommendations.push("Focus on acquiring role-specific skills");
    }
    if missing_skill_count > 5 {
        recommendations.push("Prioritize learning critical skills first");
    }
    recommendations.push(match confidence_level {
        ConfidenceLevel::Low => "Consider gaining more experience before applying",
        ConfidenceLevel::Medium => "You're on the right track - keep building skills",
        ConfidenceLevel::High => "You're well-prepared for this role!",
    });

    ConfidenceResult {
        confidence_level,
        confidence_score,
        factors: ConfidenceFactors {
            resume_factor,
            role_fit_factor,
            missing_skills_factor,
        },
        recommendations: recommendations.into_iter().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::catalog::RoleCatalog;

    const EMPTY_ROLE: RoleDefinition = RoleDefinition {
        name: "Generalist",
        core_skills: &[],
        secondary_skills: &[],
        bonus_skills: &["Curiosity"],
        min_cgpa: 0.0,
        min_projects: 0,
        description: "Anything goes",
    };

    fn analyst() -> &'static RoleDefinition {
        RoleCatalog::builtin().get("Data Analyst").unwrap()
    }

    #[test]
    fn test_high_confidence() {
        // 9 required skills, 1 missing → ratio 0.11 → 30
        let result = calculate_confidence(85, 82, 1, Some(analyst()));
        assert_eq!(result.factors.resume_factor, 30);
        assert_eq!(result.factors.role_fit_factor, 40);
        assert_eq!(result.factors.missing_skills_factor, 30);
        assert_eq!(result.confidence_score, 100);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
        assert_eq!(result.recommendations, vec!["You're well-prepared for this role!"]);
    }

    #[test]
    fn test_low_confidence_collects_all_recommendations() {
        // 8 of 9 missing → ratio 0.89 → 5
        let result = calculate_confidence(40, 30, 8, Some(analyst()));
        assert_eq!(result.confidence_score, 10 + 10 + 5);
        assert_eq!(result.confidence_level, ConfidenceLevel::Low);
        assert_eq!(
            result.recommendations,
            vec![
                "Improve resume quality by adding more projects and skills",
                "Focus on acquiring role-specific skills",
                "Prioritize learning critical skills first",
                "Consider gaining more experience before applying",
            ]
        );
    }

    #[test]
    fn test_medium_band() {
        // 3 of 9 missing → 0.33 → 20; 20 + 20 + 20 = 60
        let result = calculate_confidence(65, 45, 3, Some(analyst()));
        assert_eq!(result.confidence_score, 60);
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
        assert_eq!(
            result.recommendations.last().map(String::as_str),
            Some("You're on the right track - keep building skills")
        );
    }

    #[test]
    fn test_ratio_boundaries_inclusive() {
        // 10 required skills, so 2 / 4 / 6 missing land exactly on each boundary.
        let role = RoleCatalog::builtin().get("Full Stack Developer").unwrap();
        assert_eq!(role.required_skill_count(), 10);
        assert_eq!(calculate_confidence(0, 0, 2, Some(role)).factors.missing_skills_factor, 30);
        assert_eq!(calculate_confidence(0, 0, 4, Some(role)).factors.missing_skills_factor, 20);
        assert_eq!(calculate_confidence(0, 0, 6, Some(role)).factors.missing_skills_factor, 10);
        assert_eq!(calculate_confidence(0, 0, 7, Some(role)).factors.missing_skills_factor, 5);
    }

    #[test]
    fn test_zero_required_skills_defaults_to_30() {
        let result = calculate_confidence(50, 50, 3, Some(&EMPTY_ROLE));
        assert_eq!(result.factors.missing_skills_factor, 30);
    }

    #[test]
    fn test_absent_requirements_default_to_15() {
        let result = calculate_confidence(50, 50, 3, None);
        assert_eq!(result.factors.missing_skills_factor, 15);
    }
}
