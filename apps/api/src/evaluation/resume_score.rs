//! General resume score (0 – 100), the number saved with every resume.
//!
//! CGPA 40, basic skills 30, projects 20, completeness 10.

use serde::{Deserialize, Serialize};

use crate::evaluation::breakdown::resume_readiness;
use crate::evaluation::comparator::Readiness;

/// Baseline skills every resume is checked against, lowercase.
pub const BASIC_SKILLS: &[&str] = &["python", "java", "sql", "html", "css", "javascript"];

const CGPA_POINTS: f64 = 40.0;
const SKILL_POINTS: f64 = 30.0;
const SHORT_PROJECTS_POINTS: f64 = 10.0;
const FULL_PROJECTS_POINTS: f64 = 20.0;
const COMPLETENESS_POINTS: f64 = 10.0;
/// Project descriptions shorter than this (in characters) earn half credit.
const FULL_PROJECTS_MIN_CHARS: usize = 50;

/// Resume fields as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeScoreInput {
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::profile::deserialize_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: String,
    #[serde(default = "default_fields_present")]
    pub fields_present: bool,
}

fn default_fields_present() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeScore {
    pub score: u32,
    pub status: Readiness,
    /// Basic skills not on the resume, in `BASIC_SKILLS` order.
    pub missing_skills: Vec<String>,
}

impl ResumeScoreInput {
    pub fn evaluate(&self) -> ResumeScore {
        let (score, missing_skills) =
            calculate_resume_score(self.cgpa, &self.skills, &self.projects, self.fields_present);
        ResumeScore {
            score,
            status: resume_readiness(score),
            missing_skills,
        }
    }
}

/// Scores a resume and lists the basic skills it lacks.
///
/// A missing or non-finite CGPA scores 0. Skills match `BASIC_SKILLS` exactly
/// after trimming and lowercasing. The total is rounded half to even.
pub fn calculate_resume_score(
    cgpa: Option<f64>,
    skills: &[String],
    projects: &str,
    fields_present: bool,
) -> (u32, Vec<String>) {
    let cgpa_score = cgpa
        .filter(|c| c.is_finite())
        .map(|c| (c / 10.0 * CGPA_POINTS).clamp(0.0, CGPA_POINTS))
        .unwrap_or(0.0);

    let user_skills: Vec<String> = skills.iter().map(|s| s.trim().to_lowercase()).collect();
    let has = |basic: &str| user_skills.iter().any(|s| s == basic);
    let matched = BASIC_SKILLS.iter().filter(|b| has(**b)).count();
    let skill_score = matched as f64 / BASIC_SKILLS.len() as f64 * SKILL_POINTS;

    let projects = projects.trim();
    let project_score = if projects.is_empty() {
        0.0
    } else if projects.chars().count() < FULL_PROJECTS_MIN_CHARS {
        SHORT_PROJECTS_POINTS
    } else {
        FULL_PROJECTS_POINTS
    };

    let completeness_score = if fields_present { COMPLETENESS_POINTS } else { 0.0 };

    let total = cgpa_score + skill_score + project_score + completeness_score;
    let missing = BASIC_SKILLS
        .iter()
        .filter(|b| !has(**b))
        .map(|b| b.to_string())
        .collect();

    (total.round_ties_even() as u32, missing)
}
