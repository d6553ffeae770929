//! Resume Strength Breakdown — section-wise general resume score (0 – 100).
//!
//! This is the resume-quality input to the confidence index and the score
//! recorded in resume history.

use serde::{Deserialize, Serialize};

use crate::evaluation::comparator::Readiness;
use crate::models::profile::count_projects;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeExtras {
    pub github_username: Option<String>,
    pub about_yourself: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeBreakdownInput {
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default, deserialize_with = "crate::models::profile::deserialize_skills")]
    pub skills: Vec<String>,
    /// Free text, one project per line.
    #[serde(default)]
    pub projects: String,
    #[serde(default = "default_education_count")]
    pub education_count: u32,
    #[serde(default)]
    pub extras: Option<ResumeExtras>,
}

fn default_education_count() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionScore {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub details: String,
}

impl SectionScore {
    fn new(score: u32, max_score: u32, details: String) -> Self {
        Self {
            score,
            max_score,
            percentage: score * 100 / max_score,
            details,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeSections {
    pub education: SectionScore, // /25
    pub skills: SectionScore,    // /35
    pub projects: SectionScore,  // /30
    pub extras: SectionScore,    // /10
}

impl ResumeSections {
    /// Sections in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SectionScore)> {
        [
            ("education", &self.education),
            ("skills", &self.skills),
            ("projects", &self.projects),
            ("extras", &self.extras),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeBreakdown {
    pub total_score: u32,
    pub sections: ResumeSections,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AverageStatus {
    #[serde(rename = "Above Average")]
    AboveAverage,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AverageComparison {
    pub section: String,
    pub user_score: u32,
    pub average_score: u32,
    pub difference: i64,
    pub status: AverageStatus,
}

/// Typical student profile per section.
const SECTION_AVERAGES: &[(&str, u32)] = &[
    ("education", 18),
    ("skills", 25),
    ("projects", 20),
    ("extras", 5),
];

pub fn calculate_resume_breakdown(input: &ResumeBreakdownInput) -> ResumeBreakdown {
    let education = score_education(input.cgpa.unwrap_or(0.0), input.education_count);
    let skills = score_skills(&input.skills);
    let projects = score_projects(&input.projects);
    let extras = score_extras(&input.projects, input.extras.as_ref());

    let total_score = education.score + skills.score + projects.score + extras.score;

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut recommendations = Vec::new();

    if education.percentage >= 80 {
        strengths.push("Strong academic background");
    } else if education.percentage < 60 {
        weaknesses.push("CGPA could be improved");
        recommendations.push("Focus on maintaining good grades");
    }

    if skills.percentage >= 80 {
        strengths.push("Diverse skill set");
    } else if skills.percentage < 60 {
        weaknesses.push("Limited skills listed");
        recommendations.push("Learn and add more relevant skills");
    }

    if projects.percentage >= 80 {
        strengths.push("Strong project portfolio");
    } else if projects.percentage < 60 {
        weaknesses.push("Insufficient projects");
        recommendations.push("Build more projects to demonstrate skills");
    }

    if extras.percentage >= 60 {
        strengths.push("Good additional information");
    } else {
        recommendations.push("Add GitHub profile and professional summary");
    }

    recommendations.push(match total_score {
        s if s < 60 => "Overall resume needs significant improvement",
        s if s < 80 => "Good foundation - focus on weak areas",
        _ => "Strong resume - maintain and update regularly",
    });

    let owned = |v: Vec<&str>| -> Vec<String> { v.into_iter().map(String::from).collect() };
    ResumeBreakdown {
        total_score,
        sections: ResumeSections {
            education,
            skills,
            projects,
            extras,
        },
        strengths: owned(strengths),
        weaknesses: owned(weaknesses),
        recommendations: owned(recommendations),
    }
}

/// The section with the lowest percentage; earlier sections win ties.
pub fn improvement_priority(sections: &ResumeSections) -> &'static str {
    sections
        .iter()
        .fold(None, |lowest: Option<(&'static str, u32)>, (name, section)| match lowest {
            Some((_, pct)) if pct <= section.percentage => lowest,
            _ => Some((name, section.percentage)),
        })
        .map(|(name, _)| name)
        .unwrap_or("education")
}

pub fn compare_with_average(breakdown: &ResumeBreakdown) -> Vec<AverageComparison> {
    breakdown
        .sections
        .iter()
        .zip(SECTION_AVERAGES)
        .map(|((section, scored), &(_, average_score))| {
            let difference = scored.score as i64 - average_score as i64;
            let status = match difference {
                d if d > 0 => AverageStatus::AboveAverage,
                0 => AverageStatus::Average,
                _ => AverageStatus::BelowAverage,
            };
            AverageComparison {
                section: section.to_string(),
                user_score: scored.score,
                average_score,
                difference,
                status,
            }
        })
        .collect()
}

/// Placement readiness of a general resume score: 80 / 60.
pub fn resume_readiness(score: u32) -> Readiness {
    match score {
        s if s >= 80 => Readiness::Ready,
        s if s >= 60 => Readiness::PartiallyReady,
        _ => Readiness::NotReady,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section scorers
// ────────────────────────────────────────────────────────────────────────────

fn score_education(cgpa: f64, education_count: u32) -> SectionScore {
    let mut score = match cgpa {
        c if c >= 9.0 => 25,
        c if c >= 8.0 => 22,
        c if c >= 7.0 => 18,
        c if c >= 6.0 => 14,
        _ => 10,
    };
    if education_count > 1 {
        score = (score + 2).min(25);
    }
    SectionScore::new(score, 25, format!("CGPA: {cgpa:?}/10"))
}

/// Comma text arrives with blanks already dropped; list entries count as given.
fn score_skills(skills: &[String]) -> SectionScore {
    let count = skills.len();
    let score = match count {
        c if c >= 10 => 35,
        c if c >= 7 => 30,
        c if c >= 5 => 25,
        c if c >= 3 => 18,
        _ => 10,
    };
    SectionScore::new(score, 35, format!("{count} skills listed"))
}

fn score_projects(projects: &str) -> SectionScore {
    let count = count_projects(projects);
    let score = match count {
        c if c >= 5 => 30,
        4 => 26,
        3 => 22,
        2 => 16,
        1 => 10,
        _ => 0,
    };
    SectionScore::new(score, 30, format!("{count} projects"))
}

fn score_extras(projects: &str, extras: Option<&ResumeExtras>) -> SectionScore {
    let Some(extras) = extras else {
        return SectionScore::new(0, 10, "None".to_string());
    };

    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    let mut score = 0;
    let mut details = Vec::new();

    if filled(&extras.github_username) {
        score += 3;
        details.push("GitHub profile");
    }
    if filled(&extras.about_yourself) {
        score += 2;
        details.push("Professional summary");
    }
    if filled(&extras.city) {
        score += 1;
        details.push("Location");
    }

    let text = format!(
        "{projects} {}",
        extras.about_yourself.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    if text.contains("certif") || text.contains("course") {
        score += 2;
        details.push("Certifications/Courses");
    }
    if text.contains("award") || text.contains("achievement") {
        score += 2;
        details.push("Awards/Achievements");
    }

    let details = if details.is_empty() {
        "None".to_string()
    } else {
        details.join(", ")
    };
    SectionScore::new(score.min(10), 10, details)
}
