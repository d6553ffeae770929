use serde::{Deserialize, Deserializer, Serialize};

/// The candidate as seen by the evaluation engine. Supplied per request and never
/// persisted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Free-text skills. Accepts a JSON list or comma-separated text.
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub cgpa: f64,
    #[serde(default)]
    pub project_count: u32,
}

impl CandidateProfile {
    #[cfg(test)]
    pub fn new(skills: &[&str], cgpa: f64, project_count: u32) -> Self {
        Self {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            cgpa,
            project_count,
        }
    }

    /// Same CGPA and project count, different skill set.
    pub fn with_skills(&self, skills: Vec<String>) -> Self {
        Self {
            skills,
            cgpa: self.cgpa,
            project_count: self.project_count,
        }
    }
}

/// Splits comma-separated skill text, dropping blanks.
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Counts projects in free text as non-empty lines. Placeholder answers count as zero.
pub fn count_projects(text: &str) -> u32 {
    let trimmed = text.trim();
    if matches!(
        trimmed.to_lowercase().as_str(),
        "" | "none" | "null" | "n/a" | "na"
    ) {
        return 0;
    }
    trimmed.lines().filter(|l| !l.trim().is_empty()).count() as u32
}

pub(crate) fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SkillsInput {
        List(Vec<String>),
        Text(String),
    }

    Ok(match SkillsInput::deserialize(deserializer)? {
        SkillsInput::List(list) => list,
        SkillsInput::Text(text) => split_skills(&text),
    })
}
