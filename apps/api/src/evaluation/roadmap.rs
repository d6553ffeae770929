//! Skill Roadmap — schedules missing skills into a sequential learning plan.
//!
//! One skill is learned at a time. Critical skills come first, then important,
//! then nice-to-have, each in catalog order, regardless of individual duration.

use serde::{Deserialize, Serialize};

use crate::evaluation::categorize::MissingSkills;

/// Learning duration for skills absent from the table.
pub const DEFAULT_LEARNING_WEEKS: u32 = 6;
pub const SHORT_TERM_END_WEEK: u32 = 12;
pub const MID_TERM_END_WEEK: u32 = 24;

const SKILL_LEARNING_WEEKS: &[(&str, u32)] = &[
    // Programming languages
    ("Python", 8),
    ("Java", 10),
    ("C++", 12),
    ("JavaScript", 6),
    ("TypeScript", 4),
    ("Kotlin", 8),
    ("Swift", 8),
    ("R", 6),
    // Web
    ("HTML", 2),
    ("CSS", 3),
    ("React", 6),
    ("Node.js", 6),
    ("Angular", 8),
    ("Vue.js", 6),
    ("Redux", 4),
    // Databases
    ("SQL", 4),
    ("MongoDB", 4),
    ("PostgreSQL", 4),
    ("Redis", 3),
    ("Database", 4),
    ("Database Design", 5),
    // Data science and ML
    ("Machine Learning", 12),
    ("Deep Learning", 16),
    ("NLP", 10),
    ("Statistics", 8),
    ("Data Analysis", 6),
    ("Data Visualization", 4),
    ("TensorFlow", 8),
    ("PyTorch", 8),
    ("Pandas", 4),
    ("NumPy", 3),
    // Cloud and DevOps
    ("AWS", 8),
    ("Azure", 8),
    ("Docker", 4),
    ("Kubernetes", 8),
    ("CI/CD", 6),
    ("Jenkins", 4),
    ("Terraform", 6),
    ("Ansible", 6),
    ("Linux", 6),
    ("Shell Scripting", 4),
    // Tools and practices
    ("Git", 2),
    ("Testing", 4),
    ("Selenium", 5),
    ("REST API", 4),
    ("Microservices", 8),
    ("Agile", 2),
    ("Debugging", 3),
    // Design
    ("Figma", 3),
    ("Adobe XD", 3),
    ("UI Design", 6),
    ("UX Research", 6),
    ("Prototyping", 4),
    ("Wireframing", 3),
    // Mobile
    ("React Native", 8),
    ("Flutter", 8),
    ("Android Studio", 6),
    ("Xcode", 6),
    ("Mobile UI", 5),
    // Other
    ("Data Structures", 8),
    ("Algorithms", 10),
    ("Networking", 6),
    ("Security", 8),
    ("Excel", 3),
    ("Tableau", 4),
    ("Power BI", 4),
    ("UI/UX", 8),
    ("Responsive Design", 3),
    ("QA Process", 4),
    ("Bug Tracking", 2),
    ("Test Cases", 3),
    ("API Testing", 4),
    ("Monitoring", 4),
    ("Cloud Architecture", 10),
    ("Performance Testing", 5),
    ("Automation", 6),
    ("User Testing", 4),
    ("Design Systems", 6),
    ("Animation", 5),
    ("App Store", 2),
    ("Firebase", 4),
    ("Cost Optimization", 4),
    ("Accessibility", 4),
    ("Webpack", 4),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriorityTier {
    Critical,
    Important,
    #[serde(rename = "Nice-to-have")]
    NiceToHave,
}

/// One scheduled block of learning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillScheduleEntry {
    pub skill: String,
    pub weeks: u32,
    pub priority: PriorityTier,
    pub start_week: u32,
    pub end_week: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillRoadmap {
    pub short_term: Vec<SkillScheduleEntry>, // ends by week 12
    pub mid_term: Vec<SkillScheduleEntry>,   // ends by week 24
    pub long_term: Vec<SkillScheduleEntry>,  // ends after week 24
    pub total_weeks: u32,
    /// Every entry in schedule order.
    pub roadmap_phases: Vec<SkillScheduleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapSummary {
    pub short_term_count: usize,
    pub mid_term_count: usize,
    pub long_term_count: usize,
    pub total_skills: usize,
    pub estimated_months: u32,
}

/// Estimated weeks to learn `skill`. Case-insensitive exact lookup.
pub fn learning_weeks(skill: &str) -> u32 {
    SKILL_LEARNING_WEEKS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(skill))
        .map(|&(_, weeks)| weeks)
        .unwrap_or(DEFAULT_LEARNING_WEEKS)
}

/// Builds a cumulative sequential schedule from categorized gaps.
pub fn generate_roadmap(missing: &MissingSkills) -> SkillRoadmap {
    let mut roadmap = SkillRoadmap {
        roadmap_phases: Vec::with_capacity(missing.total()),
        ..SkillRoadmap::default()
    };

    let ordered = missing
        .critical
        .iter()
        .map(|s| (s, PriorityTier::Critical))
        .chain(missing.important.iter().map(|s| (s, PriorityTier::Important)))
        .chain(missing.nice_to_have.iter().map(|s| (s, PriorityTier::NiceToHave)));

    for (skill, priority) in ordered {
        let weeks = learning_weeks(skill);
        let start_week = roadmap.total_weeks;
        roadmap.total_weeks += weeks;

        let entry = SkillScheduleEntry {
            skill: skill.clone(),
            weeks,
            priority,
            start_week,
            end_week: roadmap.total_weeks,
        };

        let bucket = match entry.end_week {
            w if w <= SHORT_TERM_END_WEEK => &mut roadmap.short_term,
            w if w <= MID_TERM_END_WEEK => &mut roadmap.mid_term,
            _ => &mut roadmap.long_term,
        };
        bucket.push(entry.clone());
        roadmap.roadmap_phases.push(entry);
    }

    roadmap
}

pub fn roadmap_summary(roadmap: &SkillRoadmap) -> RoadmapSummary {
    RoadmapSummary {
        short_term_count: roadmap.short_term.len(),
        mid_term_count: roadmap.mid_term.len(),
        long_term_count: roadmap.long_term.len(),
        total_skills: roadmap.roadmap_phases.len(),
        estimated_months: roadmap.total_weeks / 4,
    }
}

/// The single next recommended learning target, if anything is missing.
pub fn next_skill(roadmap: &SkillRoadmap) -> Option<&SkillScheduleEntry> {
    roadmap.roadmap_phases.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(critical: &[&str], important: &[&str], nice: &[&str]) -> MissingSkills {
        let owned = |v: &[&str]| -> Vec<String> { v.iter().map(|s| s.to_string()).collect() };
        MissingSkills {
            critical: owned(critical),
            important: owned(important),
            nice_to_have: owned(nice),
        }
    }

    #[test]
    fn test_learning_weeks_lookup() {
        assert_eq!(learning_weeks("Python"), 8);
        assert_eq!(learning_weeks("kubernetes"), 8);
        assert_eq!(learning_weeks("POWER BI"), 4);
        assert_eq!(learning_weeks("Basket Weaving"), DEFAULT_LEARNING_WEEKS);
    }

    #[test]
    fn test_empty_roadmap() {
        let roadmap = generate_roadmap(&MissingSkills::default());
        let summary = roadmap_summary(&roadmap);
        assert_eq!(roadmap.total_weeks, 0);
        assert_eq!(summary.short_term_count, 0);
        assert_eq!(summary.mid_term_count, 0);
        assert_eq!(summary.long_term_count, 0);
        assert_eq!(summary.estimated_months, 0);
        assert!(next_skill(&roadmap).is_none());
    }

    #[test]
    fn test_sequential_schedule_and_buckets() {
        // Excel 3 → [0,3], Statistics 8 → [3,11], Data Visualization 4 → [11,15],
        // Pandas 4 → [15,19], Big Data 6 (unknown) → [19,25]
        let roadmap = generate_roadmap(&missing(
            &["Excel", "Statistics", "Data Visualization"],
            &["Pandas"],
            &["Big Data"],
        ));

        let ends: Vec<u32> = roadmap.roadmap_phases.iter().map(|e| e.end_week).collect();
        assert_eq!(ends, vec![3, 11, 15, 19, 25]);
        assert_eq!(roadmap.roadmap_phases[1].start_week, 3);
        assert_eq!(roadmap.total_weeks, 25);

        assert_eq!(roadmap.short_term.len(), 2);
        assert_eq!(roadmap.mid_term.len(), 2);
        assert_eq!(roadmap.long_term.len(), 1);
        assert_eq!(roadmap.long_term[0].priority, PriorityTier::NiceToHave);

        let summary = roadmap_summary(&roadmap);
        assert_eq!(summary.total_skills, 5);
        assert_eq!(
            summary.short_term_count + summary.mid_term_count + summary.long_term_count,
            summary.total_skills
        );
        assert_eq!(summary.estimated_months, 6);
    }

    #[test]
    fn test_week_12_is_short_term_boundary() {
        let roadmap = generate_roadmap(&missing(&["C++", "HTML"], &[], &[]));
        assert_eq!(roadmap.short_term.len(), 1);
        assert_eq!(roadmap.short_term[0].end_week, 12);
        assert_eq!(roadmap.mid_term[0].end_week, 14);
    }

    #[test]
    fn test_tiers_ordered_by_criticality_not_duration() {
        let roadmap = generate_roadmap(&missing(&["Deep Learning"], &["Git"], &[]));
        assert_eq!(roadmap.roadmap_phases[0].skill, "Deep Learning");
        assert_eq!(roadmap.roadmap_phases[1].priority, PriorityTier::Important);
        assert_eq!(next_skill(&roadmap).unwrap().skill, "Deep Learning");
    }

    #[test]
    fn test_next_skill_falls_through_to_important() {
        let roadmap = generate_roadmap(&missing(&[], &["Git", "SQL"], &["Agile"]));
        let next = next_skill(&roadmap).unwrap();
        assert_eq!(next.skill, "Git");
        assert_eq!(next.priority, PriorityTier::Important);
    }

    #[test]
    fn test_total_weeks_is_sum_of_durations() {
        let gaps = missing(&["Java", "Kotlin"], &["Xcode"], &["Flutter", "Mystery"]);
        let roadmap = generate_roadmap(&gaps);
        let expected: u32 = ["Java", "Kotlin", "Xcode", "Flutter", "Mystery"]
            .iter()
            .map(|s| learning_weeks(s))
            .sum();
        assert_eq!(roadmap.total_weeks, expected);
    }

    #[test]
    fn test_priority_serializes_display_label() {
        let json = serde_json::to_string(&PriorityTier::NiceToHave).unwrap();
        assert_eq!(json, "\"Nice-to-have\"");
    }
}
