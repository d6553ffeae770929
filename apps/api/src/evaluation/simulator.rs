//! What-if Skill Simulator — re-scores a role under a hypothetical skill set.
//!
//! Scoring is monotonic in skills, so a simulation never reports a negative
//! score improvement.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::evaluation::comparator::{eligibility_label, Eligibility};
use crate::evaluation::fit_scoring::{RoleFitResult, RoleFitScorer};
use crate::models::profile::CandidateProfile;

/// Reduced fit view carried on both sides of a simulation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimulatedState {
    pub role_fit_score: u32,
    pub eligibility: Eligibility,
    pub core_match: usize,
    pub secondary_match: usize,
    pub bonus_match: usize,
}

impl From<&RoleFitResult> for SimulatedState {
    fn from(result: &RoleFitResult) -> Self {
        Self {
            role_fit_score: result.role_fit_score,
            eligibility: eligibility_label(result.role_fit_score),
            core_match: result.core_match,
            secondary_match: result.secondary_match,
            bonus_match: result.bonus_match,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Improvements {
    pub score_improvement: i64,
    pub core_improvement: i64,
    pub secondary_improvement: i64,
    pub bonus_improvement: i64,
    pub eligibility_changed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimulationResult {
    pub current_state: SimulatedState,
    pub simulated_state: SimulatedState,
    pub improvements: Improvements,
    /// Everything still missing after the simulated skills are acquired.
    pub new_missing_skills: Vec<String>,
    pub skills_acquired: Vec<String>,
}

/// One skill's isolated effect on the fit score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillImpact {
    pub skill: String,
    pub impact: i64,
}

/// Scores `profile` as-is and again with `proposed_skills` added.
/// `None` when the role is unknown.
pub fn simulate(
    scorer: &RoleFitScorer,
    profile: &CandidateProfile,
    proposed_skills: &[String],
    role_name: &str,
) -> Option<SimulationResult> {
    let role = scorer.catalog().get(role_name)?;

    let current = scorer.score_definition(profile, role);
    let combined = profile.with_skills(union_skills(&profile.skills, proposed_skills));
    let simulated = scorer.score_definition(&combined, role);

    let current_state = SimulatedState::from(&current);
    let simulated_state = SimulatedState::from(&simulated);
    let improvements = Improvements {
        score_improvement: delta(simulated.role_fit_score as usize, current.role_fit_score as usize),
        core_improvement: delta(simulated.core_match, current.core_match),
        secondary_improvement: delta(simulated.secondary_match, current.secondary_match),
        bonus_improvement: delta(simulated.bonus_match, current.bonus_match),
        eligibility_changed: current_state.eligibility != simulated_state.eligibility,
    };

    debug!(
        role = role_name,
        proposed = proposed_skills.len(),
        improvement = improvements.score_improvement,
        "simulated skill acquisition"
    );

    Some(SimulationResult {
        current_state,
        simulated_state,
        improvements,
        new_missing_skills: simulated.all_missing_skills(),
        skills_acquired: proposed_skills.to_vec(),
    })
}

/// Canned advice keyed on the simulated score improvement.
pub fn simulation_recommendation(result: &SimulationResult) -> &'static str {
    match result.improvements.score_improvement {
        i if i >= 30 => "Excellent! These skills would significantly boost your profile.",
        i if i >= 15 => "Good choice! These skills would notably improve your fit.",
        i if i >= 5 => "These skills would provide a modest improvement.",
        _ => "These skills have minimal impact. Consider focusing on core skills.",
    }
}

/// Ranks each skill in `skill_pool` by the score it adds on its own.
///
/// One simulation per skill; equal impacts keep pool order. `None` when the role
/// is unknown.
pub fn rank_skills_by_impact(
    scorer: &RoleFitScorer,
    profile: &CandidateProfile,
    skill_pool: &[String],
    role_name: &str,
) -> Option<Vec<SkillImpact>> {
    scorer.catalog().get(role_name)?;

    let mut impacts: Vec<SkillImpact> = skill_pool
        .iter()
        .filter_map(|skill| {
            let simulation = simulate(scorer, profile, std::slice::from_ref(skill), role_name)?;
            Some(SkillImpact {
                skill: skill.clone(),
                impact: simulation.improvements.score_improvement,
            })
        })
        .collect();

    impacts.sort_by(|a, b| b.impact.cmp(&a.impact));
    Some(impacts)
}

/// `current ∪ proposed`, collapsing exact duplicates and keeping first occurrence.
fn union_skills(current: &[String], proposed: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    current
        .iter()
        .chain(proposed)
        .filter(|s| seen.insert(s.as_str()))
        .cloned()
        .collect()
}

fn delta(after: usize, before: usize) -> i64 {
    after as i64 - before as i64
}
