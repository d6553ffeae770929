//! Role Fit Scoring — measures a candidate profile against one catalog role.
//!
//! Pure and deterministic: the same profile and role always yield the same
//! `RoleFitResult`. String comparison is delegated to a `SkillMatcher`, so a
//! stricter matcher can be swapped in without touching the weighting below.
//!
//! `AppState` holds an `Arc<RoleFitScorer>`; the comparator and simulator reuse it.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::evaluation::catalog::{RoleCatalog, RoleDefinition};
use crate::evaluation::matching::{normalize_skills, SkillMatcher, SubstringMatcher};
use crate::models::profile::CandidateProfile;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

pub const CORE_WEIGHT: u64 = 50;
pub const SECONDARY_WEIGHT: u64 = 30;
pub const BONUS_WEIGHT: u64 = 10;
pub const CGPA_POINTS: u32 = 5;
pub const PROJECTS_POINTS: u32 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-factor contribution to `role_fit_score`. The five fields always sum to it.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub core_score: u32,      // ≤ 50
    pub secondary_score: u32, // ≤ 30
    pub bonus_score: u32,     // ≤ 10
    pub cgpa_score: u32,      // 0 or 5
    pub projects_score: u32,  // 0 or 5
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.core_score + self.secondary_score + self.bonus_score + self.cgpa_score + self.projects_score
    }
}

/// Fit of one candidate against one role.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoleFitResult {
    pub role_name: String,
    pub role_fit_score: u32, // 0 – 100
    pub core_match: usize,
    pub secondary_match: usize,
    pub bonus_match: usize,
    /// Missing lists keep catalog declaration order.
    pub missing_core: Vec<String>,
    pub missing_secondary: Vec<String>,
    pub missing_bonus: Vec<String>,
    pub cgpa_met: bool,
    pub projects_met: bool,
    pub breakdown: ScoreBreakdown,
}

impl RoleFitResult {
    /// Missing core, then secondary, then bonus skills.
    pub fn all_missing_skills(&self) -> Vec<String> {
        self.missing_core
            .iter()
            .chain(&self.missing_secondary)
            .chain(&self.missing_bonus)
            .cloned()
            .collect()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_core.len() + self.missing_secondary.len() + self.missing_bonus.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

/// Weighted rule-based scorer over a role catalog.
///
/// Algorithm:
/// 1. Normalize candidate skills (trim, lowercase, drop blanks)
/// 2. Per tier, a catalog skill is matched if any candidate skill matches it;
///    each catalog skill counts at most once
/// 3. Tier score = matched / tier size × weight (50 / 30 / 10); empty tiers give 0
/// 4. CGPA and project minimums add 5 points each when met
/// 5. Skill tiers are summed exactly and floored once, then the 10 eligibility
///    points are added
#[derive(Clone)]
pub struct RoleFitScorer {
    catalog: RoleCatalog,
    matcher: Arc<dyn SkillMatcher>,
}

impl RoleFitScorer {
    pub fn new(catalog: RoleCatalog, matcher: Arc<dyn SkillMatcher>) -> Self {
        Self { catalog, matcher }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Scores `profile` against the named role. `None` when the role is unknown.
    pub fn score_role(&self, profile: &CandidateProfile, role_name: &str) -> Option<RoleFitResult> {
        let role = self.catalog.get(role_name)?;
        Some(self.score_definition(profile, role))
    }

    /// Scores `profile` against an already-resolved role definition.
    pub fn score_definition(&self, profile: &CandidateProfile, role: &RoleDefinition) -> RoleFitResult {
        let skills = normalize_skills(&profile.skills);

        let core = self.match_tier(&skills, role.core_skills);
        let secondary = self.match_tier(&skills, role.secondary_skills);
        let bonus = self.match_tier(&skills, role.bonus_skills);

        let [core_score, secondary_score, bonus_score] = floored_tier_scores([
            (core.matched, role.core_skills.len(), CORE_WEIGHT),
            (secondary.matched, role.secondary_skills.len(), SECONDARY_WEIGHT),
            (bonus.matched, role.bonus_skills.len(), BONUS_WEIGHT),
        ]);

        // NaN or out-of-range CGPA simply fails the comparison.
        let cgpa_met = profile.cgpa >= role.min_cgpa;
        let projects_met = profile.project_count >= role.min_projects;

        let breakdown = ScoreBreakdown {
            core_score,
            secondary_score,
            bonus_score,
            cgpa_score: if cgpa_met { CGPA_POINTS } else { 0 },
            projects_score: if projects_met { PROJECTS_POINTS } else { 0 },
        };
        let role_fit_score = breakdown.total();

        debug!(
            role = role.name,
            score = role_fit_score,
            core = core.matched,
            secondary = secondary.matched,
            bonus = bonus.matched,
            "scored role fit"
        );

        RoleFitResult {
            role_name: role.name.to_string(),
            role_fit_score,
            core_match: core.matched,
            secondary_match: secondary.matched,
            bonus_match: bonus.matched,
            missing_core: core.missing,
            missing_secondary: secondary.missing,
            missing_bonus: bonus.missing,
            cgpa_met,
            projects_met,
            breakdown,
        }
    }

    fn match_tier(&self, candidate_skills: &[String], tier: &[&str]) -> TierMatch {
        let mut matched = 0;
        let mut missing = Vec::new();
        for required in tier {
            if candidate_skills
                .iter()
                .any(|c| self.matcher.matches(c, required))
            {
                matched += 1;
            } else {
                missing.push(required.to_string());
            }
        }
        TierMatch { matched, missing }
    }
}

impl Default for RoleFitScorer {
    fn default() -> Self {
        Self::new(RoleCatalog::builtin(), Arc::new(SubstringMatcher))
    }
}

struct TierMatch {
    matched: usize,
    missing: Vec<String>,
}

/// Splits `⌊Σ matched/size × weight⌋` across tiers by cumulative flooring.
///
/// Fractions are summed over a common denominator so the floor is exact. Each
/// tier receives `⌊prefix sum⌋ − ⌊previous prefix sum⌋`, which keeps every share
/// within its weight and makes the shares add up to the floored total.
fn floored_tier_scores(tiers: [(usize, usize, u64); 3]) -> [u32; 3] {
    let denominator: u64 = tiers.iter().map(|&(_, size, _)| size.max(1) as u64).product();

    let mut numerator = 0u64;
    let mut floored_so_far = 0u64;
    let mut shares = [0u32; 3];
    for (share, &(matched, size, weight)) in shares.iter_mut().zip(tiers.iter()) {
        if size > 0 {
            numerator += matched as u64 * weight * (denominator / size as u64);
        }
        let floored = numerator / denominator;
        *share = (floored - floored_so_far) as u32;
        floored_so_far = floored;
    }
    shares
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
