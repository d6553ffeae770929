// Role-fit evaluation engine
// Implements: role catalog, fit scoring, gap categorization, roadmaps, role comparison,
// what-if simulation, confidence index, the general resume score and the
// section-wise resume breakdown.
// Everything here is a pure function of its inputs plus the static catalog; only
// `handlers` touches AppState.

pub mod breakdown;
pub mod catalog;
pub mod categorize;
pub mod comparator;
pub mod confidence;
pub mod fit_scoring;
pub mod handlers;
pub mod matching;
pub mod resume_score;
pub mod roadmap;
pub mod simulator;
