//! Missing-skill categorization: a priority-oriented view of a fit result's gaps.

use serde::{Deserialize, Serialize};

use crate::evaluation::fit_scoring::RoleFitResult;

/// Missing skills grouped by urgency. Each list keeps catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MissingSkills {
    pub critical: Vec<String>,
    pub important: Vec<String>,
    pub nice_to_have: Vec<String>,
}

impl MissingSkills {
    pub fn total(&self) -> usize {
        self.critical.len() + self.important.len() + self.nice_to_have.len()
    }
}

/// Core gaps are critical, secondary gaps important, bonus gaps nice-to-have.
pub fn categorize_missing_skills(result: &RoleFitResult) -> MissingSkills {
    MissingSkills {
        critical: result.missing_core.clone(),
        important: result.missing_secondary.clone(),
        nice_to_have: result.missing_bonus.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::fit_scoring::RoleFitScorer;
    use crate::models::profile::CandidateProfile;

    #[test]
    fn test_tiers_map_to_priorities() {
        let profile = CandidateProfile::new(&["Python", "SQL", "Tableau"], 7.0, 2);
        let result = RoleFitScorer::default()
            .score_role(&profile, "Data Analyst")
            .unwrap();
        let missing = categorize_missing_skills(&result);

        assert_eq!(missing.critical, vec!["Excel", "Statistics", "Data Visualization"]);
        assert_eq!(missing.important, vec!["Power BI", "Pandas", "NumPy"]);
        assert_eq!(missing.nice_to_have, vec!["R", "Machine Learning", "Big Data"]);
        assert_eq!(missing.total(), result.missing_count());
    }
}
