//! Skill matching — the single seam deciding whether a candidate skill satisfies
//! a catalog skill. The scorer's weighting never looks at strings directly.

/// Decides whether one normalized candidate skill covers one catalog skill.
///
/// `candidate` is already trimmed and lowercased (see [`normalize_skills`]);
/// `required` is the catalog spelling.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, candidate: &str, required: &str) -> bool;
}

/// Default matcher: case-insensitive substring containment in either direction.
///
/// Intentionally permissive: "react" covers "ReactJS" and "React Native", and
/// "reactjs" covers "React".
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SkillMatcher for SubstringMatcher {
    fn matches(&self, candidate: &str, required: &str) -> bool {
        let required = required.to_lowercase();
        required.contains(candidate) || candidate.contains(required.as_str())
    }
}

/// Lowercases and trims candidate skills, dropping blanks.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_both_directions() {
        let m = SubstringMatcher;
        assert!(m.matches("react", "React Native"));
        assert!(m.matches("reactjs", "React"));
        assert!(m.matches("sql", "PostgreSQL"));
        assert!(!m.matches("java", "Kotlin"));
    }

    #[test]
    fn test_matching_is_case_insensitive_on_catalog_side() {
        assert!(SubstringMatcher.matches("node.js", "Node.js"));
    }

    #[test]
    fn test_normalize_drops_blanks() {
        let skills = vec!["  Python ".to_string(), "   ".to_string(), "SQL".to_string()];
        assert_eq!(normalize_skills(&skills), vec!["python", "sql"]);
    }
}
