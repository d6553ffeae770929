//! Role Catalog — the static table of job roles every evaluator scores against.
//!
//! Loaded once at process start and never mutated. Lookups are case-sensitive
//! exact matches on the role name; an unknown name is `None`, never an error.

use serde::Serialize;

/// An immutable catalog entry. Skill order within each tier is display order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoleDefinition {
    pub name: &'static str,
    pub core_skills: &'static [&'static str],
    pub secondary_skills: &'static [&'static str],
    pub bonus_skills: &'static [&'static str],
    pub min_cgpa: f64,
    pub min_projects: u32,
    pub description: &'static str,
}

impl RoleDefinition {
    /// Core plus secondary skill count; the denominator for missing-skill density.
    pub fn required_skill_count(&self) -> usize {
        self.core_skills.len() + self.secondary_skills.len()
    }
}

/// Read-only view over a set of role definitions, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct RoleCatalog {
    roles: &'static [RoleDefinition],
}

impl RoleCatalog {
    pub const fn new(roles: &'static [RoleDefinition]) -> Self {
        Self { roles }
    }

    pub const fn builtin() -> Self {
        Self::new(BUILTIN_ROLES)
    }

    pub fn get(&self, name: &str) -> Option<&'static RoleDefinition> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn list_roles(&self) -> Vec<&'static str> {
        self.roles.iter().map(|r| r.name).collect()
    }

    pub fn roles(&self) -> &'static [RoleDefinition] {
        self.roles
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_ROLES: &[RoleDefinition] = &[
    RoleDefinition {
        name: "Software Developer",
        core_skills: &["Python", "Java", "C++", "Data Structures", "Algorithms"],
        secondary_skills: &["Git", "SQL", "Testing", "Debugging"],
        bonus_skills: &["Docker", "CI/CD", "Agile"],
        min_cgpa: 6.5,
        min_projects: 3,
        description: "Develops software applications using programming languages",
    },
    RoleDefinition {
        name: "Web Developer",
        core_skills: &["HTML", "CSS", "JavaScript", "React", "Node.js"],
        secondary_skills: &["Git", "REST API", "Database", "Responsive Design"],
        bonus_skills: &["TypeScript", "MongoDB", "AWS"],
        min_cgpa: 6.0,
        min_projects: 3,
        description: "Creates and maintains websites and web applications",
    },
    RoleDefinition {
        name: "Data Analyst",
        core_skills: &["Python", "SQL", "Excel", "Statistics", "Data Visualization"],
        secondary_skills: &["Tableau", "Power BI", "Pandas", "NumPy"],
        bonus_skills: &["R", "Machine Learning", "Big Data"],
        min_cgpa: 7.0,
        min_projects: 2,
        description: "Analyzes data to provide business insights",
    },
    RoleDefinition {
        name: "Data Scientist",
        core_skills: &["Python", "Machine Learning", "Statistics", "SQL", "Data Analysis"],
        secondary_skills: &["TensorFlow", "PyTorch", "Pandas", "NumPy"],
        bonus_skills: &["Deep Learning", "NLP", "Big Data", "Cloud"],
        min_cgpa: 7.5,
        min_projects: 3,
        description: "Builds predictive models and analyzes complex data",
    },
    RoleDefinition {
        name: "Frontend Developer",
        core_skills: &["HTML", "CSS", "JavaScript", "React", "UI/UX"],
        secondary_skills: &["TypeScript", "Redux", "Webpack", "Git"],
        bonus_skills: &["Vue.js", "Angular", "Testing", "Accessibility"],
        min_cgpa: 6.0,
        min_projects: 3,
        description: "Develops user-facing features of web applications",
    },
    RoleDefinition {
        name: "Backend Developer",
        core_skills: &["Python", "Java", "Node.js", "SQL", "REST API"],
        secondary_skills: &["MongoDB", "PostgreSQL", "Redis", "Git"],
        bonus_skills: &["Microservices", "Docker", "Kubernetes", "AWS"],
        min_cgpa: 6.5,
        min_projects: 3,
        description: "Develops server-side logic and database management",
    },
    RoleDefinition {
        name: "Full Stack Developer",
        core_skills: &["HTML", "CSS", "JavaScript", "Python", "SQL", "React"],
        secondary_skills: &["Node.js", "Git", "REST API", "Database Design"],
        bonus_skills: &["Docker", "AWS", "MongoDB", "TypeScript"],
        min_cgpa: 7.0,
        min_projects: 4,
        description: "Develops both frontend and backend of applications",
    },
    RoleDefinition {
        name: "Mobile App Developer",
        core_skills: &["Java", "Kotlin", "Swift", "React Native", "Mobile UI"],
        secondary_skills: &["Android Studio", "Xcode", "Git", "REST API"],
        bonus_skills: &["Flutter", "Firebase", "App Store", "Testing"],
        min_cgpa: 6.5,
        min_projects: 3,
        description: "Develops mobile applications for iOS and Android",
    },
    RoleDefinition {
        name: "DevOps Engineer",
        core_skills: &["Linux", "Docker", "Kubernetes", "CI/CD", "Git"],
        secondary_skills: &["Jenkins", "Ansible", "Terraform", "Monitoring"],
        bonus_skills: &["AWS", "Azure", "Python", "Shell Scripting"],
        min_cgpa: 6.5,
        min_projects: 2,
        description: "Manages deployment and infrastructure automation",
    },
    RoleDefinition {
        name: "Cloud Engineer",
        core_skills: &["AWS", "Azure", "Cloud Architecture", "Networking", "Security"],
        secondary_skills: &["Docker", "Kubernetes", "Terraform", "Linux"],
        bonus_skills: &["Python", "Monitoring", "Cost Optimization"],
        min_cgpa: 7.0,
        min_projects: 2,
        description: "Designs and manages cloud infrastructure",
    },
    RoleDefinition {
        name: "QA Engineer",
        core_skills: &["Testing", "Selenium", "Test Cases", "Bug Tracking", "QA Process"],
        secondary_skills: &["Java", "Python", "SQL", "API Testing"],
        bonus_skills: &["Automation", "Performance Testing", "CI/CD"],
        min_cgpa: 6.0,
        min_projects: 2,
        description: "Ensures software quality through testing",
    },
    RoleDefinition {
        name: "UI/UX Designer",
        core_skills: &["Figma", "Adobe XD", "UI Design", "UX Research", "Prototyping"],
        secondary_skills: &["HTML", "CSS", "User Testing", "Wireframing"],
        bonus_skills: &["JavaScript", "Animation", "Design Systems"],
        min_cgpa: 6.0,
        min_projects: 3,
        description: "Designs user interfaces and experiences",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_roles_declaration_order() {
        let roles = RoleCatalog::builtin().list_roles();
        assert_eq!(roles.len(), 12);
        assert_eq!(roles[0], "Software Developer");
        assert_eq!(roles[2], "Data Analyst");
        assert_eq!(roles[11], "UI/UX Designer");
    }

    #[test]
    fn test_get_known_role() {
        let role = RoleCatalog::builtin().get("Data Analyst").unwrap();
        assert_eq!(role.core_skills.len(), 5);
        assert_eq!(role.secondary_skills.len(), 4);
        assert_eq!(role.min_cgpa, 7.0);
        assert_eq!(role.min_projects, 2);
        assert_eq!(role.required_skill_count(), 9);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = RoleCatalog::builtin();
        assert!(catalog.get("data analyst").is_none());
        assert!(catalog.get("Astronaut").is_none());
    }

    #[test]
    fn test_role_names_unique() {
        let roles = RoleCatalog::builtin().list_roles();
        for (i, name) in roles.iter().enumerate() {
            assert!(!roles[i + 1..].contains(name), "duplicate role {name}");
        }
    }
}
