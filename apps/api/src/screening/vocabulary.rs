//! Static keyword tables shared by extraction and scoring.

/// Technology terms scanned for literally (case-insensitive substring) in resume text.
/// Order is significant: matches are reported in this order.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Scala",
    "R",
    "MATLAB",
    "SQL",
    "HTML",
    "CSS",
    // Frameworks and libraries
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "jQuery",
    "Bootstrap",
    "Tailwind",
    "Next.js",
    "Nuxt.js",
    "Svelte",
    // Databases
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "SQLite",
    "Oracle",
    // Cloud and DevOps
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "CI/CD",
    "Git",
    "GitHub",
    "GitLab",
    "Terraform",
    "Ansible",
    // Practices and domains
    "REST",
    "GraphQL",
    "API",
    "Microservices",
    "Agile",
    "Scrum",
    "Machine Learning",
    "AI",
    "Data Science",
    "Analytics",
    "Testing",
    "Unit Testing",
    "Integration Testing",
];

/// Function words ignored when extracting experience keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "as",
    "is", "was", "are", "were", "be", "been", "have", "has", "had", "will", "would", "could",
    "should", "may", "might", "can", "must", "shall", "this", "that", "these", "those", "i",
    "you", "he", "she", "it", "we", "they",
];

/// Headings that terminate any section.
pub const MAJOR_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "awards",
    "certifications",
];

pub const EXPERIENCE_HEADINGS: &[&str] = &["experience", "work", "employment", "career"];
pub const EDUCATION_HEADINGS: &[&str] = &["education", "qualification", "degree", "academic"];
pub const SKILLS_HEADINGS: &[&str] = &["skills", "technologies", "competencies"];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
