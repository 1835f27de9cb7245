use serde::{Deserialize, Serialize};

pub const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "ai",
    "data science",
    "tensorflow",
    "pytorch",
    "html",
    "css",
    "angular",
    "vue",
    "mongodb",
    "postgresql",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "analytical",
    "creative",
    "adaptable",
    "organized",
    "detail-oriented",
    "collaborative",
];

pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "created",
    "designed",
    "implemented",
    "managed",
    "led",
    "improved",
    "optimized",
    "achieved",
    "delivered",
    "built",
    "launched",
];

/// Vocabulary terms found in a resume, each list in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
}

impl KeywordMatches {
    pub fn total(&self) -> usize {
        self.technical_skills.len() + self.soft_skills.len() + self.action_verbs.len()
    }
}

/// Scans text for the fixed vocabularies.
///
/// Plain substring containment on the lower-cased text: "ai" matches inside
/// "detail" and "led" inside "cancelled". Callers rely on this exact behaviour.
pub fn analyze(text: &str) -> KeywordMatches {
    let text_lower = text.to_lowercase();
    KeywordMatches {
        technical_skills: matching(TECHNICAL_SKILLS, &text_lower),
        soft_skills: matching(SOFT_SKILLS, &text_lower),
        action_verbs: matching(ACTION_VERBS, &text_lower),
    }
}

fn matching(vocabulary: &[&str], text_lower: &str) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| text_lower.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_matches_nothing() {
        let m = analyze("");
        assert!(m.technical_skills.is_empty());
        assert!(m.soft_skills.is_empty());
        assert!(m.action_verbs.is_empty());
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn test_case_insensitive_and_vocabulary_order() {
        let m = analyze("Skills: SQL, Python, Docker. Strong Leadership.");
        assert_eq!(m.technical_skills, vec!["python", "sql", "docker"]);
        assert_eq!(m.soft_skills, vec!["leadership"]);
    }

    #[test]
    fn test_substring_semantics_match_inside_words() {
        // "javascript" also contains "java"; "detail" contains "ai"
        let m = analyze("JavaScript, detail-oriented");
        assert_eq!(m.technical_skills, vec!["java", "javascript", "ai"]);
        assert_eq!(m.soft_skills, vec!["detail-oriented"]);
    }

    #[test]
    fn test_multi_word_terms() {
        let m = analyze("Machine Learning and data science; problem solving");
        assert!(m.technical_skills.contains(&"machine learning".to_string()));
        assert!(m.technical_skills.contains(&"data science".to_string()));
        assert_eq!(m.soft_skills, vec!["problem solving"]);
    }

    #[test]
    fn test_action_verbs() {
        let m = analyze("Designed and built services; led a team; launched v2");
        assert_eq!(m.action_verbs, vec!["designed", "led", "built", "launched"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "Developed React apps with Node and MongoDB";
        assert_eq!(analyze(text), analyze(text));
    }
}
