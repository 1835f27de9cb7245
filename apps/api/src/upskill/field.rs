use serde::{Deserialize, Serialize};

/// Career field used to pick an upskill bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AiMl,
    Technology,
    Cyber,
    Medical,
    Politics,
    Business,
    Agriculture,
    Generic,
}

/// Detection order. The first field with any keyword in the text wins, so
/// `ai_ml` takes "data science and AI" even though "data science" is a
/// technology keyword.
const FIELD_KEYWORDS: &[(Field, &[&str])] = &[
    (
        Field::AiMl,
        &[
            "artificial intelligence",
            "ai",
            "machine learning",
            "ml",
            "deep learning",
            "neural network",
        ],
    ),
    (
        Field::Technology,
        &[
            "information technology",
            "computer science",
            "software",
            "programming",
            "developer",
            "coding",
            "data science",
        ],
    ),
    (
        Field::Cyber,
        &["cyber security", "network security", "hacking"],
    ),
    (
        Field::Medical,
        &[
            "medical",
            "medicine",
            "healthcare",
            "doctor",
            "nurse",
            "mbbs",
            "pharmacy",
            "hospital",
        ],
    ),
    (
        Field::Politics,
        &[
            "politics",
            "political science",
            "public policy",
            "governance",
            "civil services",
            "upsc",
            "law",
        ],
    ),
    (
        Field::Business,
        &["business", "management", "commerce", "mba", "entrepreneur"],
    ),
    (
        Field::Agriculture,
        &["agriculture", "farming", "crop", "soil", "agribusiness"],
    ),
];

impl Field {
    /// Key used in the upskill table.
    pub fn key(self) -> &'static str {
        match self {
            Field::AiMl => "ai_ml",
            Field::Technology => "technology",
            Field::Cyber => "cyber",
            Field::Medical => "medical",
            Field::Politics => "politics",
            Field::Business => "business",
            Field::Agriculture => "agriculture",
            Field::Generic => "generic",
        }
    }

    /// Query sent to the video search service for this field.
    pub fn video_query(self) -> &'static str {
        match self {
            Field::AiMl => "artificial intelligence machine learning career roadmap beginner",
            Field::Technology => "information technology career roadmap beginner",
            Field::Cyber => "cyber security career roadmap beginner",
            Field::Medical => "medical healthcare careers for students",
            Field::Politics => "political science public policy careers",
            Field::Business => "business management career guide",
            Field::Agriculture => "agriculture technology careers beginner",
            Field::Generic => "career skills for students",
        }
    }
}

/// Substring match on the lower-cased text, same permissive semantics as the
/// resume keyword scan ("ai" matches inside "email").
pub fn detect_field(text: &str) -> Field {
    let text_lower = text.to_lowercase();
    FIELD_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text_lower.contains(k)))
        .map(|(field, _)| *field)
        .unwrap_or(Field::Generic)
}
