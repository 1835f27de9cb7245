//! ATS (Applicant Tracking System) compatibility score.
//!
//! Fixed additive rubric, clamped to 100:
//!
//! | component            | points                               |
//! |----------------------|--------------------------------------|
//! | email address        | 10                                   |
//! | phone number         | 10                                   |
//! | section headers      | 5 each (experience, education, ...)  |
//! | keyword density      | 30 (≥10) / 20 (≥5) / 10              |
//! | action verbs         | 15 (≥5) / 10 (≥3) / 5                |
//! | quantified results   | 10 (≥3) / 5 (≥1) / 0                 |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::resume::keywords::KeywordMatches;

pub const MAX_SCORE: u32 = 100;

const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "projects"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{10}\b|\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").expect("valid phone regex")
});

/// `20%`, `10+`, `3x`
static QUANTIFIED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+%|\b\d+\+|\b\d+x\b").expect("valid quantifier regex"));

/// Per-component points, returned to clients next to the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub contact_email: u32,
    pub contact_phone: u32,
    pub sections: u32,
    pub keyword_density: u32,
    pub action_verbs: u32,
    pub quantified_achievements: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        (self.contact_email
            + self.contact_phone
            + self.sections
            + self.keyword_density
            + self.action_verbs
            + self.quantified_achievements)
            .min(MAX_SCORE)
    }
}

/// Computes every rubric component for `text` and its keyword matches.
pub fn breakdown(text: &str, matches: &KeywordMatches) -> ScoreBreakdown {
    let text_lower = text.to_lowercase();

    let contact_email = if EMAIL_RE.is_match(text) { 10 } else { 0 };
    let contact_phone = if PHONE_RE.is_match(text) { 10 } else { 0 };

    let sections = SECTION_HEADERS
        .iter()
        .filter(|section| text_lower.contains(*section))
        .count() as u32
        * 5;

    let keyword_density = match matches.total() {
        n if n >= 10 => 30,
        n if n >= 5 => 20,
        _ => 10,
    };

    let action_verbs = match matches.action_verbs.len() {
        n if n >= 5 => 15,
        n if n >= 3 => 10,
        _ => 5,
    };

    let quantified_achievements = match QUANTIFIED_RE.find_iter(text).count() {
        n if n >= 3 => 10,
        n if n >= 1 => 5,
        _ => 0,
    };

    ScoreBreakdown {
        contact_email,
        contact_phone,
        sections,
        keyword_density,
        action_verbs,
        quantified_achievements,
    }
}

/// Total ATS score in `[0, 100]`.
pub fn score(text: &str, matches: &KeywordMatches) -> u32 {
    breakdown(text, matches).total()
}
