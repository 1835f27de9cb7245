/// Punctuation kept by [`normalize`] alongside letters, digits and whitespace.
const ALLOWED_PUNCTUATION: &[char] = &['.', ',', ';', ':', '(', ')', '-', '@', '+', '#'];

/// Cleans extracted resume text into the canonical form used for analysis.
///
/// Drops every character that is not alphanumeric, whitespace or allowed
/// punctuation, then collapses whitespace runs to a single space and trims.
/// Filtering before collapsing keeps the function idempotent.
pub fn normalize(text: &str) -> String {
    let filtered: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(c))
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  Jane\t\tDoe\n\nEngineer  "), "Jane Doe Engineer");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        let input = "jane@mail.com, C++; C# (senior) - Rust: 10+";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(normalize("Improved *latency* by 20% • fast!"), "Improved latency by 20 fast");
    }

    #[test]
    fn test_removed_symbol_between_spaces_does_not_leave_double_space() {
        assert_eq!(normalize("a ! b"), "a b");
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        assert_eq!(normalize("José Müller"), "José Müller");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "a ! b",
            "  Email: jane@example.com\n\nPhone: 555-123-4567  ",
            "★ Led 5 engineers ★ | shipped 3x faster | 99.9% uptime",
            "tabs\tand\r\nnewlines\u{00a0}nbsp",
            "__init__ & <html> {json}",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
