//! Text normalization for path matching.
//!
//! The pipeline is:
//! 1. NFKD decomposition, dropping combining marks (accent stripping)
//! 2. Lowercasing
//! 3. Replacing the separators `>`, `/`, `|`, `-`, `_` with spaces
//! 4. Collapsing whitespace runs to one space and trimming

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Characters treated as word separators.
const SEPARATORS: &[char] = &['>', '/', '|', '-', '_'];

/// Normalizes text for matching.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a query into normalized, non-empty tokens.
pub fn to_words(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize("Bremsleuchte Größe Élan"), "bremsleuchte große elan");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(normalize("Light, front/left|rear_brake -> x"), "light, front left rear brake x");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  3.3   Front\t\nlights "), "3.3 front lights");
    }

    #[test]
    fn test_value_marker_vanishes() {
        assert_eq!(normalize("- 5"), "5");
    }

    #[test]
    fn test_to_words() {
        assert_eq!(to_words("Brake  light-FRONT"), vec!["brake", "light", "front"]);
        assert!(to_words(" -- / ").is_empty());
    }
}
