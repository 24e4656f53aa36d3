//! Hierarchy parsing of row labels.
//!
//! A label such as `3.3 Front lights` carries its own hierarchical key (`3.3`). Rows
//! without a numeric prefix are placed under the most recent explicit key, using the
//! row's cleaned ID as an extra segment, so a batch of detail rows can hang off one
//! numbered heading.

use tracing::trace;

/// Where a row lands in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Dotted hierarchical key.
    pub key: String,
    /// Label text after the numeric prefix (trimmed), or the full label for
    /// continuation rows.
    pub name: String,
    /// Whether the key came from the label's own numeric prefix.
    pub explicit: bool,
}

impl Placement {
    /// Returns the display title of the node.
    ///
    /// Explicit placements show their number in front of the name (`3.3 Front`);
    /// continuation rows show the label unchanged.
    pub fn title(&self) -> String {
        if self.explicit {
            format!("{} {}", self.key, self.name).trim().to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Splits a label into its dotted numeric prefix and the trimmed remainder.
///
/// The prefix is the longest match of `digits ('.' digits)*` at the start of the
/// trimmed label. A trailing dot without digits is not part of the prefix.
pub fn split_number(label: &str) -> (Option<&str>, &str) {
    let label = label.trim();
    let bytes = label.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = digits_from(0);
    if end == 0 {
        return (None, label);
    }
    while end < bytes.len() && bytes[end] == b'.' {
        let run = digits_from(end + 1);
        if run == 0 {
            break;
        }
        end += 1 + run;
    }

    (Some(&label[..end]), label[end..].trim())
}

/// Cleans a raw row ID for use as a synthetic key segment.
///
/// A trailing `.0` (left behind by spreadsheet float formatting) is removed. Empty and
/// `nan` IDs cannot be placed and yield `None`.
pub fn clean_row_id(raw: &str) -> Option<&str> {
    let cleaned = raw.strip_suffix(".0").unwrap_or(raw);
    if cleaned.trim().is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(cleaned)
    }
}

/// Parser state threaded through the rows of one tree build.
///
/// Holds the most recent explicit key ("last number"); it is scoped to a single
/// build and never shared between models.
#[derive(Debug, Default, Clone)]
pub struct HierarchyParser {
    /// Most recent key taken from a label's numeric prefix.
    last_number: Option<String>,
}

impl HierarchyParser {
    /// Creates a parser with no cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current cursor, if an explicit key has been seen.
    pub fn cursor(&self) -> Option<&str> {
        self.last_number.as_deref()
    }

    /// Places a row, advancing the cursor on explicit keys.
    ///
    /// Returns `None` for rows that cannot be placed: continuation rows before any
    /// numbered label, and continuation rows whose ID is empty or `nan`.
    pub fn place(&mut self, row_id: &str, label: &str) -> Option<Placement> {
        if let (Some(number), name) = split_number(label) {
            self.last_number = Some(number.to_string());
            return Some(Placement {
                key: number.to_string(),
                name: name.to_string(),
                explicit: true,
            });
        }

        let Some(cursor) = self.last_number.as_deref() else {
            trace!(label, "skipping row before first numbered label");
            return None;
        };
        let Some(segment) = clean_row_id(row_id) else {
            trace!(label, row_id, "skipping continuation row without usable id");
            return None;
        };

        Some(Placement {
            key: format!("{cursor}.{segment}"),
            name: label.trim().to_string(),
            explicit: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_number() {
        assert_eq!(split_number("3.3.2 Left indicator"), (Some("3.3.2"), "Left indicator"));
        assert_eq!(split_number("  12 Brakes "), (Some("12"), "Brakes"));
        assert_eq!(split_number("4"), (Some("4"), ""));
        assert_eq!(split_number("1.2abc"), (Some("1.2"), "abc"));
        assert_eq!(split_number("1. Intro"), (Some("1"), ". Intro"));
        assert_eq!(split_number("Lights"), (None, "Lights"));
        assert_eq!(split_number(".5 half"), (None, ".5 half"));
    }

    #[test]
    fn test_clean_row_id() {
        assert_eq!(clean_row_id("7.0"), Some("7"));
        assert_eq!(clean_row_id("7.05"), Some("7.05"));
        assert_eq!(clean_row_id("a"), Some("a"));
        assert_eq!(clean_row_id("NaN"), None);
        assert_eq!(clean_row_id(""), None);
    }

    #[test]
    fn test_explicit_placement_updates_cursor() {
        let mut parser = HierarchyParser::new();
        let placed = parser.place("ignored", "3.3 Front").unwrap();
        assert_eq!(placed.key, "3.3");
        assert_eq!(placed.name, "Front");
        assert_eq!(placed.title(), "3.3 Front");
        assert_eq!(parser.cursor(), Some("3.3"));
    }

    #[test]
    fn test_continuation_rows_batch_under_cursor() {
        let mut parser = HierarchyParser::new();
        parser.place("3", "3 Lights");

        let a = parser.place("1.0", "Hella low beam").unwrap();
        let b = parser.place("2", "Hella high beam").unwrap();
        assert_eq!(a.key, "3.1");
        assert_eq!(a.title(), "Hella low beam");
        assert!(!a.explicit);
        assert_eq!(b.key, "3.2");
        // Continuation rows never move the cursor.
        assert_eq!(parser.cursor(), Some("3"));
    }

    #[test]
    fn test_rows_before_first_number_are_skipped() {
        let mut parser = HierarchyParser::new();
        assert!(parser.place("1", "Preamble").is_none());
        assert!(parser.cursor().is_none());
    }

    #[test]
    fn test_continuation_with_nan_id_is_skipped() {
        let mut parser = HierarchyParser::new();
        parser.place("1", "1 A");
        assert!(parser.place("nan", "detail").is_none());
    }

    #[test]
    fn test_number_only_title() {
        let mut parser = HierarchyParser::new();
        let placed = parser.place("", "5").unwrap();
        assert_eq!(placed.title(), "5");
    }
}
