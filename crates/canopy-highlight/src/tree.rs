//! Layout helpers for indented and tree-shaped output.

/// Connector for a child that has later siblings.
const BRANCH: &str = "├── ";
/// Connector for the last child of a node.
const LAST_BRANCH: &str = "└── ";
/// Continuation under an ancestor that has later siblings.
const PIPE: &str = "│   ";
/// Continuation under an ancestor that was the last child.
const GAP: &str = "    ";

/// Builds the box-drawing prefix for a tree line.
///
/// `ancestors_last` holds, for each ancestor below the printed root, whether that
/// ancestor was the last of its siblings. `is_last` is the same flag for the node itself.
pub fn tree_prefix(ancestors_last: &[bool], is_last: bool) -> String {
    let mut prefix = String::with_capacity((ancestors_last.len() + 1) * PIPE.len());
    for &last in ancestors_last {
        prefix.push_str(if last { GAP } else { PIPE });
    }
    prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    prefix
}

/// Indents every line of `content` by three spaces.
///
/// A trailing newline is dropped so the result can be passed to `println!`.
pub fn indent_content(content: &str) -> String {
    content
        .trim_end_matches('\n')
        .lines()
        .map(|line| format!("   {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_prefix() {
        assert_eq!(tree_prefix(&[], false), "├── ");
        assert_eq!(tree_prefix(&[], true), "└── ");
        assert_eq!(tree_prefix(&[false, true], true), "│       └── ");
    }

    #[test]
    fn test_indent_content() {
        assert_eq!(indent_content("a\nb\n"), "   a\n   b");
        assert_eq!(indent_content(""), "");
    }
}
