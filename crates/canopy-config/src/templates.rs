//! Configuration templates for `canopy init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out example
//! configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Comment lines and empty lines are kept; every other line gets a `# ` prefix.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn local_template_parses_as_valid_toml() {
        let config = parse_config(LOCAL_TEMPLATE).unwrap();
        assert_eq!(config.root, Some(true));
        assert!(config.dataset.unwrap().contains_key("main"));
    }

    #[test]
    fn global_template_parses_as_valid_toml() {
        let config = parse_config(GLOBAL_TEMPLATE).unwrap();
        assert_eq!(config.search.unwrap().limit, Some(50));
    }

    #[test]
    fn rendered_templates_are_inert() {
        for rendered in [local_template(), global_template()] {
            let config = parse_config(&rendered).unwrap();
            assert!(config.root.is_none());
            assert!(config.dataset.is_none());
        }
    }

    #[test]
    fn comment_template_prefixes_only_content() {
        let input = "# comment\n[section]\n\nkey = \"value\"\n";
        assert_eq!(
            comment_template(input),
            "# comment\n# [section]\n\n# key = \"value\"\n"
        );
    }
}
