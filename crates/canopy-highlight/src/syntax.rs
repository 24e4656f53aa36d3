//! Syntax highlighting for configuration output.

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

use crate::style::colors;

/// Highlights source text for 24-bit color terminals.
pub struct Highlighter {
    /// Language definitions, including the TOML grammar from two-face.
    syntax_set: SyntaxSet,
    /// Lazily loaded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Theme used for all output.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content in the named syntax (extension or language name).
    ///
    /// Unknown syntaxes are rendered as plain text. Lines that fail to highlight are
    /// passed through unstyled.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self.syntax(syntax_name);
        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }

    /// Looks up a syntax by extension, then by name, falling back to plain text.
    fn syntax(&self, name: &str) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(name)
            .or_else(|| self.syntax_set.find_syntax_by_name(name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}
