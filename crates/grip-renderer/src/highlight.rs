//! Syntax highlighting for fenced code blocks.
//!
//! Code is emitted with CSS classes rather than inline colors; the matching
//! stylesheet comes from [`stylesheet`].

use std::io::Write;
use std::sync::LazyLock;

use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::error::{HandlerError, HighlightError};
use crate::html::escape_html;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Color scheme of the generated stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightStyle {
    Light,
    Dark,
}

impl HighlightStyle {
    /// Bundled syntect theme backing this style.
    #[must_use]
    pub fn theme_name(self) -> &'static str {
        match self {
            Self::Light => "InspiredGitHub",
            Self::Dark => "base16-ocean.dark",
        }
    }
}

/// Highlighter for a language name, alias or file extension.
#[must_use]
pub fn get(language: &str) -> Option<&'static SyntaxReference> {
    SYNTAXES
        .find_syntax_by_token(language)
        .or_else(|| SYNTAXES.find_syntax_by_name(language))
}

/// Guess a highlighter from the code itself (shebangs, modelines, XML
/// prologs).
#[must_use]
pub fn analyse(content: &str) -> Option<&'static SyntaxReference> {
    let first_line = content.lines().next()?;
    SYNTAXES.find_syntax_by_first_line(first_line)
}

/// Highlighter used when nothing else matches.
#[must_use]
pub fn fallback() -> &'static SyntaxReference {
    SYNTAXES.find_syntax_plain_text()
}

/// Pick the highlighter for a code block.
///
/// A declared language is looked up by name; without one, the content is
/// analysed. Either way, plain text is the fallback.
#[must_use]
pub fn resolve(language: Option<&str>, content: &str) -> &'static SyntaxReference {
    let found = match language {
        Some(language) => get(language),
        None => analyse(content),
    };
    found.unwrap_or_else(fallback)
}

/// Highlight `content` into class-annotated HTML spans.
pub fn highlight(language: Option<&str>, content: &str) -> Result<String, HighlightError> {
    let syntax = resolve(language, content);
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, ClassStyle::Spaced);
    for line in LinesWithEndings::from(content) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}

/// Write a highlighted code block, wrapper element included.
///
/// `info` is the fence info string; its first word names the language.
pub(crate) fn write_code_block(
    out: &mut dyn Write,
    info: Option<&str>,
    content: &str,
) -> Result<(), HandlerError> {
    let language = info.and_then(|info| info.split_whitespace().next());
    let body = highlight(language, content)?;

    match language {
        Some(language) => write!(
            out,
            r#"<pre class="highlight"><code class="language-{}">"#,
            escape_html(language)
        )?,
        None => out.write_all(br#"<pre class="highlight"><code>"#)?,
    }
    out.write_all(body.as_bytes())?;
    out.write_all(b"</code></pre>\n")?;
    Ok(())
}

/// CSS for the highlight classes in the given style.
pub fn stylesheet(style: HighlightStyle) -> Result<String, HighlightError> {
    let themes = ThemeSet::load_defaults();
    let name = style.theme_name();
    let theme = themes
        .themes
        .get(name)
        .ok_or_else(|| HighlightError::UnknownStyle(name.to_owned()))?;
    Ok(css_for_theme_with_class_style(theme, ClassStyle::Spaced)?)
}
