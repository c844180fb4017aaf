//! Markdown to HTML conversion entry point.

use std::io::Write;

use crate::ast;
use crate::error::RenderError;
use crate::hook::GripHook;
use crate::html::HtmlRenderer;
use crate::preprocess::ListBoundaryPreprocessor;
use crate::templates::TemplateSet;

/// Default theme name passed to diagram templates.
pub const DEFAULT_THEME: &str = "auto";

/// Converts markdown into an HTML fragment.
///
/// A parser holds only its theme, so one instance can serve concurrent
/// conversions.
///
/// # Example
///
/// ```
/// use grip_renderer::Parser;
///
/// let parser = Parser::new("light");
/// let html = parser.md_to_html(b"> [!TIP]\n> Try `grip render`.");
/// let html = String::from_utf8(html).unwrap();
///
/// assert!(html.contains("markdown-alert-tip"));
/// assert!(!html.contains("<blockquote>"));
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    theme: String,
}

impl Parser {
    /// Create a parser whose diagrams use `theme`.
    #[must_use]
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }

    /// Theme name passed to diagram templates.
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Convert markdown bytes to HTML bytes.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. Conversion never
    /// fails; failures inside individual nodes are logged and the rest of
    /// the document is still rendered.
    #[must_use]
    pub fn md_to_html(&self, markdown: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(markdown.len() * 2);
        if let Err(e) = self.render_to(markdown, &mut out) {
            tracing::error!(error = %e, "Failed to render markdown");
        }
        out
    }

    /// Convert markdown and write the HTML to `out`.
    ///
    /// Only errors from `out` itself are returned.
    pub fn render_to<W: Write>(&self, markdown: &[u8], out: &mut W) -> Result<(), RenderError> {
        let source = String::from_utf8_lossy(markdown);

        let mut preprocessor = ListBoundaryPreprocessor::new();
        let normalized = preprocessor.process(&source);
        let document = ast::parse(&normalized);
        tracing::debug!(
            bytes = markdown.len(),
            nodes = document.len(),
            list_breaks = preprocessor.insertions(),
            "Parsed markdown"
        );

        let templates = TemplateSet::new();
        let hook = GripHook::new(&templates, &self.theme);
        HtmlRenderer::new()
            .with_hook(&hook)
            .render(&document, out)?;
        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}
