//! Error types for markdown rendering.

use std::io;

/// Error returned by [`Parser::render_to`](crate::Parser::render_to).
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write HTML: {0}")]
    Io(#[from] io::Error),
}

/// Error rendering an embedded fragment template.
#[derive(Debug, thiserror::Error)]
#[error("template '{name}' failed: {source}")]
pub struct TemplateError {
    pub name: String,
    #[source]
    pub source: minijinja::Error,
}

/// Error producing highlighted code or a highlight stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("syntax highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
    #[error("unknown highlight style: {0}")]
    UnknownStyle(String),
}

/// Failure inside a node handler. Logged by the hook and never returned to
/// callers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum HandlerError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Highlight(#[from] HighlightError),
}
