//! CLI error types.

use grip_config::ConfigError;
use grip_renderer::{HighlightError, RenderError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Highlight(#[from] HighlightError),

    #[error("page template failed: {0}")]
    Template(#[from] minijinja::Error),
}
