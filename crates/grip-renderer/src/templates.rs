//! Embedded HTML fragment templates.
//!
//! Fragments are addressed by relative name, e.g. `alert/note.html`. Names
//! ending in `.html` are auto-escaped.

use minijinja::{Environment, context};

use crate::alert::AlertKind;
use crate::error::TemplateError;

/// Name of the diagram fragment.
pub const DIAGRAM_TEMPLATE: &str = "mermaid/mermaid.html";

const EMBEDDED: &[(&str, &str)] = &[
    ("alert/note.html", include_str!("../templates/alert/note.html")),
    ("alert/tip.html", include_str!("../templates/alert/tip.html")),
    (
        "alert/important.html",
        include_str!("../templates/alert/important.html"),
    ),
    (
        "alert/warning.html",
        include_str!("../templates/alert/warning.html"),
    ),
    (
        "alert/caution.html",
        include_str!("../templates/alert/caution.html"),
    ),
    (
        "alert/blockquote.html",
        include_str!("../templates/alert/blockquote.html"),
    ),
    (DIAGRAM_TEMPLATE, include_str!("../templates/mermaid/mermaid.html")),
];

/// Look up embedded template source by name.
#[must_use]
pub fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, source)| *source)
}

/// Template environment over the embedded fragments.
///
/// Templates are loaded and compiled on first use; a missing or malformed
/// template surfaces as a [`TemplateError`] from the render call.
#[derive(Debug)]
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(embedded(name).map(str::to_owned)));
        Self { env }
    }

    /// Render template `name` with `ctx`.
    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, TemplateError> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|source| TemplateError {
                name: name.to_owned(),
                source,
            })
    }

    /// Opening markup of an alert block.
    pub fn render_alert(&self, kind: AlertKind) -> Result<String, TemplateError> {
        self.render(
            &kind.template_name(),
            context! {
                kind => kind.as_str(),
                title => kind.title(),
            },
        )
    }

    /// Client-side diagram block for `content`.
    pub fn render_diagram(&self, content: &str, theme: &str) -> Result<String, TemplateError> {
        self.render(
            DIAGRAM_TEMPLATE,
            context! {
                content => content,
                theme => theme,
            },
        )
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}
