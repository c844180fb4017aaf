//! Standalone HTML page around a rendered fragment.

use grip_config::Theme;
use grip_renderer::HighlightStyle;
use grip_renderer::highlight::stylesheet;
use minijinja::{Environment, Value, context};

use crate::error::CliError;

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Highlight stylesheet for `theme`.
///
/// `auto` ships both color schemes, switching on the reader's preference.
pub(crate) fn highlight_css(theme: Theme) -> Result<String, CliError> {
    let css = match theme {
        Theme::Light => stylesheet(HighlightStyle::Light)?,
        Theme::Dark => stylesheet(HighlightStyle::Dark)?,
        Theme::Auto => {
            let light = stylesheet(HighlightStyle::Light)?;
            let dark = stylesheet(HighlightStyle::Dark)?;
            format!("{light}\n@media (prefers-color-scheme: dark) {{\n{dark}}}\n")
        }
    };
    Ok(css)
}

/// Wrap an HTML fragment in a complete page.
pub(crate) fn render_page(title: &str, theme: Theme, content: &str) -> Result<String, CliError> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;
    let template = env.get_template("page.html")?;
    let page = template.render(context! {
        title => title,
        theme => theme.as_str(),
        highlight_css => Value::from_safe_string(highlight_css(theme)?),
        content => Value::from_safe_string(content.to_owned()),
    })?;
    Ok(page)
}
