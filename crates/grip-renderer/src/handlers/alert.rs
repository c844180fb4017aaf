//! Block quotes and their paragraphs rendered as GitHub alerts.

use std::io::Write;

use crate::alert::AlertKind;
use crate::ast::Node;
use crate::error::HandlerError;
use crate::hook::{HookContext, HookResult, paragraph_alert};

/// A block quote whose first paragraph opens with an alert token drops its
/// `<blockquote>` wrapper; the paragraph handler emits the alert markup.
/// Other block quotes render normally.
pub(crate) fn render_block_quote(node: Node<'_>) -> HookResult {
    match node.first_child().and_then(paragraph_alert) {
        Some(_) => HookResult::handled(),
        None => HookResult::declined(),
    }
}

pub(crate) fn render_paragraph(
    out: &mut dyn Write,
    node: Node<'_>,
    entering: bool,
    ctx: &HookContext<'_>,
) -> Result<HookResult, HandlerError> {
    let Some(kind) = paragraph_alert(node) else {
        return Ok(HookResult::declined());
    };

    if entering {
        let html = ctx.templates.render_alert(kind)?;
        out.write_all(html.as_bytes())?;
    } else {
        out.write_all(AlertKind::CLOSING.as_bytes())?;
    }
    Ok(HookResult::handled())
}
