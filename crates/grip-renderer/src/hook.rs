//! Render hook seam between the tree walk and node-specific handlers.

use std::io::Write;

use crate::alert::AlertKind;
use crate::ast::{Node, NodeKind};
use crate::handlers;
use crate::templates::TemplateSet;

/// What the walker does after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Continue normally, descending into children.
    GoToNext,
    /// Do not descend into the node's children.
    SkipChildren,
}

/// Outcome of a hook invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookResult {
    pub status: WalkStatus,
    /// Whether the hook wrote the node itself; default rendering is
    /// suppressed when set.
    pub consumed: bool,
}

impl HookResult {
    /// The hook left the node to the default renderer.
    #[must_use]
    pub const fn declined() -> Self {
        Self {
            status: WalkStatus::GoToNext,
            consumed: false,
        }
    }

    /// The hook rendered the node; traversal continues into children.
    #[must_use]
    pub const fn handled() -> Self {
        Self {
            status: WalkStatus::GoToNext,
            consumed: true,
        }
    }

    /// The hook rendered the node together with its children.
    #[must_use]
    pub const fn handled_skip_children() -> Self {
        Self {
            status: WalkStatus::SkipChildren,
            consumed: true,
        }
    }
}

/// Hook consulted for every node visit before default rendering.
///
/// Leaf nodes are visited once with `entering == true`; containers are
/// visited on entry and on exit.
pub trait RenderNodeHook {
    fn render_node(&self, out: &mut dyn Write, node: Node<'_>, entering: bool) -> HookResult;
}

/// Shared state handed to node handlers for one conversion.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub templates: &'a TemplateSet,
    /// Theme name passed to diagram templates.
    pub theme: &'a str,
}

/// Hook dispatching to the GitHub-flavored node handlers.
///
/// Handler failures are logged and the node counts as rendered, so one bad
/// node never aborts the document.
#[derive(Debug)]
pub struct GripHook<'a> {
    ctx: HookContext<'a>,
}

impl<'a> GripHook<'a> {
    #[must_use]
    pub fn new(templates: &'a TemplateSet, theme: &'a str) -> Self {
        Self {
            ctx: HookContext { templates, theme },
        }
    }
}

impl RenderNodeHook for GripHook<'_> {
    fn render_node(&self, out: &mut dyn Write, node: Node<'_>, entering: bool) -> HookResult {
        let result = match node.kind() {
            NodeKind::CodeBlock => handlers::code_block::render(out, node, &self.ctx),
            NodeKind::BlockQuote => Ok(handlers::alert::render_block_quote(node)),
            NodeKind::Paragraph => {
                handlers::alert::render_paragraph(out, node, entering, &self.ctx)
            }
            NodeKind::Text => handlers::text::render(out, node),
            NodeKind::ListItem => handlers::list_item::render(out, node, entering),
            NodeKind::Other => Ok(HookResult::declined()),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, kind = ?node.kind(), "Failed to render node");
            HookResult::handled()
        })
    }
}

/// Alert kind of a paragraph, if it opens with a `[!KIND]` token inside a
/// block quote.
pub(crate) fn paragraph_alert(paragraph: Node<'_>) -> Option<AlertKind> {
    if paragraph.kind() != NodeKind::Paragraph {
        return None;
    }
    if paragraph.parent()?.kind() != NodeKind::BlockQuote {
        return None;
    }
    let text = paragraph.first_child()?.literal()?;
    AlertKind::parse_prefix(text).map(|(kind, _)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parse;

    #[test]
    fn test_paragraph_alert_detected() {
        let doc = parse("> [!TIP]\n> Use it");
        let para = doc.root().first_child().unwrap().first_child().unwrap();
        assert_eq!(paragraph_alert(para), Some(AlertKind::Tip));
    }

    #[test]
    fn test_paragraph_alert_requires_block_quote() {
        let doc = parse("[!TIP] not quoted");
        let para = doc.root().first_child().unwrap();
        assert_eq!(paragraph_alert(para), None);
    }

    #[test]
    fn test_paragraph_alert_requires_leading_text() {
        let doc = parse("> *[!TIP]* emphasized");
        let para = doc.root().first_child().unwrap().first_child().unwrap();
        assert_eq!(paragraph_alert(para), None);
    }

    #[test]
    fn test_hook_result_constructors() {
        assert!(!HookResult::declined().consumed);
        assert_eq!(HookResult::handled().status, WalkStatus::GoToNext);
        assert_eq!(
            HookResult::handled_skip_children().status,
            WalkStatus::SkipChildren
        );
    }
}
