//! Text nodes: emoji shortcodes, alert tokens and task checkboxes.

use std::io::Write;

use super::list_item::task_marker;
use crate::alert::AlertKind;
use crate::ast::{Node, NodeKind};
use crate::emoji;
use crate::error::HandlerError;
use crate::hook::HookResult;
use crate::html::escape_html;

const CHECKBOX_UNCHECKED: &[u8] =
    br#"<input type="checkbox" disabled class="task-list-item-checkbox">"#;
const CHECKBOX_CHECKED: &[u8] =
    br#"<input type="checkbox" disabled class="task-list-item-checkbox" checked>"#;

pub(crate) fn render(out: &mut dyn Write, node: Node<'_>) -> Result<HookResult, HandlerError> {
    let Some(literal) = node.literal() else {
        return Ok(HookResult::declined());
    };

    let escaped = escape_html(literal);
    let content = emoji::substitute(&escaped);
    let mut rest: &str = &content;

    if let Some(paragraph) = leading_paragraph(node) {
        match paragraph.parent().map(Node::kind) {
            Some(NodeKind::BlockQuote) => {
                if let Some((_, after)) = AlertKind::parse_prefix(rest) {
                    rest = after;
                }
            }
            Some(NodeKind::ListItem) if paragraph.index_in_parent() == 0 => {
                if let Some((checked, after)) = task_marker(rest) {
                    out.write_all(if checked {
                        CHECKBOX_CHECKED
                    } else {
                        CHECKBOX_UNCHECKED
                    })?;
                    rest = after;
                }
            }
            _ => {}
        }
    }

    out.write_all(rest.as_bytes())?;
    Ok(HookResult::handled())
}

/// Paragraph that `node` opens, if it is the paragraph's first child.
fn leading_paragraph(node: Node<'_>) -> Option<Node<'_>> {
    let parent = node.parent()?;
    (parent.kind() == NodeKind::Paragraph && node.index_in_parent() == 0).then_some(parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parse;
    use pretty_assertions::assert_eq;

    /// Render every text node of `markdown` through the handler.
    fn render_texts(markdown: &str) -> Vec<String> {
        let doc = parse(markdown);
        let mut rendered = Vec::new();
        let mut stack = vec![doc.root()];
        while let Some(node) = stack.pop() {
            if node.kind() == NodeKind::Text {
                let mut out = Vec::new();
                assert!(render(&mut out, node).unwrap().consumed);
                rendered.push(String::from_utf8(out).unwrap());
            }
            stack.extend(node.children().rev());
        }
        rendered
    }

    #[test]
    fn test_emoji_substituted() {
        assert_eq!(render_texts("Ship it :rocket:"), vec!["Ship it 🚀"]);
    }

    #[test]
    fn test_text_escaped() {
        assert_eq!(render_texts("a &amp; b"), vec!["a &amp; b"]);
        assert_eq!(render_texts(r"1 \< 2"), vec!["1 &lt; 2"]);
    }

    #[test]
    fn test_alert_token_stripped() {
        assert_eq!(render_texts("> [!NOTE] Heads up"), vec![" Heads up"]);
    }

    #[test]
    fn test_alert_token_kept_outside_quote() {
        assert_eq!(render_texts("[!NOTE] Heads up"), vec!["[!NOTE] Heads up"]);
    }

    #[test]
    fn test_unknown_alert_token_kept() {
        assert_eq!(render_texts("> [!DANGER] Hot"), vec!["[!DANGER] Hot"]);
    }

    #[test]
    fn test_task_checkboxes() {
        assert_eq!(
            render_texts("- [ ] todo\n- [x] done"),
            vec![
                r#"<input type="checkbox" disabled class="task-list-item-checkbox"> todo"#,
                r#"<input type="checkbox" disabled class="task-list-item-checkbox" checked> done"#,
            ]
        );
    }

    #[test]
    fn test_marker_only_at_paragraph_start() {
        assert_eq!(
            render_texts("- see *this* [x] later"),
            vec!["see ", "this", " [x] later"]
        );
    }

    #[test]
    fn test_marker_outside_list_kept() {
        assert_eq!(render_texts("[x] not a task"), vec!["[x] not a task"]);
    }
}
