//! Task list items.

use std::io::Write;

use crate::ast::{Node, NodeKind};
use crate::error::HandlerError;
use crate::hook::HookResult;

const TASK_ITEM_OPEN: &[u8] = br#"<li class="task-list-item">"#;

/// Parse a task marker (`[ ]`, `[x]` or `[X]`) at the start of `text`.
///
/// Returns whether the box is checked and the text after the marker.
pub(crate) fn task_marker(text: &str) -> Option<(bool, &str)> {
    if let Some(rest) = text.strip_prefix("[ ]") {
        return Some((false, rest));
    }
    text.strip_prefix("[x]")
        .or_else(|| text.strip_prefix("[X]"))
        .map(|rest| (true, rest))
}

/// Leading text of a list item: the first child of its first paragraph.
fn leading_text<'a>(item: Node<'a>) -> Option<&'a str> {
    let paragraph = item.first_child()?;
    if paragraph.kind() != NodeKind::Paragraph {
        return None;
    }
    paragraph.first_child()?.literal()
}

pub(crate) fn render(
    out: &mut dyn Write,
    node: Node<'_>,
    entering: bool,
) -> Result<HookResult, HandlerError> {
    if leading_text(node).and_then(task_marker).is_none() {
        return Ok(HookResult::declined());
    }

    if entering {
        out.write_all(TASK_ITEM_OPEN)?;
    } else {
        out.write_all(b"</li>\n")?;
    }
    Ok(HookResult::handled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_marker() {
        assert_eq!(task_marker("[ ] todo"), Some((false, " todo")));
        assert_eq!(task_marker("[x] done"), Some((true, " done")));
        assert_eq!(task_marker("[X]"), Some((true, "")));
        assert_eq!(task_marker("[-] nope"), None);
        assert_eq!(task_marker("todo [ ]"), None);
    }

    #[test]
    fn test_task_item_class() {
        let doc = parse("- [ ] todo");
        let item = doc.root().first_child().unwrap().first_child().unwrap();

        let mut open = Vec::new();
        assert_eq!(
            render(&mut open, item, true).unwrap(),
            HookResult::handled()
        );
        assert_eq!(open, TASK_ITEM_OPEN);

        let mut close = Vec::new();
        render(&mut close, item, false).unwrap();
        assert_eq!(close, b"</li>\n");
    }

    #[test]
    fn test_plain_item_declined() {
        let doc = parse("- plain\n- *[x]* emphasized");
        for item in doc.root().first_child().unwrap().children() {
            let mut out = Vec::new();
            assert_eq!(
                render(&mut out, item, true).unwrap(),
                HookResult::declined()
            );
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_loose_task_item() {
        let doc = parse("- [x] one\n\n- two");
        let item = doc.root().first_child().unwrap().first_child().unwrap();
        let mut out = Vec::new();
        assert!(render(&mut out, item, true).unwrap().consumed);
    }
}
