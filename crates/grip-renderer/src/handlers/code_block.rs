//! Code blocks: client-side diagrams or highlighted source.

use std::io::Write;

use crate::ast::{Node, NodeValue};
use crate::error::HandlerError;
use crate::highlight;
use crate::hook::{HookContext, HookResult};

/// Fence info string that marks a diagram block.
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

pub(crate) fn render(
    out: &mut dyn Write,
    node: Node<'_>,
    ctx: &HookContext<'_>,
) -> Result<HookResult, HandlerError> {
    let NodeValue::CodeBlock { info, literal } = node.value() else {
        return Ok(HookResult::declined());
    };

    if info.as_deref() == Some(DIAGRAM_LANGUAGE) {
        let html = ctx.templates.render_diagram(literal, ctx.theme)?;
        out.write_all(html.as_bytes())?;
        return Ok(HookResult::handled_skip_children());
    }

    highlight::write_code_block(out, info.as_deref(), literal)?;
    Ok(HookResult::handled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parse;
    use crate::templates::TemplateSet;

    fn render_first(markdown: &str, theme: &str) -> (String, HookResult) {
        let doc = parse(markdown);
        let templates = TemplateSet::new();
        let ctx = HookContext {
            templates: &templates,
            theme,
        };
        let mut out = Vec::new();
        let result = render(&mut out, doc.root().first_child().unwrap(), &ctx).unwrap();
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn test_diagram_block() {
        let (html, result) = render_first("```mermaid\ngraph TD\n  A --> B\n```", "dark");
        assert_eq!(result, HookResult::handled_skip_children());
        assert!(
            html.starts_with(r#"<pre class="mermaid" data-theme="dark">"#),
            "{html}"
        );
        assert!(html.contains("A --&gt; B"), "{html}");
        assert!(!html.contains("highlight"), "{html}");
    }

    #[test]
    fn test_diagram_keyword_must_match_exactly() {
        let (html, _) = render_first("```mermaid extra\ngraph TD\n```", "light");
        assert!(html.starts_with(r#"<pre class="highlight">"#), "{html}");
    }

    #[test]
    fn test_highlighted_block() {
        let (html, result) = render_first("```rust\nfn main() {}\n```", "light");
        assert_eq!(result, HookResult::handled());
        assert!(
            html.starts_with(r#"<pre class="highlight"><code class="language-rust">"#),
            "{html}"
        );
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let (html, result) = render_first("```nosuchlang\n<x>\n```", "light");
        assert!(result.consumed);
        assert!(html.contains("&lt;x&gt;"), "{html}");
    }

    #[test]
    fn test_block_without_info() {
        let (html, _) = render_first("```\nplain\n```", "light");
        assert!(
            html.starts_with(r#"<pre class="highlight"><code>"#),
            "{html}"
        );
        assert!(html.contains("plain"), "{html}");
    }
}
