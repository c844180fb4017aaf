//! Default HTML rendering of the syntax tree.

use std::collections::HashMap;
use std::io::{self, Write};

use pulldown_cmark::Alignment;

use crate::ast::{Document, Node, NodeValue};
use crate::hook::{RenderNodeHook, WalkStatus};

enum Visit<'a> {
    Enter(Node<'a>),
    Exit(Node<'a>),
}

/// Depth-first HTML renderer with an optional [`RenderNodeHook`].
///
/// The hook sees every visit first. When it reports the node as consumed,
/// default rendering is skipped for that visit.
pub struct HtmlRenderer<'h> {
    hook: Option<&'h dyn RenderNodeHook>,
    /// Counter for generating unique heading IDs.
    heading_ids: HashMap<String, usize>,
}

impl<'h> HtmlRenderer<'h> {
    /// Create a renderer without a hook.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hook: None,
            heading_ids: HashMap::new(),
        }
    }

    /// Consult `hook` before rendering each node.
    #[must_use]
    pub fn with_hook(mut self, hook: &'h dyn RenderNodeHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Render the whole document to `out`.
    pub fn render(&mut self, doc: &Document, out: &mut dyn Write) -> io::Result<()> {
        let mut stack = vec![Visit::Enter(doc.root())];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(node) => {
                    let status = self.visit(node, true, out)?;
                    if node.is_container() {
                        stack.push(Visit::Exit(node));
                        if status == WalkStatus::GoToNext {
                            stack.extend(node.children().rev().map(Visit::Enter));
                        }
                    }
                }
                Visit::Exit(node) => {
                    self.visit(node, false, out)?;
                }
            }
        }

        out.flush()
    }

    fn visit(
        &mut self,
        node: Node<'_>,
        entering: bool,
        out: &mut dyn Write,
    ) -> io::Result<WalkStatus> {
        if let Some(hook) = self.hook {
            let result = hook.render_node(out, node, entering);
            if result.consumed {
                return Ok(result.status);
            }
        }
        self.render_default(node, entering, out)
    }

    #[allow(clippy::too_many_lines)]
    fn render_default(
        &mut self,
        node: Node<'_>,
        entering: bool,
        out: &mut dyn Write,
    ) -> io::Result<WalkStatus> {
        match node.value() {
            NodeValue::Document | NodeValue::Passthrough | NodeValue::Metadata => {}
            NodeValue::Paragraph { tight } => match (tight, entering) {
                (true, _) => {}
                (false, true) => out.write_all(b"<p>")?,
                (false, false) => out.write_all(b"</p>\n")?,
            },
            NodeValue::Heading { level, id, classes } => {
                if entering {
                    let id = match id {
                        Some(id) => id.clone(),
                        None => self.generate_heading_id(&node.plain_text()),
                    };
                    write!(out, "<h{level}")?;
                    if !id.is_empty() {
                        write!(out, r#" id="{}""#, escape_html(&id))?;
                    }
                    if !classes.is_empty() {
                        write!(out, r#" class="{}""#, escape_html(&classes.join(" ")))?;
                    }
                    out.write_all(b">")?;
                } else {
                    writeln!(out, "</h{level}>")?;
                }
            }
            NodeValue::BlockQuote => {
                out.write_all(if entering {
                    b"<blockquote>\n"
                } else {
                    b"</blockquote>\n"
                })?;
            }
            NodeValue::CodeBlock { info, literal } => {
                let language = info
                    .as_deref()
                    .and_then(|info| info.split_whitespace().next());
                match language {
                    Some(lang) => write!(
                        out,
                        r#"<pre><code class="language-{}">"#,
                        escape_html(lang)
                    )?,
                    None => out.write_all(b"<pre><code>")?,
                }
                out.write_all(escape_html(literal).as_bytes())?;
                out.write_all(b"</code></pre>\n")?;
            }
            NodeValue::HtmlBlock(html) | NodeValue::Html(html) => out.write_all(html.as_bytes())?,
            NodeValue::List { start } => match (start, entering) {
                (None, true) => out.write_all(b"<ul>\n")?,
                (None, false) => out.write_all(b"</ul>\n")?,
                (Some(1), true) => out.write_all(b"<ol>\n")?,
                (Some(n), true) => writeln!(out, r#"<ol start="{n}">"#)?,
                (Some(_), false) => out.write_all(b"</ol>\n")?,
            },
            NodeValue::ListItem => out.write_all(if entering { b"<li>" } else { b"</li>\n" })?,
            NodeValue::Table { .. } => out.write_all(if entering {
                b"<table>\n"
            } else {
                b"</tbody>\n</table>\n"
            })?,
            NodeValue::TableHead => out.write_all(if entering {
                b"<thead>\n<tr>"
            } else {
                b"</tr>\n</thead>\n<tbody>\n"
            })?,
            NodeValue::TableRow => out.write_all(if entering { b"<tr>" } else { b"</tr>\n" })?,
            NodeValue::TableCell => {
                let in_head = node
                    .parent()
                    .is_some_and(|parent| matches!(parent.value(), NodeValue::TableHead));
                let tag = if in_head { "th" } else { "td" };
                if entering {
                    write!(out, "<{tag}{}>", cell_alignment_style(node))?;
                } else {
                    write!(out, "</{tag}>")?;
                }
            }
            NodeValue::Emphasis => write_tag(out, "em", entering)?,
            NodeValue::Strong => write_tag(out, "strong", entering)?,
            NodeValue::Strikethrough => write_tag(out, "del", entering)?,
            NodeValue::Link { url, title } => {
                if entering {
                    write!(out, r#"<a href="{}""#, escape_html(url))?;
                    if !title.is_empty() {
                        write!(out, r#" title="{}""#, escape_html(title))?;
                    }
                    out.write_all(b">")?;
                } else {
                    out.write_all(b"</a>")?;
                }
            }
            NodeValue::Image { url, title } => {
                if entering {
                    write!(
                        out,
                        r#"<img src="{}" alt="{}""#,
                        escape_html(url),
                        escape_html(&node.plain_text())
                    )?;
                    if !title.is_empty() {
                        write!(out, r#" title="{}""#, escape_html(title))?;
                    }
                    out.write_all(b">")?;
                    return Ok(WalkStatus::SkipChildren);
                }
            }
            NodeValue::FootnoteDefinition(label) => {
                if entering {
                    let label = escape_html(label);
                    write!(
                        out,
                        r#"<div class="footnote-definition" id="fn-{label}"><sup class="footnote-definition-label">{label}</sup>"#
                    )?;
                } else {
                    out.write_all(b"</div>\n")?;
                }
            }
            NodeValue::FootnoteReference(label) => {
                let label = escape_html(label);
                write!(
                    out,
                    r##"<sup class="footnote-reference"><a href="#fn-{label}">{label}</a></sup>"##
                )?;
            }
            NodeValue::Text(text) => out.write_all(escape_html(text).as_bytes())?,
            NodeValue::Code(code) => write!(out, "<code>{}</code>", escape_html(code))?,
            NodeValue::Math { display, literal } => {
                let literal = escape_html(literal);
                if *display {
                    write!(out, r#"<span class="math display">\[{literal}\]</span>"#)?;
                } else {
                    write!(out, r#"<span class="math inline">\({literal}\)</span>"#)?;
                }
            }
            NodeValue::SoftBreak => out.write_all(b"\n")?,
            NodeValue::HardBreak => out.write_all(b"<br>\n")?,
            NodeValue::Rule => out.write_all(b"<hr>\n")?,
        }

        Ok(WalkStatus::GoToNext)
    }

    fn generate_heading_id(&mut self, text: &str) -> String {
        let base_id = slugify(text);
        let count = self.heading_ids.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }
}

impl Default for HtmlRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn write_tag(out: &mut dyn Write, tag: &str, entering: bool) -> io::Result<()> {
    if entering {
        write!(out, "<{tag}>")
    } else {
        write!(out, "</{tag}>")
    }
}

/// Alignment style for a table cell, looked up from its column.
fn cell_alignment_style(cell: Node<'_>) -> &'static str {
    let alignment = cell
        .parent()
        .and_then(Node::parent)
        .and_then(|table| match table.value() {
            NodeValue::Table { alignments } => alignments.get(cell.index_in_parent()).copied(),
            _ => None,
        });

    match alignment {
        Some(Alignment::Left) => r#" style="text-align:left""#,
        Some(Alignment::Center) => r#" style="text-align:center""#,
        Some(Alignment::Right) => r#" style="text-align:right""#,
        Some(Alignment::None) | None => "",
    }
}

/// Convert text to a URL-friendly slug.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
