//! Markdown syntax tree built from the pulldown-cmark event stream.
//!
//! Nodes live in an arena owned by [`Document`]. A [`Node`] is a borrowed
//! handle that can look at its children and, read-only, at its parent.

use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Options, Tag, TagEnd};

/// Parser options used for every document.
///
/// Fenced code, backslash hard breaks, ordered list start numbers and
/// angle-bracket autolinks are part of `CommonMark` and always on.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_MATH
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Parse markdown into a syntax tree.
#[must_use]
pub fn parse(markdown: &str) -> Document {
    let mut builder = TreeBuilder::new();
    for event in pulldown_cmark::Parser::new_ext(markdown, parser_options()) {
        builder.push(event);
    }
    builder.finish()
}

/// Index of a node in its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Node kinds the render hook dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    BlockQuote,
    Paragraph,
    Text,
    ListItem,
    CodeBlock,
    Other,
}

/// Node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Document,
    /// `tight` paragraphs are synthesized for inline content of tight list
    /// items and render without `<p>`.
    Paragraph {
        tight: bool,
    },
    Heading {
        level: u8,
        id: Option<String>,
        classes: Vec<String>,
    },
    BlockQuote,
    /// `info` is `None` for indented blocks and empty fence info strings.
    CodeBlock {
        info: Option<String>,
        literal: String,
    },
    HtmlBlock(String),
    List {
        start: Option<u64>,
    },
    ListItem,
    Table {
        alignments: Vec<Alignment>,
    },
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    /// Container for constructs the parser options leave disabled
    /// (superscript, subscript, definition lists); only its children render.
    Passthrough,
    Link {
        url: String,
        title: String,
    },
    Image {
        url: String,
        title: String,
    },
    FootnoteDefinition(String),
    FootnoteReference(String),
    Metadata,
    Text(String),
    Code(String),
    Html(String),
    Math {
        display: bool,
        literal: String,
    },
    SoftBreak,
    HardBreak,
    Rule,
}

impl NodeValue {
    /// Dispatch kind of this value.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::BlockQuote => NodeKind::BlockQuote,
            Self::Paragraph { .. } => NodeKind::Paragraph,
            Self::Text(_) => NodeKind::Text,
            Self::ListItem => NodeKind::ListItem,
            Self::CodeBlock { .. } => NodeKind::CodeBlock,
            _ => NodeKind::Other,
        }
    }

    /// Whether the node can hold children (and gets an exit visit).
    #[must_use]
    pub fn is_container(&self) -> bool {
        !matches!(
            self,
            Self::CodeBlock { .. }
                | Self::HtmlBlock(_)
                | Self::FootnoteReference(_)
                | Self::Metadata
                | Self::Text(_)
                | Self::Code(_)
                | Self::Html(_)
                | Self::Math { .. }
                | Self::SoftBreak
                | Self::HardBreak
                | Self::Rule
        )
    }

    /// Whether the node is block-level.
    fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Paragraph { .. }
                | Self::Heading { .. }
                | Self::BlockQuote
                | Self::CodeBlock { .. }
                | Self::HtmlBlock(_)
                | Self::List { .. }
                | Self::ListItem
                | Self::Table { .. }
                | Self::TableHead
                | Self::TableRow
                | Self::TableCell
                | Self::FootnoteDefinition(_)
                | Self::Metadata
                | Self::Rule
        )
    }
}

#[derive(Debug)]
struct NodeData {
    value: NodeValue,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Parsed markdown document.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                value: NodeValue::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Root node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.node(NodeId(0))
    }

    /// Handle for a node id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node { doc: self, id }
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn value_mut(&mut self, id: NodeId) -> &mut NodeValue {
        &mut self.nodes[id.0].value
    }

    fn append(&mut self, parent: NodeId, value: NodeValue) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

/// Borrowed handle to a node.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn value(self) -> &'a NodeValue {
        &self.doc.data(self.id).value
    }

    #[must_use]
    pub fn kind(self) -> NodeKind {
        self.value().kind()
    }

    #[must_use]
    pub fn is_container(self) -> bool {
        self.value().is_container()
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(self) -> Option<Node<'a>> {
        self.doc.data(self.id).parent.map(|id| self.doc.node(id))
    }

    #[must_use]
    pub fn first_child(self) -> Option<Node<'a>> {
        self.doc
            .data(self.id)
            .children
            .first()
            .map(|&id| self.doc.node(id))
    }

    pub fn children(self) -> impl DoubleEndedIterator<Item = Node<'a>> + ExactSizeIterator {
        let doc = self.doc;
        doc.data(self.id).children.iter().map(move |&id| doc.node(id))
    }

    /// Position among the parent's children.
    #[must_use]
    pub fn index_in_parent(self) -> usize {
        let Some(parent) = self.parent() else {
            return 0;
        };
        parent
            .children()
            .position(|child| child.id == self.id)
            .unwrap_or(0)
    }

    /// Literal content of text and code block nodes.
    #[must_use]
    pub fn literal(self) -> Option<&'a str> {
        match self.value() {
            NodeValue::Text(text) => Some(text),
            NodeValue::CodeBlock { literal, .. } => Some(literal),
            _ => None,
        }
    }

    /// Concatenated plain text of all descendants.
    #[must_use]
    pub fn plain_text(self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(self, buf: &mut String) {
        match self.value() {
            NodeValue::Text(text) | NodeValue::Code(text) => buf.push_str(text),
            NodeValue::SoftBreak | NodeValue::HardBreak => buf.push(' '),
            _ => {
                for child in self.children() {
                    child.collect_text(buf);
                }
            }
        }
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

/// Folds pulldown-cmark events into a [`Document`].
struct TreeBuilder {
    doc: Document,
    /// Open containers; the root is always at the bottom.
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            doc: Document::new(),
            stack: vec![NodeId(0)],
        }
    }

    fn finish(self) -> Document {
        self.doc
    }

    fn top(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId(0))
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_leaf(NodeValue::Code(code.into_string())),
            Event::InlineHtml(html) => self.inline_leaf(NodeValue::Html(html.into_string())),
            Event::Html(html) => self.block_html(&html),
            Event::InlineMath(math) => self.inline_leaf(NodeValue::Math {
                display: false,
                literal: math.into_string(),
            }),
            Event::DisplayMath(math) => self.inline_leaf(NodeValue::Math {
                display: true,
                literal: math.into_string(),
            }),
            Event::FootnoteReference(label) => {
                self.inline_leaf(NodeValue::FootnoteReference(label.into_string()));
            }
            Event::SoftBreak => self.inline_leaf(NodeValue::SoftBreak),
            Event::HardBreak => self.inline_leaf(NodeValue::HardBreak),
            Event::Rule => {
                self.close_tight_paragraph();
                let parent = self.top();
                self.doc.append(parent, NodeValue::Rule);
            }
            Event::TaskListMarker(checked) => self.text(if checked { "[x]" } else { "[ ]" }),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let value = tag_value(tag);
        if value.is_block() {
            self.close_tight_paragraph();
        } else {
            self.open_tight_paragraph();
        }
        let parent = self.top();
        let id = self.doc.append(parent, value);
        self.stack.push(id);
    }

    fn end(&mut self, tag: TagEnd) {
        if tag != TagEnd::Paragraph {
            self.close_tight_paragraph();
        }
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn text(&mut self, text: &str) {
        let top = self.top();
        match self.doc.value_mut(top) {
            NodeValue::CodeBlock { literal, .. } | NodeValue::HtmlBlock(literal) => {
                literal.push_str(text);
                return;
            }
            NodeValue::Metadata => return,
            _ => {}
        }

        self.open_tight_paragraph();
        let parent = self.top();
        let last = self.doc.data(parent).children.last().copied();
        if let Some(last) = last
            && let NodeValue::Text(existing) = self.doc.value_mut(last)
        {
            existing.push_str(text);
            return;
        }
        self.doc.append(parent, NodeValue::Text(text.to_owned()));
    }

    fn block_html(&mut self, html: &str) {
        let top = self.top();
        if let NodeValue::HtmlBlock(literal) = self.doc.value_mut(top) {
            literal.push_str(html);
        } else {
            self.inline_leaf(NodeValue::Html(html.to_owned()));
        }
    }

    fn inline_leaf(&mut self, value: NodeValue) {
        self.open_tight_paragraph();
        let parent = self.top();
        self.doc.append(parent, value);
    }

    /// Wrap inline content placed directly in a list item.
    fn open_tight_paragraph(&mut self) {
        let top = self.top();
        if matches!(self.doc.data(top).value, NodeValue::ListItem) {
            let id = self.doc.append(top, NodeValue::Paragraph { tight: true });
            self.stack.push(id);
        }
    }

    fn close_tight_paragraph(&mut self) {
        let top = self.top();
        if matches!(
            self.doc.data(top).value,
            NodeValue::Paragraph { tight: true }
        ) {
            self.stack.pop();
        }
    }
}

fn tag_value(tag: Tag<'_>) -> NodeValue {
    match tag {
        Tag::Paragraph => NodeValue::Paragraph { tight: false },
        Tag::Heading {
            level, id, classes, ..
        } => NodeValue::Heading {
            level: heading_level_to_num(level),
            id: id.map(|id| id.into_string()),
            classes: classes.into_iter().map(|c| c.into_string()).collect(),
        },
        Tag::BlockQuote(_) => NodeValue::BlockQuote,
        Tag::CodeBlock(kind) => {
            let info = match kind {
                CodeBlockKind::Fenced(info) => {
                    let info = info.trim();
                    (!info.is_empty()).then(|| info.to_owned())
                }
                CodeBlockKind::Indented => None,
            };
            NodeValue::CodeBlock {
                info,
                literal: String::new(),
            }
        }
        Tag::HtmlBlock => NodeValue::HtmlBlock(String::new()),
        Tag::List(start) => NodeValue::List { start },
        Tag::Item => NodeValue::ListItem,
        Tag::FootnoteDefinition(label) => NodeValue::FootnoteDefinition(label.into_string()),
        Tag::Table(alignments) => NodeValue::Table { alignments },
        Tag::TableHead => NodeValue::TableHead,
        Tag::TableRow => NodeValue::TableRow,
        Tag::TableCell => NodeValue::TableCell,
        Tag::Emphasis => NodeValue::Emphasis,
        Tag::Strong => NodeValue::Strong,
        Tag::Strikethrough => NodeValue::Strikethrough,
        Tag::Superscript
        | Tag::Subscript
        | Tag::DefinitionList
        | Tag::DefinitionListTitle
        | Tag::DefinitionListDefinition => NodeValue::Passthrough,
        Tag::Link {
            dest_url, title, ..
        } => NodeValue::Link {
            url: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Image {
            dest_url, title, ..
        } => NodeValue::Image {
            url: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::MetadataBlock(_) => NodeValue::Metadata,
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(node: Node<'_>) -> Vec<NodeKind> {
        node.children().map(Node::kind).collect()
    }

    #[test]
    fn test_paragraph_text() {
        let doc = parse("Hello, world!");
        let para = doc.root().first_child().unwrap();
        assert_eq!(para.value(), &NodeValue::Paragraph { tight: false });
        let text = para.first_child().unwrap();
        assert_eq!(text.literal(), Some("Hello, world!"));
        assert_eq!(text.parent().unwrap().id(), para.id());
    }

    #[test]
    fn test_adjacent_text_merged() {
        let doc = parse("> [!WARNING] Careful");
        let quote = doc.root().first_child().unwrap();
        assert_eq!(quote.kind(), NodeKind::BlockQuote);
        let para = quote.first_child().unwrap();
        assert_eq!(para.children().len(), 1);
        assert_eq!(
            para.first_child().unwrap().literal(),
            Some("[!WARNING] Careful")
        );
    }

    #[test]
    fn test_tight_list_item_gets_paragraph() {
        let doc = parse("- [x] done\n- [ ] todo");
        let list = doc.root().first_child().unwrap();
        assert_eq!(kinds(list), vec![NodeKind::ListItem, NodeKind::ListItem]);

        let item = list.first_child().unwrap();
        let para = item.first_child().unwrap();
        assert_eq!(para.value(), &NodeValue::Paragraph { tight: true });
        assert_eq!(para.first_child().unwrap().literal(), Some("[x] done"));
        assert_eq!(para.parent().unwrap().kind(), NodeKind::ListItem);
    }

    #[test]
    fn test_tight_item_with_nested_list() {
        let doc = parse("- outer\n  - inner");
        let item = doc.root().first_child().unwrap().first_child().unwrap();
        let children: Vec<_> = item.children().map(Node::value).collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], &NodeValue::Paragraph { tight: true });
        assert_eq!(children[1], &NodeValue::List { start: None });
    }

    #[test]
    fn test_loose_list_keeps_real_paragraphs() {
        let doc = parse("- one\n\n- two");
        let item = doc.root().first_child().unwrap().first_child().unwrap();
        assert_eq!(
            item.first_child().unwrap().value(),
            &NodeValue::Paragraph { tight: false }
        );
    }

    #[test]
    fn test_fenced_code_block() {
        let doc = parse("```rust\nfn main() {}\n```");
        let code = doc.root().first_child().unwrap();
        assert_eq!(
            code.value(),
            &NodeValue::CodeBlock {
                info: Some("rust".to_owned()),
                literal: "fn main() {}\n".to_owned(),
            }
        );
        assert!(!code.is_container());
        assert_eq!(code.children().len(), 0);
    }

    #[test]
    fn test_code_block_without_info() {
        let doc = parse("```\nplain\n```\n\n    indented\n");
        let infos: Vec<_> = doc
            .root()
            .children()
            .map(|node| match node.value() {
                NodeValue::CodeBlock { info, .. } => info.clone(),
                other => panic!("unexpected node {other:?}"),
            })
            .collect();
        assert_eq!(infos, vec![None, None]);
    }

    #[test]
    fn test_ordered_list_start() {
        let doc = parse("3. three\n4. four");
        assert_eq!(
            doc.root().first_child().unwrap().value(),
            &NodeValue::List { start: Some(3) }
        );
    }

    #[test]
    fn test_heading_attributes() {
        let doc = parse("## Title {#custom}");
        assert_eq!(
            doc.root().first_child().unwrap().value(),
            &NodeValue::Heading {
                level: 2,
                id: Some("custom".to_owned()),
                classes: Vec::new(),
            }
        );
    }

    #[test]
    fn test_table_structure() {
        let doc = parse("| A | B |\n|---|:-:|\n| 1 | 2 |");
        let table = doc.root().first_child().unwrap();
        assert_eq!(
            table.value(),
            &NodeValue::Table {
                alignments: vec![Alignment::None, Alignment::Center],
            }
        );
        let head = table.first_child().unwrap();
        assert_eq!(head.value(), &NodeValue::TableHead);
        let second_cell = head.children().nth(1).unwrap();
        assert_eq!(second_cell.index_in_parent(), 1);
        assert_eq!(second_cell.plain_text(), "B");
    }

    #[test]
    fn test_math_nodes() {
        let doc = parse("Euler $e^{i\\pi}$");
        let para = doc.root().first_child().unwrap();
        let math = para.children().last().unwrap();
        assert_eq!(
            math.value(),
            &NodeValue::Math {
                display: false,
                literal: "e^{i\\pi}".to_owned(),
            }
        );
    }

    #[test]
    fn test_root_has_no_parent() {
        let doc = parse("");
        assert!(doc.root().parent().is_none());
        assert!(doc.is_empty());
    }
}
