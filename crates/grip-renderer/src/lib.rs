//! Markdown to HTML preview renderer with GitHub-style extensions.
//!
//! This crate provides a [`Parser`] that turns markdown into an HTML fragment
//! the way GitHub previews it:
//! - block quotes opening with `[!NOTE]`, `[!TIP]`, `[!IMPORTANT]`,
//!   `[!WARNING]`, `[!CAUTION]` or `[!BLOCKQUOTE]` become alert blocks
//! - list items opening with `[ ]` or `[x]` become task items with checkboxes
//! - `:shortcode:` emoji are replaced in text
//! - `mermaid` code blocks become client-side diagrams and other code blocks
//!   are syntax highlighted
//!
//! # Architecture
//!
//! Input first passes through the [`ListBoundaryPreprocessor`], which lets a
//! list directly follow a paragraph line. The result is parsed into an
//! [`ast::Document`] and walked by [`HtmlRenderer`]. Before default rendering,
//! every node visit goes through a [`RenderNodeHook`]; [`GripHook`] holds the
//! GitHub-specific handlers.
//!
//! # Example
//!
//! ```
//! use grip_renderer::Parser;
//!
//! let parser = Parser::new("light");
//! let html = parser.md_to_html(b"Done :tada:\n- [x] ship it");
//! let html = String::from_utf8(html).unwrap();
//!
//! assert!(html.contains("🎉"));
//! assert!(html.contains(r#"<li class="task-list-item">"#));
//! ```

mod alert;
pub mod ast;
pub mod emoji;
mod error;
mod handlers;
pub mod highlight;
mod hook;
mod html;
mod parser;
mod preprocess;
mod templates;

pub use alert::AlertKind;
pub use error::{HighlightError, RenderError, TemplateError};
pub use handlers::code_block::DIAGRAM_LANGUAGE;
pub use highlight::HighlightStyle;
pub use hook::{GripHook, HookContext, HookResult, RenderNodeHook, WalkStatus};
pub use html::{HtmlRenderer, escape_html, slugify};
pub use parser::{DEFAULT_THEME, Parser};
pub use preprocess::{ListBoundaryPreprocessor, is_list_start, preprocess};
pub use templates::{DIAGRAM_TEMPLATE, TemplateSet};
