//! CLI command implementations.

pub(crate) mod page;
pub(crate) mod render;

pub(crate) use render::RenderArgs;
