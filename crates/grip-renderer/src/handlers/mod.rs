//! Node handlers used by [`GripHook`](crate::hook::GripHook).

pub(crate) mod alert;
pub(crate) mod code_block;
pub(crate) mod list_item;
pub(crate) mod text;
