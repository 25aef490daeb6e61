//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept in stand-alone files under
//! `templates/`, embedded here as string constants.
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks` on, so a line holding only
//! a `{% ... %}` tag produces no output and every other line produces exactly one line.
//! Layout (column widths, truncation, the page bar) is computed in Rust before rendering;
//! templates only choose what to show and which style to apply.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const MODAL_TEMPLATE: &str = include_str!("templates/modal.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
