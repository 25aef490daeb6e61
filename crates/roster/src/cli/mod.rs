//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## One Invocation, One Screen
//!
//! Each invocation drives a single screen through one request cycle and prints the result:
//!
//! - `roster` / `roster list`: the list screen, one page of the table
//! - `roster create` / `roster edit`: the list screen's form, submitted once
//! - `roster view`: the detail screen, optionally saving edits in place
//! - `roster browse`: the list screen kept alive, paged from stdin
//!
//! A screen that ends in an error state is still rendered (the not-found view keeps its
//! way back to the list) before the process exits with status 1.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Layout and template rendering
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
