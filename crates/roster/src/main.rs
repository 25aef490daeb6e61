//! # Roster CLI Architecture
//!
//! Roster ships with a terminal client, but the binary is intentionally thin: the CLI lives
//! in `src/cli/`, while this file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/rosterapp/`: UI-agnostic library: model, backend, pagination, screens
//! - `crates/roster/`: This CLI tool, depends on the `rosterapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/roster/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command selection + context wiring (commands.rs)         │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/rosterapp/src/api.rs)                    │
//! │  - Owns the backend and both screens                        │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible for **all**
//! user-facing concerns: argument parsing, logging setup, context initialization, dispatch,
//! error reporting and rendering.
//!
//! ## Rendering
//!
//! Templates live in `src/cli/templates/` and are embedded at compile time via
//! `include_str!()`. `render.rs` computes the layout (column widths, truncation, the page
//! bar) and hands plain data to the templates, which only pick styles.
//!
//! ## Testing Approach
//!
//! - **Library**: screens, commands and the API facade are unit tested against an in-memory
//!   backend; the HTTP backend is tested against a mock server.
//! - **CLI layer**: render functions are tested with canned data and colors off;
//!   `tests/cli_e2e.rs` runs the real binary against a mock server.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
