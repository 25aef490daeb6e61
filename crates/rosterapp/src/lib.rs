//! # Roster Architecture
//!
//! Roster is a **UI-agnostic client library** for a remote user directory. The terminal
//! client in `crates/roster` is one way of driving it; nothing in here knows about a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (crates/roster)                                   │
//! │  - Parses arguments, renders screens, handles terminal I/O  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: owns the backend and one of each screen     │
//! │  - Normalizes inputs (typed ids → UserId)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Drives a screen through begin → request → finish         │
//! │  - Returns `CmdResult` with leveled messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                 ┌────────────┴────────────┐
//!                 ▼                         ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  Screens (screens/)       │ │  Backend (backend/)           │
//! │  - Pure state machines    │ │  - UserBackend trait          │
//! │  - No I/O whatsoever      │ │  - HttpBackend, MemBackend    │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## Screens Are Independent
//!
//! The list screen and the detail screen each keep a private, transient copy of whatever
//! they fetched. There is no shared cache: opening a user's details fetches that user again,
//! and saving on the detail screen does not touch the list screen's copy.
//!
//! ## Testing Strategy
//!
//! 1. **Screens and pagination**: exhaustive unit tests of the state transitions.
//! 2. **Commands**: run against [`backend::memory::MemBackend`], which records every call so
//!    tests can assert how many requests were issued.
//! 3. **HTTP**: `tests/http_backend.rs` points [`backend::http::HttpBackend`] at a mock server.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Orchestration of screens and backend calls
//! - [`screens`]: List and detail screen state machines
//! - [`pagination`]: Page math and the ellipsis-compressed page window
//! - [`backend`]: Remote collaborator abstraction and implementations
//! - [`model`]: `User`, `UserId`, `NewUser`, `UserDraft`
//! - [`format`]: Human display of raw timestamps
//! - [`config`] / [`init`]: Configuration loading and context setup
//! - [`error`]: Error types

pub mod api;
pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod init;
pub mod model;
pub mod pagination;
pub mod screens;
