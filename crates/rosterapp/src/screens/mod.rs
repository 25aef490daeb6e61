//! # Screens
//!
//! A screen is the state behind one view of the application, with no I/O of its own.
//! Every request a screen needs is split in two halves:
//!
//! - `begin_*` validates and moves the screen into its in-flight state, returning what
//!   should be sent (or nothing, when validation blocked the request);
//! - `finish_*` takes the outcome of the request and settles the screen.
//!
//! The command layer performs the request in between. Keeping the halves apart is what lets
//! a screen refuse a second submit while the first is still in flight, and lets tests walk
//! through every intermediate state without a network.
//!
//! Load progress is one [`LoadState`] enum per screen. Saving is a separate flag, since a
//! save only ever happens on top of a loaded record.

pub mod detail;
pub mod list;

pub use detail::DetailScreen;
pub use list::{ListScreen, ModalMode, Submission, UserModal};

/// Fixed user-facing messages. Diagnostics go to the log, never to these.
pub mod messages {
    pub const LIST_LOAD_FAILED: &str = "Failed to load users";
    pub const USER_LOAD_FAILED: &str = "Failed to load user";
    pub const USER_NOT_FOUND: &str = "User not found";
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const MODAL_SAVE_FAILED: &str = "Failed to save user";
    pub const DETAIL_SAVE_FAILED: &str = "Failed to save changes";
    pub const DETAIL_SAVED: &str = "Saved";
    pub const NO_USERS: &str = "No users found";
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}
