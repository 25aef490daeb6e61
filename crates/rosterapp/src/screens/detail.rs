//! # Detail Screen
//!
//! One user's profile plus an inline name/avatar form, keyed by the identifier taken from
//! the navigation path. The screen loads again whenever that identifier changes, when the
//! last load failed, and after [`DetailScreen::leave`] has been called.
//!
//! ```text
//! set_target(id) ──▶ Loading ──finish_load(Ok)──────────────▶ Ready(user)
//!                       ├──────finish_load(Err(not found))──▶ Error("User not found")
//!                       └──────finish_load(Err(_))──────────▶ Error("Failed to load user")
//! ```
//!
//! Saving builds on top of `Ready`: the full loaded record is sent with name and avatar
//! replaced, and the record the server returns becomes the displayed truth.

use super::messages;
use super::LoadState;
use crate::error::{Result, RosterError};
use crate::model::{User, UserDraft, UserId};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct DetailScreen {
    target: Option<UserId>,
    state: LoadState<User>,
    draft: UserDraft,
    saving: bool,
    save_error: Option<String>,
    saved: bool,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&UserId> {
        self.target.as_ref()
    }

    pub fn state(&self) -> &LoadState<User> {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.ready()
    }

    /// Points the screen at `id`. Returns `true` when a fetch is needed: the identifier
    /// changed, or the previous load for it failed.
    pub fn set_target(&mut self, id: UserId) -> bool {
        let failed = self.state.error().is_some();
        if self.target.as_ref() == Some(&id) && !failed {
            return false;
        }
        debug!(id = %id, "detail screen loading");
        self.target = Some(id);
        self.state = LoadState::Loading;
        self.draft = UserDraft::default();
        self.saving = false;
        self.save_error = None;
        self.saved = false;
        true
    }

    /// Navigating away. The next `set_target` fetches again, even for the same id.
    pub fn leave(&mut self) {
        if let Some(id) = self.target.take() {
            debug!(id = %id, "left detail screen");
        }
        self.state = LoadState::Idle;
        self.draft = UserDraft::default();
        self.saving = false;
        self.save_error = None;
        self.saved = false;
    }

    pub fn finish_load(&mut self, id: &UserId, result: Result<User>) {
        if self.target.as_ref() != Some(id) {
            debug!(id = %id, "discarding result for a previous target");
            return;
        }
        self.state = match result {
            Ok(user) => {
                self.draft = UserDraft::from_user(&user);
                LoadState::Ready(user)
            }
            Err(RosterError::UserNotFound(_)) => {
                LoadState::Error(messages::USER_NOT_FOUND.to_string())
            }
            Err(e) => {
                warn!(id = %id, error = %e, "failed to load user");
                LoadState::Error(messages::USER_LOAD_FAILED.to_string())
            }
        };
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn edit(&mut self, name: Option<String>, avatar: Option<String>) {
        self.draft.apply(name, avatar);
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// Whether the last save succeeded; cleared when the next save starts.
    pub fn saved(&self) -> bool {
        self.saved
    }

    /// Where the back link of this screen leads. Always available, errors included.
    pub fn back_to_list(&self) -> &'static str {
        "/users"
    }

    /// Validates the form and marks the screen as saving.
    ///
    /// Returns the record to send, or `Ok(None)` when validation failed and the inline
    /// error was set instead.
    pub fn begin_save(&mut self) -> Result<Option<User>> {
        if self.saving {
            return Err(RosterError::SaveInProgress);
        }
        let user = self
            .state
            .ready()
            .ok_or_else(|| RosterError::Api("No user is loaded".to_string()))?;

        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                debug!(error = %e, "save rejected");
                self.save_error = Some(messages::NAME_REQUIRED.to_string());
                return Ok(None);
            }
        };

        let payload = user.with_edits(&valid);
        self.saving = true;
        self.save_error = None;
        self.saved = false;
        Ok(Some(payload))
    }

    /// Settles a save of `id`. A result for anything but the current target is dropped.
    pub fn finish_save(&mut self, id: &UserId, result: Result<User>) {
        if self.target.as_ref() != Some(id) {
            debug!(id = %id, "discarding save result for a previous target");
            return;
        }
        self.saving = false;
        match result {
            Ok(user) => {
                self.state = LoadState::Ready(user);
                self.saved = true;
            }
            Err(e) => {
                warn!(error = %e, "failed to save user");
                self.save_error = Some(messages::DETAIL_SAVE_FAILED.to_string());
            }
        }
    }
}
