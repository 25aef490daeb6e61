//! # List Screen
//!
//! Holds every user fetched by one "list all" request, the pager over them, and the
//! create/edit form.
//!
//! ```text
//! Idle ──begin_load──▶ Loading ──finish_load(Ok)──▶ Ready(users)
//!                         └─────finish_load(Err)──▶ Error("Failed to load users")
//! ```
//!
//! ## The Form
//!
//! The form (a modal in graphical clients) is either associated with an existing record
//! ([`ModalMode::Edit`]) or not ([`ModalMode::Create`]). A successful submit reconciles the
//! in-memory list with the record the server returned and closes the form: edits replace
//! the matching record in place, creations are prepended. A failed submit keeps the form
//! open with the typed values, so the user can retry.
//!
//! While a submit is in flight the form stays open as it is. It cannot be submitted again.

use super::messages;
use super::LoadState;
use crate::error::{Result, RosterError};
use crate::model::{NewUser, User, UserDraft, UserId};
use crate::pagination::{PageItem, PageNav, Pager};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Create,
    Edit(User),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserModal {
    mode: ModalMode,
    draft: UserDraft,
    saving: bool,
    error: Option<String>,
}

impl UserModal {
    fn new(mode: ModalMode, draft: UserDraft) -> Self {
        Self {
            mode,
            draft,
            saving: false,
            error: None,
        }
    }

    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    /// The record this form edits, if any.
    pub fn editing(&self) -> Option<&User> {
        match &self.mode {
            ModalMode::Edit(user) => Some(user),
            ModalMode::Create => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Create user",
            ModalMode::Edit(_) => "Edit user",
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// What a submit asks the remote collaborator to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(NewUser),
    Update(User),
}

#[derive(Debug, Default)]
pub struct ListScreen {
    state: LoadState<Vec<User>>,
    pager: Pager,
    modal: Option<UserModal>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<User>> {
        &self.state
    }

    /// All loaded users; empty unless the screen is ready.
    pub fn users(&self) -> &[User] {
        self.state.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn begin_load(&mut self) {
        debug!("list screen loading");
        self.state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<User>>) {
        match result {
            Ok(users) => {
                debug!(count = users.len(), "list screen ready");
                self.pager.set_count(users.len());
                self.state = LoadState::Ready(users);
            }
            Err(e) => {
                warn!(error = %e, "failed to load users");
                self.pager.set_count(0);
                self.state = LoadState::Error(messages::LIST_LOAD_FAILED.to_string());
            }
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn navigate(&mut self, nav: PageNav) -> bool {
        self.pager.navigate(nav)
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        self.pager.window()
    }

    /// The rows on the current page.
    pub fn visible_users(&self) -> &[User] {
        let users = self.users();
        &users[self.pager.range(users.len())]
    }

    pub fn modal(&self) -> Option<&UserModal> {
        self.modal.as_ref()
    }

    /// Opens an empty form. Refused while a submit is in flight.
    pub fn open_create(&mut self) -> Result<()> {
        self.ensure_not_saving()?;
        self.modal = Some(UserModal::new(ModalMode::Create, UserDraft::default()));
        Ok(())
    }

    /// Opens the form prefilled with the loaded record `id`. Refused while a submit is
    /// in flight.
    pub fn open_edit(&mut self, id: &UserId) -> Result<()> {
        self.ensure_not_saving()?;
        let user = self
            .users()
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| RosterError::UserNotFound(id.to_string()))?;
        let draft = UserDraft::from_user(&user);
        self.modal = Some(UserModal::new(ModalMode::Edit(user), draft));
        Ok(())
    }

    pub fn edit_form(&mut self, name: Option<String>, avatar: Option<String>) -> Result<()> {
        let modal = self.modal_mut()?;
        modal.draft.apply(name, avatar);
        Ok(())
    }

    /// Cancel or backdrop dismissal. Refused while a submit is in flight.
    pub fn close_modal(&mut self) -> bool {
        match &self.modal {
            Some(modal) if modal.saving => false,
            _ => {
                self.modal = None;
                true
            }
        }
    }

    /// Validates the form and marks it as saving.
    ///
    /// Returns `Ok(None)` when validation failed; the form then carries the inline error
    /// and nothing must be sent.
    pub fn begin_submit(&mut self) -> Result<Option<Submission>> {
        let modal = self.modal_mut()?;
        if modal.saving {
            return Err(RosterError::SaveInProgress);
        }

        let valid = match modal.draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                debug!(error = %e, "form rejected");
                modal.error = Some(messages::NAME_REQUIRED.to_string());
                return Ok(None);
            }
        };

        modal.saving = true;
        modal.error = None;
        let submission = match &modal.mode {
            ModalMode::Edit(user) => Submission::Update(user.with_edits(&valid)),
            ModalMode::Create => Submission::Create(NewUser::from_draft(valid)),
        };
        Ok(Some(submission))
    }

    pub fn finish_submit(&mut self, result: Result<User>) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        let saved = match result {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "failed to save user");
                modal.saving = false;
                modal.error = Some(messages::MODAL_SAVE_FAILED.to_string());
                return;
            }
        };

        let editing = matches!(modal.mode, ModalMode::Edit(_));
        if let Some(users) = self.state.ready_mut() {
            if editing {
                for user in users.iter_mut().filter(|u| u.id == saved.id) {
                    *user = saved.clone();
                }
            } else {
                users.insert(0, saved);
            }
            self.pager.set_count(users.len());
        }
        self.modal = None;
    }

    fn ensure_not_saving(&self) -> Result<()> {
        match &self.modal {
            Some(modal) if modal.saving => Err(RosterError::SaveInProgress),
            _ => Ok(()),
        }
    }

    fn modal_mut(&mut self) -> Result<&mut UserModal> {
        self.modal
            .as_mut()
            .ok_or_else(|| RosterError::Api("No user form is open".to_string()))
    }
}
