//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry point
//! for roster operations, whatever UI is driving them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the backend and one instance of each screen
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw identifier text → [`UserId`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and never formats anything for display. Screens are exposed
//! read-only so a UI can render them after each call.
//!
//! ## Generic Over UserBackend
//!
//! `RosterApi<B: UserBackend>` is generic over the remote collaborator:
//! - Production: `RosterApi<HttpBackend>`
//! - Testing: `RosterApi<MemBackend>`

use crate::backend::UserBackend;
use crate::commands;
use crate::error::Result;
use crate::model::UserId;
use crate::screens::{DetailScreen, ListScreen};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::pagination::PageNav;

pub struct RosterApi<B: UserBackend> {
    backend: B,
    list: ListScreen,
    detail: DetailScreen,
}

impl<B: UserBackend> RosterApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            list: ListScreen::new(),
            detail: DetailScreen::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn list_screen(&self) -> &ListScreen {
        &self.list
    }

    pub fn detail_screen(&self) -> &DetailScreen {
        &self.detail
    }

    /// Navigates to the list: leaves the detail screen and fetches the whole collection.
    pub fn load_users(&mut self) -> Result<CmdResult> {
        self.detail.leave();
        commands::list::run(&self.backend, &mut self.list)
    }

    /// Moves the list screen to another page. Purely local.
    pub fn navigate(&mut self, nav: PageNav) -> bool {
        self.list.navigate(nav)
    }

    pub fn open_create(&mut self) -> Result<()> {
        self.list.open_create()
    }

    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let id: UserId = id.parse()?;
        self.list.open_edit(&id)
    }

    pub fn fill_form(&mut self, name: Option<String>, avatar: Option<String>) -> Result<()> {
        self.list.edit_form(name, avatar)
    }

    pub fn submit_form(&mut self) -> Result<CmdResult> {
        commands::submit::run(&self.backend, &mut self.list)
    }

    /// Dismisses the form. Returns `false` while a submission is in flight.
    pub fn close_form(&mut self) -> bool {
        self.list.close_modal()
    }

    pub fn show_user(&mut self, id: &str) -> Result<CmdResult> {
        let id: UserId = id.parse()?;
        commands::view::run(&self.backend, &mut self.detail, id)
    }

    pub fn edit_details(&mut self, name: Option<String>, avatar: Option<String>) {
        self.detail.edit(name, avatar);
    }

    pub fn save_details(&mut self) -> Result<CmdResult> {
        commands::save::run(&self.backend, &mut self.detail)
    }
}
