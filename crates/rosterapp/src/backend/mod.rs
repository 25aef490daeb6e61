//! # Remote Collaborator
//!
//! Users live in a REST collection owned by someone else. The [`UserBackend`] trait is the
//! seam between roster's logic and that collection:
//!
//! | Operation | Request | Response |
//! |---|---|---|
//! | [`UserBackend::list_users`] | `GET {base}` | array of users |
//! | [`UserBackend::get_user`] | `GET {base}/{id}` | one user, or not found |
//! | [`UserBackend::create_user`] | `POST {base}` with `{name, avatar, createdAt}` | created user |
//! | [`UserBackend::update_user`] | `PUT {base}/{id}` with the full record | saved user |
//!
//! ## Implementations
//!
//! - [`http::HttpBackend`]: production, blocking HTTP via `reqwest`
//! - [`memory::MemBackend`]: in-memory collection for tests, with call recording and
//!   failure simulation
//!
//! Backends never retry. A failed request fails the operation that issued it.

use crate::error::Result;
use crate::model::{NewUser, User, UserId};

pub mod http;
pub mod memory;

pub trait UserBackend {
    /// Fetch the whole collection
    fn list_users(&self) -> Result<Vec<User>>;

    /// Fetch one user. Unknown ids fail with `RosterError::UserNotFound`.
    fn get_user(&self, id: &UserId) -> Result<User>;

    /// Create a user; the returned record carries the server-assigned id
    fn create_user(&self, user: &NewUser) -> Result<User>;

    /// Replace a user with the given full record
    fn update_user(&self, user: &User) -> Result<User>;
}
