use super::UserBackend;
use crate::error::{Result, RosterError};
use crate::model::{NewUser, User, UserId};
use std::cell::{Cell, RefCell};

/// A request as seen by [`MemBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    List,
    Get(UserId),
    Create(String),
    Update(UserId),
}

/// In-memory user collection for testing.
///
/// Uses `Cell`/`RefCell` for interior mutability since roster is single-threaded, which
/// lets the `UserBackend` trait take `&self` everywhere. Every request is recorded before
/// it is served, failed or not, so tests can count requests.
pub struct MemBackend {
    users: RefCell<Vec<User>>,
    next_id: Cell<u64>,
    calls: RefCell<Vec<BackendCall>>,
    fail_requests: Cell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            users: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            calls: RefCell::new(Vec::new()),
            fail_requests: Cell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| u.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let backend = Self::default();
        backend.next_id.set(next_id);
        *backend.users.borrow_mut() = users;
        backend
    }

    /// A collection of `count` users named "User 1", "User 2", … with ids 1, 2, …
    pub fn seeded(count: u64) -> Self {
        let users = (1..=count)
            .map(|i| User {
                id: UserId::new(i.to_string()),
                name: format!("User {}", i),
                avatar: Some(format!("https://avatars.test/{}.png", i)),
                created_at: "2024-03-01T12:00:00.000Z".to_string(),
                extra: Default::default(),
            })
            .collect();
        Self::with_users(users)
    }

    /// Make every following request fail with a server error.
    pub fn set_fail_requests(&self, fail: bool) {
        self.fail_requests.set(fail);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    fn record(&self, call: BackendCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_requests.get() {
            return Err(RosterError::Server {
                status: 503,
                message: "Simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl UserBackend for MemBackend {
    fn list_users(&self) -> Result<Vec<User>> {
        self.record(BackendCall::List)?;
        Ok(self.users.borrow().clone())
    }

    fn get_user(&self, id: &UserId) -> Result<User> {
        self.record(BackendCall::Get(id.clone()))?;
        self.users
            .borrow()
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| RosterError::UserNotFound(id.to_string()))
    }

    fn create_user(&self, user: &NewUser) -> Result<User> {
        self.record(BackendCall::Create(user.name.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let created = User {
            id: UserId::new(id.to_string()),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            created_at: user.created_at.clone(),
            extra: Default::default(),
        };
        self.users.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_user(&self, user: &User) -> Result<User> {
        self.record(BackendCall::Update(user.id.clone()))?;
        let mut users = self.users.borrow_mut();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| RosterError::UserNotFound(user.id.to_string()))?;
        *slot = user.clone();
        Ok(user.clone())
    }
}
