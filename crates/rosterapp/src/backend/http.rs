//! Blocking HTTP backend for the users REST collection.

use super::UserBackend;
use crate::error::{Result, RosterError};
use crate::model::{NewUser, User, UserId};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpBackend {
    http: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .user_agent(format!("roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn user_url(&self, id: &UserId) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RosterError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

impl UserBackend for HttpBackend {
    fn list_users(&self) -> Result<Vec<User>> {
        let url = self.base.clone();
        debug!(method = "GET", url = %url, "fetching users");
        let response = self.http.get(url).send()?;
        let users: Vec<User> = read_json(response)?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    fn get_user(&self, id: &UserId) -> Result<User> {
        let url = self.user_url(id)?;
        debug!(method = "GET", url = %url, "fetching user");
        let response = self.http.get(url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(id = %id, "user not found");
            return Err(RosterError::UserNotFound(id.to_string()));
        }
        read_json(response)
    }

    fn create_user(&self, user: &NewUser) -> Result<User> {
        let url = self.base.clone();
        debug!(method = "POST", url = %url, "creating user");
        let response = self.http.post(url).json(user).send()?;
        let created: User = read_json(response)?;
        info!(id = %created.id, name = %created.name, "user created");
        Ok(created)
    }

    fn update_user(&self, user: &User) -> Result<User> {
        let url = self.user_url(&user.id)?;
        debug!(method = "PUT", url = %url, "updating user");
        let response = self.http.put(url).json(user).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RosterError::UserNotFound(user.id.to_string()));
        }
        let updated: User = read_json(response)?;
        info!(id = %updated.id, "user updated");
        Ok(updated)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(RosterError::InvalidUrl("URL cannot be empty".into()));
    }
    let url = Url::parse(trimmed)
        .map_err(|e| RosterError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RosterError::InvalidUrl(format!(
            "URL must use http or https, got {}",
            other
        ))),
    }
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().unwrap_or_default();
        warn!(status = status.as_u16(), "request failed");
        return Err(RosterError::Server {
            status: status.as_u16(),
            message,
        });
    }
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}
