//! # Data Model
//!
//! [`User`] is the only entity. Its shape is validated at the network boundary: `id`,
//! `name` and `createdAt` must be present in every record the server returns, while
//! `avatar` is optional. Anything else the server sends along is kept in
//! [`User::extra`] so that an update can send back the full record it loaded.
//!
//! Ids come over the wire either as JSON strings or integers, depending on the
//! collaborator. Both decode into a string-backed [`UserId`].

use crate::error::RosterError;
use crate::screens::messages;
use chrono::{SecondsFormat, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RosterError::Api("User id cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(s) if s.trim().is_empty() => {
                Err(de::Error::custom("user id cannot be empty"))
            }
            RawId::Text(s) => Ok(Self(s)),
            RawId::Number(n) => Ok(Self(n.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub avatar: Option<String>,
    pub created_at: String,
    /// Fields the server returned that roster does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Copy of this record with the draft's name and avatar applied; everything else is kept.
    pub fn with_edits(&self, draft: &ValidDraft) -> Self {
        Self {
            name: draft.name.clone(),
            avatar: draft.avatar.clone(),
            ..self.clone()
        }
    }
}

/// Body of a create request. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    #[serde(serialize_with = "none_as_empty")]
    pub avatar: Option<String>,
    pub created_at: String,
}

impl NewUser {
    /// Stamps `created_at` with the current time.
    pub fn from_draft(draft: ValidDraft) -> Self {
        Self {
            name: draft.name,
            avatar: draft.avatar,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Form fields exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub avatar: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            avatar: user.avatar.clone().unwrap_or_default(),
        }
    }

    /// Applies whichever fields are given, leaving the others as typed.
    pub fn apply(&mut self, name: Option<String>, avatar: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
    }

    /// The name must be non-empty once trimmed. The avatar is taken as typed.
    pub fn validate(&self) -> crate::error::Result<ValidDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RosterError::Validation(messages::NAME_REQUIRED.to_string()));
        }
        let avatar = if self.avatar.is_empty() {
            None
        } else {
            Some(self.avatar.clone())
        };
        Ok(ValidDraft {
            name: name.to_string(),
            avatar,
        })
    }
}

/// A draft that passed validation; only [`UserDraft::validate`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    name: String,
    avatar: Option<String>,
}

impl ValidDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn none_as_empty<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}
