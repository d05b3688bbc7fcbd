//! User types

use crate::{Id, UnknownVariant};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role a user plays in the conference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Organizer,
    Author,
    Reviewer,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Organizer, UserType::Author, UserType::Reviewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Organizer => "organizer",
            UserType::Author => "author",
            UserType::Reviewer => "reviewer",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organizer" => Ok(UserType::Organizer),
            "author" => Ok(UserType::Author),
            "reviewer" => Ok(UserType::Reviewer),
            other => Err(UnknownVariant {
                kind: "user_type",
                value: other.to_string(),
            }),
        }
    }
}

/// A persisted user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    /// Unique across all users
    pub email: String,
    pub user_type: UserType,
}

/// User creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub user_type: UserType,
}
