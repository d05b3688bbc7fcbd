//! Article types

use crate::{Id, UnknownVariant};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Initial version stored when a request leaves `version` out
pub const DEFAULT_ARTICLE_VERSION: i64 = 1;

/// Review state of an article.
///
/// Stored once at creation; nothing moves an article between states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [
        ArticleStatus::Pending,
        ArticleStatus::Approved,
        ArticleStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Pending => "pending",
            ArticleStatus::Approved => "approved",
            ArticleStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ArticleStatus::Pending),
            "approved" => Ok(ArticleStatus::Approved),
            "rejected" => Ok(ArticleStatus::Rejected),
            other => Err(UnknownVariant {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// An article submitted to a conference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: Id,
    pub author_id: Id,
    pub conference_id: Id,
    pub title: String,
    pub content: String,
    pub version: i64,
    pub status: ArticleStatus,
}

/// Article submission request.
///
/// `version` and `status` fall back to the store defaults when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub author_id: Id,
    pub conference_id: Id,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}
