//! Conference types

use crate::Id;
use serde::{Deserialize, Serialize};

/// A conference run by an organizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub id: Id,
    /// Refers to a user id; existence is not checked
    pub organizer_id: Id,
    pub name: String,
}

/// Conference creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConference {
    pub organizer_id: Id,
    pub name: String,
}
