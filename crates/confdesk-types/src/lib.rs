//! Confdesk Types - entity definitions for the conference store
//!
//! Pure data types shared by the persistence gateway and the HTTP router.
//! No async runtime dependencies.

pub mod article;
pub mod conference;
pub mod user;

pub use article::*;
pub use conference::*;
pub use user::*;

use thiserror::Error;

/// Primary key type for every table (SQLite `INTEGER PRIMARY KEY`)
pub type Id = i64;

/// An enum label read from text that names no known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
