//! Storage layer
//!
//! A single SQLite pool is the only source of truth; there is no cache.

pub mod db;

pub use db::Database;
