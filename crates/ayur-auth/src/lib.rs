//! ayur-auth
//!
//! In-memory credential store: login against a seeded user list and
//! self-registration.

pub mod error;
pub mod store;
