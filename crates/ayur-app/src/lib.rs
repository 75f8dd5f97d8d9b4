//! ayur-app
//!
//! Intake controller, configuration and notifications behind the
//! `ayur-intake` binary.

pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod replay;
