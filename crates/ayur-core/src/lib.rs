//! ayur-core
//!
//! Pure domain types and static reference tables. No I/O. This is the
//! shared vocabulary of the intake system: doshas, collected answers,
//! classification results, user records, and the per-dosha diet content.

pub mod error;
pub mod models;
pub mod reference;
