//! ayur-export
//!
//! Plain-text diet plan and assessment report generation from Tera
//! templates. Output depends only on the inputs, so identical inputs give
//! identical bytes.

pub mod diet_plan;
pub mod error;
pub mod render;
pub mod report;

/// Closing disclaimer shared by every export.
pub const DISCLAIMER: &str = "DISCLAIMER: This plan is based on Ayurvedic principles. Please consult with a qualified healthcare practitioner before making significant dietary changes.";
