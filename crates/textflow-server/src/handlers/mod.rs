//! HTTP handlers for the TextFlow API.
//!
//! This module contains all route handlers organized by domain.

pub mod catalog;
pub mod health;
pub mod history;
pub mod run;
pub mod workflows;

pub use health::{api_health, health_check};
pub use run::run;
