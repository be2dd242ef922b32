//! Common utilities shared by the workshop services.
//!
//! This crate provides:
//! - Unified HTTP error handling
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
