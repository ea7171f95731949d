//! # pkgwatch-core
//!
//! Core crate for pkgwatch. Contains configuration schemas, the host
//! package-event model, shared value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other pkgwatch crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
