//! # dinedb common library
//!
//! Shared code for the dinedb query service:
//! - Error and result types
//! - Bootstrap configuration loading
//! - SQLite connection setup

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
