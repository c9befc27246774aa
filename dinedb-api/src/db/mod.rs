//! Query layer for the restaurant and dish tables
//!
//! Every user-supplied value is passed through `.bind()`; no query text is
//! assembled from request input.

pub mod dishes;
pub mod restaurants;
mod rows;

pub use rows::row_to_object;
