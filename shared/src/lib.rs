//! Shared types for the Garden Weather Advisor service
//!
//! This crate contains the request, response, and weather models plus the
//! field-presence validation rules, kept free of HTTP and runtime
//! dependencies so they can be tested in isolation.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
