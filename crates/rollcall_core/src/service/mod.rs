//! Use-case services over the roster model.
//!
//! # Responsibility
//! - Provide stable operation entry points for UI/CLI callers.
//! - Keep reporting semantics out of the model layer.

pub mod membership;
