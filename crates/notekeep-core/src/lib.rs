//! # notekeep-core
//!
//! Core types, traits, and validation for the notekeep service.
//!
//! This crate provides the note model, the storage trait every backend
//! implements, and the validation pipeline that gates every write path.

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;
pub mod uuid_utils;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
pub use uuid_utils::new_v7;
pub use validation::{
    sanitize, validate_and_normalize, ValidationErrorKind, ValidationFailure, ValidationLimits,
};
