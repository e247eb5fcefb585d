//! HTTP handlers for notekeep-api.

pub mod health;
pub mod notes;
