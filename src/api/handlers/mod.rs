//! HTTP request handlers.

pub mod employees;
pub mod health;
