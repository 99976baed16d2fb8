//! Route handlers organized by domain.

pub mod health;
pub mod projects;
pub mod tokens;
