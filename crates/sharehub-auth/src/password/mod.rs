//! Password hashing for collaborators that keep credentials of their own.
//!
//! The project access flow never calls into this module.

pub mod hasher;

pub use hasher::PasswordHasher;
