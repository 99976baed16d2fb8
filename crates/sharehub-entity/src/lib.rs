//! # sharehub-entity
//!
//! Domain entity models for ShareHub. Every struct in this crate is either
//! a stored record or a domain value object; all derive `Debug`, `Clone`,
//! `Serialize` and `Deserialize`.

pub mod project;
