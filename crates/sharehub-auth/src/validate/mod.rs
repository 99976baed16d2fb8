//! Boundary validators.
//!
//! Cheap shape checks run before any store lookup. Checks return a
//! [`FieldError`](sharehub_core::FieldError) per offending field so callers
//! can report every problem at once.

pub mod identifier;
pub mod text;

pub use identifier::{
    OWNER_ID_MAX_LEN, check_owner_id, check_project_id, check_share_link, is_valid_owner_id,
    is_valid_share_link,
};
pub use text::{escape_html, sanitize_optional};
