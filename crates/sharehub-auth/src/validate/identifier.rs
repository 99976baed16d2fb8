//! Identifier shape checks.

use sharehub_core::error::FieldError;
use sharehub_entity::project::SHARE_LINK_LEN;
use sharehub_store::traits::ProjectLookup;

/// Maximum owner id length.
pub const OWNER_ID_MAX_LEN: usize = 100;

/// Exactly 16 characters of `[A-Za-z0-9]`.
pub fn is_valid_share_link(value: &str) -> bool {
    value.len() == SHARE_LINK_LEN && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// 1 to 100 characters of `[A-Za-z0-9_-]`.
pub fn is_valid_owner_id(value: &str) -> bool {
    (1..=OWNER_ID_MAX_LEN).contains(&value.len())
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Checks a share link, naming the offending `field`.
pub fn check_share_link(field: &str, value: &str) -> Option<FieldError> {
    if value.len() != SHARE_LINK_LEN {
        return Some(FieldError::new(
            field,
            "length",
            format!("{field} must be exactly {SHARE_LINK_LEN} characters"),
        ));
    }
    if !is_valid_share_link(value) {
        return Some(FieldError::new(
            field,
            "charset",
            format!("{field} may only contain letters and digits"),
        ));
    }
    None
}

/// Checks an owner id, naming the offending `field`.
pub fn check_owner_id(field: &str, value: &str) -> Option<FieldError> {
    if !(1..=OWNER_ID_MAX_LEN).contains(&value.len()) {
        return Some(FieldError::new(
            field,
            "length",
            format!("{field} must be 1 to {OWNER_ID_MAX_LEN} characters"),
        ));
    }
    if !is_valid_owner_id(value) {
        return Some(FieldError::new(
            field,
            "charset",
            format!("{field} may only contain letters, digits, '_' and '-'"),
        ));
    }
    None
}

/// Checks a project id against the store's identifier format.
pub fn check_project_id(store: &dyn ProjectLookup, field: &str, value: &str) -> Option<FieldError> {
    if store.is_valid_id(value) {
        None
    } else {
        Some(FieldError::new(
            field,
            "format",
            format!("{field} is not a valid project identifier"),
        ))
    }
}
