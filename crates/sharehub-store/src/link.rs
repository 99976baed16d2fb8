//! Share link generation.

use rand::distr::{Alphanumeric, SampleString};

use sharehub_entity::project::SHARE_LINK_LEN;

/// Generates a random 16-character alphanumeric share link.
pub fn generate_share_link() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), SHARE_LINK_LEN)
}
