//! Project entity, its mutation payloads, and access classification.

pub mod mode;
pub mod model;

pub use mode::AccessMode;
pub use model::{CreateProject, Project, SHARE_LINK_LEN, UpdateProject};
