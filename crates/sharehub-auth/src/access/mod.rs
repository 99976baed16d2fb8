//! Project access control.
//!
//! [`evaluator::evaluate`] is the pure decision core. [`AccessGate`] wraps it
//! with identifier validation, token verification and the store lookup, and
//! exposes the three request checks used by the HTTP layer.

pub mod decision;
pub mod evaluator;
pub mod gate;
pub mod identity;

pub use decision::{AccessDecision, DenyReason, ProjectAccess};
pub use evaluator::{AccessPolicy, ClaimedIdentity, evaluate};
pub use gate::AccessGate;
pub use identity::RequestIdentifiers;
