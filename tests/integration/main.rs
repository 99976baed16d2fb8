//! HTTP-level integration tests driving the full Axum app in memory.

mod access_test;
mod helpers;
mod project_test;
mod token_test;
