//! Shared bootstrap for unit and integration tests.

pub mod logging;
