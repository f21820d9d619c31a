//! Workspace-level integration tests for numalgo.
//!
//! The tests live under `tests/`; this crate exists only to host them.
