//! Persistent host storage contracts.

pub mod cookies;
