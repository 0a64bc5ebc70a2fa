//! Browser persistence adapters.

pub mod cookies;
