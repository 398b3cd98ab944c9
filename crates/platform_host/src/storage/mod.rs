//! Key-value storage contracts.

pub mod settings;
