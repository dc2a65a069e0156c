//! File-backed storage for configuration inputs.

pub mod secret_storage;
