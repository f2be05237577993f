//! Outbound adapters implementing domain ports.

pub mod in_memory;
pub mod persistence;
