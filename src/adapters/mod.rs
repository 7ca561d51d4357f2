//! Adapters - Concrete implementations of the ports.

pub mod export;
pub mod store;
