//! Adapter implementations of the persistence ports.

pub mod memory;
