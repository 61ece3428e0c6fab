//! Adapter implementations for todo ports.

pub mod memory;
