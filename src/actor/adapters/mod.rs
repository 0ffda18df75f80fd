//! Adapter implementations for actor ports.

pub mod memory;
