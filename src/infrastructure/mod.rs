//! Dispenser implementations: console output for the binary, recording for tests.

pub mod console;
pub mod in_memory;
