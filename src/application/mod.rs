//! Application layer: the vending machine itself and the engine that replays
//! scripted events against it.
//!
//! `VendingMachine` owns all state for one machine. Nothing is global, so tests
//! and callers can run as many independent machines as they like.

pub mod engine;
pub mod machine;
