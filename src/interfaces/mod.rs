//! Adapters between the outside world and the machine: CSV scripts in, JSON
//! snapshots out.

pub mod csv;
pub mod json;
