//! Concrete implementations of the domain's persistence ports.
//!
//! Use cases depend on the traits defined in the domain layer, never on
//! these implementations directly (dependency inversion).

pub mod inmemory;

pub use inmemory::{InMemoryRecordStore, InMemoryRoomRepository};
