//! Booking use cases: four access strategies over the same ports.
//!
//! Each module is one self-contained answer to the same question — how does
//! the entity reach its persistence port? All four resolve the target room,
//! set the booking window, and issue exactly one `save`; they differ only in
//! where the port reference lives.

pub mod appended;
pub mod injected;
pub mod mixin;
pub mod record;

pub use appended::RoomPersistence;
pub use injected::{BookingContext, ProvisionedRoom};
pub use mixin::StorageBackedRoom;
pub use record::RecordRoom;
