//! Conference-room booking with pluggable persistence ports.
//!
//! This library models one small domain — a conference room whose booking
//! window can be set — and demonstrates four alternative designs for
//! decoupling that entity from its persistence mechanism. All four are
//! built on the same abstract port with two operations,
//! `find_by_room_number` and `save`, and differ only in how the entity
//! obtains a reference to the port:
//!
//! 1. [`usecase::injected`] — the entity holds an injected
//!    `Arc<dyn RoomRepository>`; a [`usecase::BookingContext`] facade
//!    orchestrates lookup and booking.
//! 2. [`usecase::appended`] — the port operations are appended to the
//!    entity type through an extension trait.
//! 3. [`usecase::mixin`] — a concrete port is statically composed into the
//!    entity type, which re-exposes the operations as its own.
//! 4. [`usecase::record`] — the port speaks flattened DTOs and the entity
//!    carries its own mapping.
//!
//! Layered like the rest of the family: `domain` owns the model and the
//! port traits, `usecase` owns the booking flows, `infrastructure` owns the
//! concrete backends.

pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use domain::{
    BookingError, BookingTime, BookingWindow, ConferenceRoom, RepositoryError, RoomNumber,
    RoomRecord, RoomRecordStore, RoomRepository, ValueObjectError,
};
pub use infrastructure::{InMemoryRecordStore, InMemoryRoomRepository};
pub use usecase::{BookingContext, ProvisionedRoom, RecordRoom, RoomPersistence, StorageBackedRoom};
