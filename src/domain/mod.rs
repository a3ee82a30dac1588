//! Domain layer for the conference-room booking model.
//!
//! This module contains business logic that is independent of
//! storage backends and infrastructure concerns. The persistence ports
//! are defined here and implemented by the `infrastructure` layer.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::ConferenceRoom;
pub use error::{BookingError, RepositoryError, ValueObjectError};
pub use repository::{RoomRecord, RoomRecordStore, RoomRepository};
pub use value_object::{BookingTime, BookingWindow, RoomNumber};

#[cfg(test)]
pub use repository::{MockRoomRecordStore, MockRoomRepository};
