//! Access strategy 4: DTO round-trip.
//!
//! The port speaks only flattened [`RoomRecord`]s, so the entity carries the
//! serialize/deserialize responsibility itself (the `From`/`TryFrom`
//! mappings defined next to the record). The rest of an application only
//! ever sees the entity; the record vocabulary stays between the entity and
//! its store.
//!
//! The trade-off: the domain type must know how to flatten itself, and every
//! save pays the mapping cost.

use std::sync::Arc;

use crate::domain::{
    BookingError, BookingWindow, ConferenceRoom, RepositoryError, RoomNumber, RoomRecord,
    RoomRecordStore,
};

/// A conference room persisted through a flattened-record store.
pub struct RecordRoom {
    room: ConferenceRoom,
    store: Arc<dyn RoomRecordStore>,
}

impl RecordRoom {
    /// Pair an already-hydrated entity with its record store.
    pub fn new(room: ConferenceRoom, store: Arc<dyn RoomRecordStore>) -> Self {
        Self { room, store }
    }

    /// Look a room up by number: fetch its record and deserialize it into
    /// the entity.
    ///
    /// # Errors
    ///
    /// * `RepositoryError::NotFound` if no record exists for `number`
    /// * `RepositoryError::StorageFailure` if the record cannot be mapped
    ///   back into a valid entity
    pub fn find_by_room_number(
        store: Arc<dyn RoomRecordStore>,
        number: &RoomNumber,
    ) -> Result<Self, RepositoryError> {
        let record = store.find_by_room_number(number.as_str())?;
        let room = ConferenceRoom::try_from(record)?;
        Ok(Self { room, store })
    }

    /// Book this room for the given window, then save the flattened record.
    /// One save per call, carrying `number`, `from`, and `to`.
    ///
    /// # Errors
    ///
    /// `BookingError::Repository` if the store cannot record the state.
    pub fn book_me(&mut self, window: BookingWindow) -> Result<(), BookingError> {
        self.room.book(window);
        self.store.save(RoomRecord::from(&self.room))?;
        Ok(())
    }

    /// The underlying entity.
    pub fn room(&self) -> &ConferenceRoom {
        &self.room
    }

    /// Unwrap into the underlying entity, dropping the store reference.
    pub fn into_room(self) -> ConferenceRoom {
        self.room
    }
}
