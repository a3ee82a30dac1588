//! Access strategy 2: port operations appended to the entity type.
//!
//! The entity type itself exposes `find_by_room_number` and `save_to` as
//! part of its own interface, gained after the fact through an extension
//! trait. Booking operations come for free as default methods built on the
//! two port operations. The port is an explicit argument rather than a
//! statically known global, so swapping backends stays a call-site decision.
//!
//! The trade-off: persistence methods now live on the domain type, and other
//! parts of an application reaching for them go through the entity instead
//! of a repository they can see.

use crate::domain::{
    BookingError, BookingTime, BookingWindow, ConferenceRoom, RepositoryError, RoomNumber,
    RoomRepository,
};

/// Port operations exposed on the entity type itself.
///
/// `ConferenceRoom` already has an inherent `book` method (the pure state
/// change), so the class-level entry here is reached with fully qualified
/// syntax: `<ConferenceRoom as RoomPersistence>::book(..)`.
pub trait RoomPersistence: Sized {
    /// Resolve a room number to a hydrated entity through `repository`.
    fn find_by_room_number(
        repository: &dyn RoomRepository,
        number: &RoomNumber,
    ) -> Result<Self, RepositoryError>;

    /// Persist the current state through `repository`.
    fn save_to(&self, repository: &dyn RoomRepository) -> Result<(), RepositoryError>;

    /// Book this room for the given window, then persist. One save per call.
    fn book_me(
        &mut self,
        repository: &dyn RoomRepository,
        window: BookingWindow,
    ) -> Result<(), BookingError>;

    /// Class-level entry: look the room up by number, book it, and return
    /// the updated entity.
    fn book(
        repository: &dyn RoomRepository,
        number: &RoomNumber,
        from: BookingTime,
        to: BookingTime,
    ) -> Result<Self, BookingError> {
        let window = BookingWindow::new(from, to)?;
        let mut room = Self::find_by_room_number(repository, number)?;
        room.book_me(repository, window)?;
        Ok(room)
    }
}

impl RoomPersistence for ConferenceRoom {
    fn find_by_room_number(
        repository: &dyn RoomRepository,
        number: &RoomNumber,
    ) -> Result<Self, RepositoryError> {
        repository.find_by_room_number(number)
    }

    fn save_to(&self, repository: &dyn RoomRepository) -> Result<(), RepositoryError> {
        repository.save(self)
    }

    fn book_me(
        &mut self,
        repository: &dyn RoomRepository,
        window: BookingWindow,
    ) -> Result<(), BookingError> {
        self.book(window);
        self.save_to(repository)?;
        Ok(())
    }
}
