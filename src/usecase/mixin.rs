//! Access strategy 3: port capability mixed into the entity type.
//!
//! The entity type declares the port's capability set through static
//! composition: a concrete port is a field, and the composed type implements
//! [`RoomRepository`] itself by delegation, so the operations read as if
//! native. Dispatch is monomorphized over `R`, the static-binding contrast
//! to the `Arc<dyn RoomRepository>` of the injected strategy.
//!
//! The trade-off the composition keeps visible: the domain-facing type names
//! its backend in its own signature, so swapping persistence changes the
//! type, not just a constructor argument.

use crate::domain::{
    BookingError, BookingTime, BookingWindow, ConferenceRoom, RepositoryError, RoomNumber,
    RoomRepository,
};

/// A conference room statically bound to its storage backend.
#[derive(Debug)]
pub struct StorageBackedRoom<R: RoomRepository> {
    room: ConferenceRoom,
    repository: R,
}

impl<R: RoomRepository> StorageBackedRoom<R> {
    /// Compose an entity with its backend.
    pub fn new(room: ConferenceRoom, repository: R) -> Self {
        Self { room, repository }
    }

    /// Class-level entry: look the room up by number on `repository`, book
    /// it, and return the backed room holding the updated entity.
    pub fn book(
        repository: R,
        number: &RoomNumber,
        from: BookingTime,
        to: BookingTime,
    ) -> Result<Self, BookingError> {
        let window = BookingWindow::new(from, to)?;
        let room = repository.find_by_room_number(number)?;
        let mut backed = Self::new(room, repository);
        backed.book_me(window)?;
        Ok(backed)
    }

    /// Book this room for the given window, then persist through the
    /// composed port. One save per call.
    pub fn book_me(&mut self, window: BookingWindow) -> Result<(), BookingError> {
        self.room.book(window);
        self.repository.save(&self.room)?;
        Ok(())
    }

    /// The underlying entity.
    pub fn room(&self) -> &ConferenceRoom {
        &self.room
    }

    /// Unwrap into the underlying entity, dropping the backend.
    pub fn into_room(self) -> ConferenceRoom {
        self.room
    }
}

/// The composed type exposes the port operations as its own.
impl<R: RoomRepository> RoomRepository for StorageBackedRoom<R> {
    fn find_by_room_number(
        &self,
        number: &RoomNumber,
    ) -> Result<ConferenceRoom, RepositoryError> {
        self.repository.find_by_room_number(number)
    }

    fn save(&self, room: &ConferenceRoom) -> Result<(), RepositoryError> {
        self.repository.save(room)
    }
}
