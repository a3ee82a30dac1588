//! Access strategy 1: injected port reference.
//!
//! The entity is paired with an explicit reference to the port instance that
//! hydrated it, and every persistence call goes through that reference. The
//! port stays in one place and is trivially replaceable, at the cost of the
//! booking facade also needing port access for the initial lookup.

use std::sync::Arc;

use crate::domain::{
    BookingError, BookingTime, BookingWindow, ConferenceRoom, RoomNumber, RoomRepository,
};

/// A conference room carrying the port reference that hydrated it.
pub struct ProvisionedRoom {
    room: ConferenceRoom,
    repository: Arc<dyn RoomRepository>,
}

impl ProvisionedRoom {
    /// Pair a room with the port it should persist through.
    pub fn new(room: ConferenceRoom, repository: Arc<dyn RoomRepository>) -> Self {
        Self { room, repository }
    }

    /// Book this room for the given window and persist the new state.
    ///
    /// Exactly one `save` call per invocation; the save happens through the
    /// injected reference.
    ///
    /// # Errors
    ///
    /// `BookingError::Repository` if the port cannot record the state.
    pub fn book_me(&mut self, window: BookingWindow) -> Result<(), BookingError> {
        self.room.book(window);
        self.repository.save(&self.room)?;
        Ok(())
    }

    /// The underlying entity.
    pub fn room(&self) -> &ConferenceRoom {
        &self.room
    }

    /// Unwrap into the underlying entity, dropping the port reference.
    pub fn into_room(self) -> ConferenceRoom {
        self.room
    }
}

/// Booking facade: pure orchestration, holds no state of its own beyond the
/// port reference.
pub struct BookingContext {
    repository: Arc<dyn RoomRepository>,
}

impl BookingContext {
    /// Create a new BookingContext over the given port.
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Book a room by number: look the entity up via the port, book it, and
    /// return the updated entity.
    ///
    /// # Errors
    ///
    /// * `BookingError::InvalidWindow` if the window fails the sanity check
    /// * `BookingError::Repository` on lookup or save failure
    pub fn book(
        &self,
        number: &RoomNumber,
        from: BookingTime,
        to: BookingTime,
    ) -> Result<ConferenceRoom, BookingError> {
        let window = BookingWindow::new(from, to)?;

        let room = self.repository.find_by_room_number(number).map_err(|e| {
            tracing::warn!("Lookup failed for room '{}': {}", number, e);
            e
        })?;

        let mut room = ProvisionedRoom::new(room, Arc::clone(&self.repository));
        room.book_me(window)?;

        tracing::info!(
            "Booked room '{}' for {}",
            number,
            room.room().window().expect("room was just booked"),
        );
        Ok(room.into_room())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockRoomRepository, RepositoryError};

    fn number(n: &str) -> RoomNumber {
        RoomNumber::new(n.to_string()).unwrap()
    }

    fn time(t: &str) -> BookingTime {
        BookingTime::new(t.to_string()).unwrap()
    }

    fn window(from: &str, to: &str) -> BookingWindow {
        BookingWindow::new(time(from), time(to)).unwrap()
    }

    #[test]
    fn test_book_me_updates_state_and_saves_once() {
        // given: an unbooked HALL1 whose port expects one save with the
        // updated state
        let mut repository = MockRoomRepository::new();
        repository
            .expect_save()
            .withf(|room: &ConferenceRoom| {
                room.number().as_str() == "HALL1"
                    && room.from().map(|t| t.as_str()) == Some("10AM")
                    && room.to().map(|t| t.as_str()) == Some("11AM")
            })
            .times(1)
            .returning(|_| Ok(()));

        let room = ConferenceRoom::new(number("HALL1"));
        let mut provisioned = ProvisionedRoom::new(room, Arc::new(repository));

        // when:
        let result = provisioned.book_me(window("10AM", "11AM"));

        // then:
        assert!(result.is_ok());
        assert_eq!(provisioned.room().from().unwrap().as_str(), "10AM");
        assert_eq!(provisioned.room().to().unwrap().as_str(), "11AM");
    }

    #[test]
    fn test_book_me_twice_saves_twice() {
        // given: identical bookings are not deduplicated
        let mut repository = MockRoomRepository::new();
        repository.expect_save().times(2).returning(|_| Ok(()));

        let room = ConferenceRoom::new(number("HALL1"));
        let mut provisioned = ProvisionedRoom::new(room, Arc::new(repository));

        // when:
        provisioned.book_me(window("10AM", "11AM")).unwrap();
        provisioned.book_me(window("10AM", "11AM")).unwrap();

        // then: final state unchanged by the repeat
        assert_eq!(provisioned.room().from().unwrap().as_str(), "10AM");
        assert_eq!(provisioned.room().to().unwrap().as_str(), "11AM");
    }

    #[test]
    fn test_book_me_propagates_storage_failure() {
        // given:
        let mut repository = MockRoomRepository::new();
        repository
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::StorageFailure("disk full".to_string())));

        let room = ConferenceRoom::new(number("HALL1"));
        let mut provisioned = ProvisionedRoom::new(room, Arc::new(repository));

        // when:
        let result = provisioned.book_me(window("10AM", "11AM"));

        // then:
        assert_eq!(
            result.unwrap_err(),
            BookingError::Repository(RepositoryError::StorageFailure("disk full".to_string()))
        );
    }

    #[test]
    fn test_context_book_looks_up_then_books() {
        // given: the port is stubbed to return a known entity and expects
        // exactly one save carrying the booked state
        let mut repository = MockRoomRepository::new();
        repository
            .expect_find_by_room_number()
            .withf(|n: &RoomNumber| n.as_str() == "HALL1")
            .times(1)
            .returning(|n| Ok(ConferenceRoom::new(n.clone())));
        repository
            .expect_save()
            .withf(|room: &ConferenceRoom| {
                room.from().map(|t| t.as_str()) == Some("10AM")
                    && room.to().map(|t| t.as_str()) == Some("11AM")
            })
            .times(1)
            .returning(|_| Ok(()));

        let context = BookingContext::new(Arc::new(repository));

        // when:
        let result = context.book(&number("HALL1"), time("10AM"), time("11AM"));

        // then:
        let room = result.unwrap();
        assert_eq!(room.number().as_str(), "HALL1");
        assert!(room.is_booked());
    }

    #[test]
    fn test_context_book_unknown_room_never_saves() {
        // given: lookup fails, so book_me must never be reached
        let mut repository = MockRoomRepository::new();
        repository
            .expect_find_by_room_number()
            .times(1)
            .returning(|n| Err(RepositoryError::NotFound(n.as_str().to_string())));
        repository.expect_save().times(0);

        let context = BookingContext::new(Arc::new(repository));

        // when:
        let result = context.book(&number("NOPE"), time("10AM"), time("11AM"));

        // then:
        assert_eq!(
            result.unwrap_err(),
            BookingError::Repository(RepositoryError::NotFound("NOPE".to_string()))
        );
    }

    #[test]
    fn test_context_book_invalid_window_never_touches_port() {
        // given: a degenerate window, port expects no calls at all
        let mut repository = MockRoomRepository::new();
        repository.expect_find_by_room_number().times(0);
        repository.expect_save().times(0);

        let context = BookingContext::new(Arc::new(repository));

        // when:
        let result = context.book(&number("HALL1"), time("10AM"), time("10AM"));

        // then:
        assert!(matches!(
            result.unwrap_err(),
            BookingError::InvalidWindow { .. }
        ));
    }
}
