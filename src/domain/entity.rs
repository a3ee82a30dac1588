//! Core domain model: the conference room.

use serde::{Deserialize, Serialize};

use super::value_object::{BookingTime, BookingWindow, RoomNumber};

/// A conference room with an optional booking window.
///
/// `window` being `None` means the room is unbooked; `Some` means booked.
/// The two bounds can never be set independently, so the "both set or both
/// unset" property holds by construction.
///
/// The entity is deliberately persistence-free: `book` is a pure state
/// transition, and how the new state reaches storage is decided by the
/// access strategies in the `usecase` layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceRoom {
    number: RoomNumber,
    window: Option<BookingWindow>,
}

impl ConferenceRoom {
    /// Create a new, unbooked room.
    pub fn new(number: RoomNumber) -> Self {
        Self {
            number,
            window: None,
        }
    }

    /// Hydration constructor: a room with a known booking window.
    ///
    /// Used by storage backends when rebuilding an entity from a record,
    /// and by tests when a booked fixture is needed.
    pub fn booked(number: RoomNumber, window: BookingWindow) -> Self {
        Self {
            number,
            window: Some(window),
        }
    }

    /// Room identifier, immutable for the lifetime of the entity.
    pub fn number(&self) -> &RoomNumber {
        &self.number
    }

    /// The current booking window, if any.
    pub fn window(&self) -> Option<&BookingWindow> {
        self.window.as_ref()
    }

    /// Start bound of the current booking, if booked.
    pub fn from(&self) -> Option<&BookingTime> {
        self.window.as_ref().map(BookingWindow::from)
    }

    /// End bound of the current booking, if booked.
    pub fn to(&self) -> Option<&BookingTime> {
        self.window.as_ref().map(BookingWindow::to)
    }

    /// Whether the room currently holds a booking.
    pub fn is_booked(&self) -> bool {
        self.window.is_some()
    }

    /// Set the booking window.
    ///
    /// Pure state transition Unbooked → Booked. Booking an already-booked
    /// room overwrites the previous window; conflict detection is not part
    /// of this model.
    pub fn book(&mut self, window: BookingWindow) {
        self.window = Some(window);
    }
}
