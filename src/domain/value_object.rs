//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{BookingError, ValueObjectError};

/// Room number value object.
///
/// Represents the stable identifier of a conference room (e.g. `"HALL1"`).
/// Assigned at creation, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Create a new RoomNumber.
    ///
    /// # Arguments
    ///
    /// * `number` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomNumber or an error if validation fails
    pub fn new(number: String) -> Result<Self, ValueObjectError> {
        if number.is_empty() {
            return Err(ValueObjectError::RoomNumberEmpty);
        }
        let len = number.len();
        if len > 100 {
            return Err(ValueObjectError::RoomNumberTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(number))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booking time value object.
///
/// One bound of a booking window (e.g. `"10AM"`). Bounds are opaque labels;
/// no clock format is imposed on callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingTime(String);

impl BookingTime {
    /// Create a new BookingTime.
    ///
    /// # Arguments
    ///
    /// * `time` - The booking time label
    ///
    /// # Returns
    ///
    /// A Result containing the BookingTime or an error if validation fails
    pub fn new(time: String) -> Result<Self, ValueObjectError> {
        if time.is_empty() {
            return Err(ValueObjectError::BookingTimeEmpty);
        }
        let len = time.len();
        if len > 100 {
            return Err(ValueObjectError::BookingTimeTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(time))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A booked window: both bounds set, or the room is not booked at all.
///
/// Because bounds are opaque labels, ordering between `from` and `to` cannot
/// be checked; the constructor only rejects a degenerate window where both
/// bounds are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    from: BookingTime,
    to: BookingTime,
}

impl BookingWindow {
    /// Create a new BookingWindow.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidWindow` if `from` equals `to`.
    pub fn new(from: BookingTime, to: BookingTime) -> Result<Self, BookingError> {
        if from == to {
            return Err(BookingError::InvalidWindow {
                from: from.into_string(),
                to: to.into_string(),
            });
        }
        Ok(Self { from, to })
    }

    /// Start bound of the window.
    pub fn from(&self) -> &BookingTime {
        &self.from
    }

    /// End bound of the window.
    pub fn to(&self) -> &BookingTime {
        &self.to
    }
}

impl fmt::Display for BookingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from, self.to)
    }
}
