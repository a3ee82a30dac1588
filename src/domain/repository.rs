//! Persistence ports for the conference-room domain.
//!
//! The domain layer owns these traits; concrete backends live in the
//! `infrastructure` layer and implement them (dependency inversion). Two
//! ports exist because the access strategies split along this line:
//!
//! - [`RoomRepository`] speaks the domain entity directly (strategies 1-3).
//! - [`RoomRecordStore`] speaks only the flattened [`RoomRecord`] DTO, and
//!   the entity owns the mapping to and from it (strategy 4).
//!
//! Both ports are synchronous: a booking is a blocking call chain that
//! completes or fails before control returns to the caller.

use serde::{Deserialize, Serialize};

use super::{
    entity::ConferenceRoom,
    error::RepositoryError,
    value_object::{BookingTime, BookingWindow, RoomNumber},
};

/// Persistence port speaking the domain entity.
///
/// `find_by_room_number` hydrates an entity from storage; `save` records the
/// entity's current state. The port never owns entities, it only reads and
/// writes their state on demand.
#[cfg_attr(test, mockall::automock)]
pub trait RoomRepository: Send + Sync {
    /// Resolve a room number to a hydrated entity.
    ///
    /// # Errors
    ///
    /// `RepositoryError::NotFound` if no record exists for `number`.
    fn find_by_room_number(&self, number: &RoomNumber)
    -> Result<ConferenceRoom, RepositoryError>;

    /// Record the entity's current state.
    ///
    /// # Errors
    ///
    /// `RepositoryError::StorageFailure` if the backend cannot record it.
    fn save(&self, room: &ConferenceRoom) -> Result<(), RepositoryError>;
}

/// Flattened representation of a room, the only vocabulary of
/// [`RoomRecordStore`].
///
/// `from` and `to` are either both `Some` (booked) or both `None` (unbooked);
/// a mixed record is rejected when mapped back into the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub number: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Persistence port speaking only flattened records.
///
/// The entity is responsible for its own mapping to and from [`RoomRecord`];
/// the store knows nothing about the domain model.
#[cfg_attr(test, mockall::automock)]
pub trait RoomRecordStore: Send + Sync {
    /// Fetch the flattened record for a room number.
    ///
    /// # Errors
    ///
    /// `RepositoryError::NotFound` if no record exists for `number`.
    fn find_by_room_number(&self, number: &str) -> Result<RoomRecord, RepositoryError>;

    /// Record the flattened state.
    ///
    /// # Errors
    ///
    /// `RepositoryError::StorageFailure` if the backend cannot record it.
    fn save(&self, record: RoomRecord) -> Result<(), RepositoryError>;
}

impl From<&ConferenceRoom> for RoomRecord {
    fn from(room: &ConferenceRoom) -> Self {
        Self {
            number: room.number().as_str().to_string(),
            from: room.from().map(|t| t.as_str().to_string()),
            to: room.to().map(|t| t.as_str().to_string()),
        }
    }
}

impl TryFrom<RoomRecord> for ConferenceRoom {
    type Error = RepositoryError;

    fn try_from(record: RoomRecord) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| RepositoryError::StorageFailure(reason);

        let number = RoomNumber::new(record.number)
            .map_err(|e| corrupt(format!("invalid room number in record: {e}")))?;

        match (record.from, record.to) {
            (None, None) => Ok(ConferenceRoom::new(number)),
            (Some(from), Some(to)) => {
                let from = BookingTime::new(from)
                    .map_err(|e| corrupt(format!("invalid 'from' in record: {e}")))?;
                let to = BookingTime::new(to)
                    .map_err(|e| corrupt(format!("invalid 'to' in record: {e}")))?;
                let window = BookingWindow::new(from, to)
                    .map_err(|e| corrupt(format!("invalid window in record: {e}")))?;
                Ok(ConferenceRoom::booked(number, window))
            }
            _ => Err(corrupt(
                "record has exactly one of 'from'/'to' set".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booked_room() -> ConferenceRoom {
        let number = RoomNumber::new("HALL1".to_string()).unwrap();
        let window = BookingWindow::new(
            BookingTime::new("10AM".to_string()).unwrap(),
            BookingTime::new("11AM".to_string()).unwrap(),
        )
        .unwrap();
        ConferenceRoom::booked(number, window)
    }

    #[test]
    fn test_record_from_booked_room() {
        // given:
        let room = booked_room();

        // when:
        let record = RoomRecord::from(&room);

        // then:
        assert_eq!(record.number, "HALL1");
        assert_eq!(record.from.as_deref(), Some("10AM"));
        assert_eq!(record.to.as_deref(), Some("11AM"));
    }

    #[test]
    fn test_record_from_unbooked_room() {
        // given:
        let number = RoomNumber::new("HALL2".to_string()).unwrap();
        let room = ConferenceRoom::new(number);

        // when:
        let record = RoomRecord::from(&room);

        // then:
        assert_eq!(record.number, "HALL2");
        assert!(record.from.is_none());
        assert!(record.to.is_none());
    }

    #[test]
    fn test_room_from_record_round_trip() {
        // given:
        let record = RoomRecord::from(&booked_room());

        // when:
        let room = ConferenceRoom::try_from(record).unwrap();

        // then:
        assert_eq!(room, booked_room());
    }

    #[test]
    fn test_room_from_half_set_record_fails() {
        // given: a record violating the both-or-neither property
        let record = RoomRecord {
            number: "HALL1".to_string(),
            from: Some("10AM".to_string()),
            to: None,
        };

        // when:
        let result = ConferenceRoom::try_from(record);

        // then:
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::StorageFailure(_)
        ));
    }

    #[test]
    fn test_room_from_record_with_empty_number_fails() {
        // given:
        let record = RoomRecord {
            number: "".to_string(),
            from: None,
            to: None,
        };

        // when:
        let result = ConferenceRoom::try_from(record);

        // then:
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::StorageFailure(_)
        ));
    }
}
