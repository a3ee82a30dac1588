//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomNumber validation error
    #[error("RoomNumber cannot be empty")]
    RoomNumberEmpty,

    /// RoomNumber too long error
    #[error("RoomNumber cannot exceed {max} characters (got {actual})")]
    RoomNumberTooLong { max: usize, actual: usize },

    /// BookingTime validation error
    #[error("BookingTime cannot be empty")]
    BookingTimeEmpty,

    /// BookingTime too long error
    #[error("BookingTime cannot exceed {max} characters (got {actual})")]
    BookingTimeTooLong { max: usize, actual: usize },
}

/// Errors surfaced by the persistence ports.
///
/// Defined in the domain layer so that concrete backends depend on the
/// domain, never the other way around.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record exists for the requested room number
    #[error("no room found for number '{0}'")]
    NotFound(String),

    /// The backend could not record the new state
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

/// Errors returned by the booking operations (`book_me` / `book`)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The requested booking window fails the sanity check
    #[error("invalid booking window: from '{from}' to '{to}'")]
    InvalidWindow { from: String, to: String },

    /// The persistence port failed during lookup or save
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
