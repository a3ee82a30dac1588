//! Infrastructure layer: concrete storage backends.

pub mod repository;

pub use repository::{InMemoryRecordStore, InMemoryRoomRepository};
