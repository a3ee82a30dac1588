//! In-memory port implementations.
//!
//! Concrete implementations of the domain's persistence ports backed by a
//! `HashMap`. The use cases depend on the traits (domain layer), never on
//! these types directly (dependency inversion). Both stores keep flattened
//! [`RoomRecord`]s internally, the same shape a row-oriented backend would.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::domain::{
    ConferenceRoom, RepositoryError, RoomNumber, RoomRecord, RoomRecordStore, RoomRepository,
};

fn poisoned<T>(_: PoisonError<MutexGuard<'_, T>>) -> RepositoryError {
    RepositoryError::StorageFailure("storage lock poisoned".to_string())
}

/// In-memory [`RoomRepository`] implementation, keyed by room number.
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<String, RoomRecord>>,
}

impl InMemoryRoomRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with the given rooms.
    pub fn with_rooms(rooms: impl IntoIterator<Item = ConferenceRoom>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.rooms.lock().expect("fresh lock cannot be poisoned");
            for room in rooms {
                map.insert(room.number().as_str().to_string(), RoomRecord::from(&room));
            }
        }
        repository
    }

    /// The stored record for a room number, if any. Test support.
    pub fn saved_state(&self, number: &str) -> Option<RoomRecord> {
        self.rooms
            .lock()
            .map(|map| map.get(number).cloned())
            .unwrap_or(None)
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn find_by_room_number(
        &self,
        number: &RoomNumber,
    ) -> Result<ConferenceRoom, RepositoryError> {
        let rooms = self.rooms.lock().map_err(poisoned)?;
        let record = rooms
            .get(number.as_str())
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(number.as_str().to_string()))?;
        ConferenceRoom::try_from(record)
    }

    fn save(&self, room: &ConferenceRoom) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().map_err(poisoned)?;
        rooms.insert(room.number().as_str().to_string(), RoomRecord::from(room));
        tracing::debug!("Saved room '{}'", room.number());
        Ok(())
    }
}

/// In-memory [`RoomRecordStore`] implementation, keyed by room number.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<HashMap<String, RoomRecord>>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given records.
    pub fn with_records(records: impl IntoIterator<Item = RoomRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.lock().expect("fresh lock cannot be poisoned");
            for record in records {
                map.insert(record.number.clone(), record);
            }
        }
        store
    }

    /// The stored record for a room number, if any. Test support.
    pub fn saved_state(&self, number: &str) -> Option<RoomRecord> {
        self.records
            .lock()
            .map(|map| map.get(number).cloned())
            .unwrap_or(None)
    }
}

impl RoomRecordStore for InMemoryRecordStore {
    fn find_by_room_number(&self, number: &str) -> Result<RoomRecord, RepositoryError> {
        let records = self.records.lock().map_err(poisoned)?;
        records
            .get(number)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(number.to_string()))
    }

    fn save(&self, record: RoomRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().map_err(poisoned)?;
        tracing::debug!("Saved record for room '{}'", record.number);
        records.insert(record.number.clone(), record);
        Ok(())
    }
}
