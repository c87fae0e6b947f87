//! In-memory room store.
//!
//! Rooms are kept as an ordered sequence so that insertion order and duplicate
//! ids behave as clients observe them: listing returns rooms in the order they
//! were added, and id-keyed operations act on the first match only.
//! All access goes through one `RwLock`; mutations (including the reservation
//! check-then-decrement) hold the write guard for their whole duration.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::inventory::error::{InventoryError, InventoryResult};
use crate::inventory::reservation::{self, Reservation};
use crate::inventory::room::Room;
use crate::inventory::seed::seed_rooms;
use crate::observability::metrics;

/// Thread-safe ordered collection of rooms.
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: RwLock<Vec<Room>>,
}

impl RoomStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in room classes.
    pub fn seeded() -> Self {
        Self::with_rooms(seed_rooms())
    }

    /// Create a store holding `rooms`, in order.
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        metrics::record_inventory_size(rooms.len());
        Self {
            rooms: RwLock::new(rooms),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Room>> {
        self.rooms.read().expect("room store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Room>> {
        self.rooms.write().expect("room store lock poisoned")
    }

    /// Snapshot of every room in insertion order.
    pub fn list(&self) -> Vec<Room> {
        self.read().clone()
    }

    /// First room with the given id.
    pub fn find_by_id(&self, id: &str) -> InventoryResult<Room> {
        self.read()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    /// Append a room. Ids are not checked for collisions.
    pub fn append(&self, room: Room) -> Room {
        let mut rooms = self.write();
        rooms.push(room.clone());
        metrics::record_inventory_size(rooms.len());
        room
    }

    /// Overwrite every field except `id` of the first room with the given id.
    pub fn replace(&self, id: &str, fields: Room) -> InventoryResult<Room> {
        let mut rooms = self.write();
        let room = rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        room.overwrite_with(fields);
        Ok(room.clone())
    }

    /// Remove the first room with the given id, shifting later rooms down.
    pub fn remove_by_id(&self, id: &str) -> InventoryResult<Room> {
        let mut rooms = self.write();
        let index = rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        let removed = rooms.remove(index);
        metrics::record_inventory_size(rooms.len());
        Ok(removed)
    }

    /// Reserve `requested` units of the first room with the given id.
    pub fn reserve(&self, id: &str, requested: i64) -> InventoryResult<Reservation> {
        reservation::check_quantity(requested)?;

        let mut rooms = self.write();
        let room = rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        reservation::reserve(room, requested)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
