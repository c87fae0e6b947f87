//! Reservation state machine over a room's `(room_count, available)` pair.
//!
//! ```text
//! n < 0               → InvalidQuantity   (no mutation)
//! n > room_count      → OverCapacity      (available = false)
//! otherwise           → Ok                (room_count -= n)
//! ```
//!
//! The quantity check runs before any lookup, so a negative request for an
//! unknown id reports `InvalidQuantity` rather than `NotFound`.

use serde::Serialize;

use crate::inventory::error::{InventoryError, InventoryResult};
use crate::inventory::room::Room;

/// Confirmation of a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub room_id: String,
    pub reserved: i64,
    pub remaining: i64,
}

/// Reject negative quantities. Zero is accepted and reserves nothing.
pub fn check_quantity(requested: i64) -> InventoryResult<()> {
    if requested < 0 {
        return Err(InventoryError::InvalidQuantity(requested));
    }
    Ok(())
}

/// Apply a reservation of `requested` units to `room`.
///
/// The success path leaves `available` untouched, so a flag cleared by an
/// earlier over-limit attempt stays cleared.
pub fn reserve(room: &mut Room, requested: i64) -> InventoryResult<Reservation> {
    check_quantity(requested)?;

    if requested > room.room_count {
        room.available = false;
        return Err(InventoryError::OverCapacity {
            requested,
            remaining: room.room_count,
        });
    }

    room.room_count -= requested;
    Ok(Reservation {
        room_id: room.id.clone(),
        reserved: requested,
        remaining: room.room_count,
    })
}
