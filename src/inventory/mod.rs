//! Room inventory subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → store.rs (RwLock<Vec<Room>>, first-match lookup by id)
//!     → reservation.rs (quantity check, decrement or clear availability)
//!     → Room / Reservation / InventoryError back to handler
//! ```

pub mod error;
pub mod reservation;
pub mod room;
pub mod seed;
pub mod store;

pub use error::{InventoryError, InventoryResult};
pub use reservation::Reservation;
pub use room::{ReservationRequest, Room};
pub use store::RoomStore;
