//! Room record and request payload types.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the field's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One class of hotel room, not a single physical room.
///
/// Fields missing from an incoming JSON body, or set to `null`, decode to
/// their zero value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Room {
    /// Caller-supplied identifier. Not checked for uniqueness.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display label.
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,
    /// Occupancy limit.
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: i64,
    /// Free-text description.
    #[serde(deserialize_with = "null_as_default")]
    pub facility: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Remaining reservable units of this room class.
    #[serde(rename = "roomcount", deserialize_with = "null_as_default")]
    pub room_count: i64,
    /// Cleared by an over-limit reservation, never set back.
    #[serde(deserialize_with = "null_as_default")]
    pub available: bool,
}

impl Room {
    /// Overwrite every field except `id` with the values from `fields`.
    pub fn overwrite_with(&mut self, fields: Room) {
        self.class = fields.class;
        self.capacity = fields.capacity;
        self.facility = fields.facility;
        self.price = fields.price;
        self.room_count = fields.room_count;
        self.available = fields.available;
    }
}

/// Body of `POST /reserve/{id}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationRequest {
    #[serde(rename = "roomreserved", deserialize_with = "null_as_default")]
    pub room_reserved: i64,
}
