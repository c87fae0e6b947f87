//! Lenient JSON body decoding.
//!
//! Bodies are decoded whatever their `Content-Type`, object keys match
//! field names case-insensitively, and a `null` body decodes to the zero
//! value. Syntax errors, non-object bodies and wrongly typed fields are
//! rejected.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

/// Decode `bytes` into `T`.
pub fn decode_body<T>(bytes: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let value = match serde_json::from_slice(bytes)? {
        Value::Null => return Ok(T::default()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
        ),
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                other
            )))
        }
    };
    serde_json::from_value(value)
}
