use courier_core::error::CourierError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A schema entity with a JSON wire representation.
///
/// Parsing ignores unknown keys, resolves missing optional keys to unset
/// and fails with [`CourierError::MalformedResponse`] on a missing required
/// key or a value of the wrong JSON type.
pub trait TelegramObject: Serialize + DeserializeOwned {
    /// Build an instance from a decoded JSON value.
    fn from_wire(payload: Value) -> Result<Self, CourierError> {
        serde_json::from_value(payload).map_err(CourierError::malformed)
    }

    /// Build an instance from raw JSON text.
    fn from_json_str(payload: &str) -> Result<Self, CourierError> {
        serde_json::from_str(payload).map_err(CourierError::malformed)
    }

    /// Encode as a JSON object holding only the fields that are set.
    fn to_wire(&self) -> Result<Value, CourierError> {
        Ok(serde_json::to_value(self)?)
    }
}
