//! Entity types and their mapping to/from the API's JSON shape.

pub mod certificate;
pub mod dns;
pub mod firewall;
pub mod hostname;
pub mod ip;
pub mod zone;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CfError, Result};

/// Bidirectional mapping between an entity and its wire object.
///
/// `from_wire` fails with [`CfError::ParseError`] when a required field is
/// missing or an invariant of the entity does not hold. `to_wire` produces the
/// canonical field map used for request bodies. Both are pure.
pub trait WireEntity: Serialize + DeserializeOwned {
    /// Human-readable name used in error messages.
    const KIND: &'static str;

    /// Entity invariants, checked after decoding and before encoding.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_wire(value: &Value) -> Result<Self> {
        let entity = <Self as Deserialize>::deserialize(value)
            .map_err(|e| CfError::parse(format!("{}: {e}", Self::KIND)))?;
        entity.validate().map_err(|e| match e {
            CfError::InvalidParameter { param, detail } => {
                CfError::parse(format!("{}: field '{param}' {detail}", Self::KIND))
            }
            other => other,
        })?;
        Ok(entity)
    }

    fn to_wire(&self) -> Result<Map<String, Value>> {
        self.validate()?;
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(CfError::SerializationError {
                detail: format!("{} encoded as non-object: {other}", Self::KIND),
            }),
            Err(e) => Err(CfError::SerializationError {
                detail: format!("{}: {e}", Self::KIND),
            }),
        }
    }
}

/// Decode a `result` payload that should be a list of entities.
///
/// `null` is an empty list; anything other than an array is malformed.
pub(crate) fn entities_from_wire<T: WireEntity>(value: &Value) -> Result<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(T::from_wire).collect(),
        other => Err(CfError::parse(format!(
            "expected a list of {}, got {}",
            T::KIND,
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
