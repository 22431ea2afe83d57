#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::de::IntoDeserializer;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::config::JsonConfig;
use crate::error::{Result, SettleError};
use crate::factory::Rejection;
use crate::reason::Reason;
use crate::status::Status;
use crate::unit::is_unit;

pub const FULFILLED_TOKEN: &str = "[Settled: fulfilled]";
pub const REJECTED_TOKEN: &str = "[Settled: rejected]";

/// Outcome of a single operation, kept as data instead of propagated.
///
/// The serialized form matches the settle-all convention:
/// `{"status":"fulfilled","value":..}` or `{"status":"rejected","reason":..}`.
/// A `Settled<()>` success has no payload and serializes without `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Settled<T> {
    Fulfilled(T),
    Rejected(Reason),
}

impl Settled<()> {
    /// Success with no payload.
    pub const fn void() -> Self {
        Self::Fulfilled(())
    }
}

impl<T> Settled<T> {
    /// Direct success constructor; `value` is never inspected, so it may be a `Reason`.
    pub const fn fulfilled(value: T) -> Self {
        Self::Fulfilled(value)
    }

    pub fn rejected(reason: impl Rejection) -> Self {
        Self::Rejected(reason.into_reason())
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Fulfilled(_) => Status::Fulfilled,
            Self::Rejected(_) => Status::Rejected,
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status().is_ok()
    }

    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    #[must_use]
    pub const fn reason(&self) -> Option<&Reason> {
        match self {
            Self::Fulfilled(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }

    /// Returns the value, or hands back the stored reason untouched.
    ///
    /// # Errors
    ///
    /// Returns the rejection's own `Reason` if this is `Rejected`.
    pub fn enforce_value(self) -> std::result::Result<T, Reason> {
        match self {
            Self::Fulfilled(value) => Ok(value),
            Self::Rejected(reason) => Err(reason),
        }
    }

    /// Returns the stored reason.
    ///
    /// # Errors
    ///
    /// Returns `SettleError::ExpectedFailure` if this is `Fulfilled`. That is a
    /// contract violation on the caller's side.
    pub fn enforce_error(self) -> Result<Reason> {
        match self {
            Self::Fulfilled(_) => Err(SettleError::ExpectedFailure),
            Self::Rejected(reason) => Ok(reason),
        }
    }

    /// Same as [`Settled::enforce_value`], named for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns the rejection's own `Reason` if this is `Rejected`.
    pub fn into_result(self) -> std::result::Result<T, Reason> {
        self.enforce_value()
    }

    pub fn as_ref(&self) -> Settled<&T> {
        match self {
            Self::Fulfilled(value) => Settled::Fulfilled(value),
            Self::Rejected(reason) => Settled::Rejected(reason.clone()),
        }
    }

    pub fn map<U, F>(self, op: F) -> Settled<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Fulfilled(value) => Settled::Fulfilled(op(value)),
            Self::Rejected(reason) => Settled::Rejected(reason),
        }
    }

    pub fn map_reason<F>(self, op: F) -> Self
    where
        F: FnOnce(Reason) -> Reason,
    {
        match self {
            Self::Fulfilled(value) => Self::Fulfilled(value),
            Self::Rejected(reason) => Self::Rejected(op(reason)),
        }
    }
}

impl<T: Serialize> Settled<T> {
    /// # Errors
    ///
    /// Returns `SettleError::SerializationError` if the value fails to serialize.
    pub fn to_json(&self) -> Result<Value> {
        self.to_json_with(&JsonConfig::default())
    }

    /// # Errors
    ///
    /// Returns `SettleError::SerializationError` if the value fails to serialize.
    pub fn to_json_with(&self, config: &JsonConfig) -> Result<Value> {
        let mut object = Map::new();
        object.insert("status".to_string(), serde_json::to_value(self.status())?);
        match self {
            Self::Fulfilled(value) => {
                if !is_unit(value) {
                    object.insert("value".to_string(), serde_json::to_value(value)?);
                }
            }
            Self::Rejected(reason) => {
                object.insert("reason".to_string(), reason.to_json_with(config));
            }
        }
        Ok(Value::Object(object))
    }
}

impl<T> From<Settled<T>> for std::result::Result<T, Reason> {
    fn from(settled: Settled<T>) -> Self {
        settled.enforce_value()
    }
}

/// Never shows the payload.
impl<T> fmt::Display for Settled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fulfilled(_) => f.write_str(FULFILLED_TOKEN),
            Self::Rejected(_) => f.write_str(REJECTED_TOKEN),
        }
    }
}

impl<T: Serialize> Serialize for Settled<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Fulfilled(value) if !is_unit(value) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("status", &Status::Fulfilled)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            Self::Fulfilled(_) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("status", &Status::Fulfilled)?;
                map.end()
            }
            Self::Rejected(reason) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("status", &Status::Rejected)?;
                map.serialize_entry("reason", reason)?;
                map.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "lowercase", deny_unknown_fields)]
enum WireSettled<T> {
    Fulfilled { value: Option<T> },
    Rejected { reason: Reason },
}

/// A missing `value` is read as the unit value, so `{"status":"fulfilled"}`
/// loads as `Settled<()>` (or any payload type that accepts unit). A success
/// with a `reason`, or a failure with a `value`, is refused.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Settled<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match WireSettled::<T>::deserialize(deserializer)? {
            WireSettled::Fulfilled { value: Some(value) } => Ok(Self::Fulfilled(value)),
            WireSettled::Fulfilled { value: None } => {
                T::deserialize(<() as IntoDeserializer<'de, D::Error>>::into_deserializer(()))
                    .map(Self::Fulfilled)
            }
            WireSettled::Rejected { reason } => Ok(Self::Rejected(reason)),
        }
    }
}
