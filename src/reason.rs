#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

//! The error object carried by a rejected [`Settled`](crate::Settled).
//!
//! A `Reason` always has a name and a message. When it was built from another
//! error, that error is kept as its origin: the message is the origin's
//! `Display`, the source chain is the origin's source chain, and the origin
//! itself can be recovered with [`Reason::downcast_ref`].
//!
//! Clones share one allocation, so a reason handed out by
//! [`Settled::enforce_value`](crate::Settled::enforce_value) is the same
//! reason that was stored, which [`Reason::ptr_eq`] can confirm.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::any::type_name;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::config::JsonConfig;

pub const DEFAULT_NAME: &str = "Error";

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Clone)]
pub struct Reason {
    inner: Arc<Inner>,
}

struct Inner {
    name: Cow<'static, str>,
    message: String,
    origin: Option<Origin>,
}

/// `anyhow::Error` is kept as-is so its own downcasting still reaches the wrapped error.
enum Origin {
    Error(BoxError),
    Anyhow(anyhow::Error),
}

impl Origin {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Error(error) => error.source(),
            Self::Anyhow(error) => error.source(),
        }
    }
}

impl Reason {
    /// A reason with the default name and the given message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::from_parts(Cow::Borrowed(DEFAULT_NAME), message.to_string(), None)
    }

    pub fn named(name: impl Into<Cow<'static, str>>, message: impl fmt::Display) -> Self {
        Self::from_parts(name.into(), message.to_string(), None)
    }

    /// Captures `error` as the origin. The name is the error's type name.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::from_parts(
            Cow::Borrowed(short_type_name::<E>()),
            message,
            Some(Origin::Error(Box::new(error))),
        )
    }

    pub fn from_boxed(error: BoxError) -> Self {
        let message = error.to_string();
        Self::from_parts(
            Cow::Borrowed(DEFAULT_NAME),
            message,
            Some(Origin::Error(error)),
        )
    }

    /// The message is the outermost context; inner errors become causes.
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        let message = error.to_string();
        Self::from_parts(
            Cow::Borrowed(DEFAULT_NAME),
            message,
            Some(Origin::Anyhow(error)),
        )
    }

    fn from_parts(name: Cow<'static, str>, message: String, origin: Option<Origin>) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                message,
                origin,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// The error this reason was built from, if it is an `E`.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + Send + Sync + 'static,
    {
        match self.inner.origin.as_ref()? {
            Origin::Error(error) => error.downcast_ref::<E>(),
            Origin::Anyhow(error) => error.downcast_ref::<E>(),
        }
    }

    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: StdError + Send + Sync + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// True when both handles refer to the same reason, not just equal ones.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Walks the source chain, outermost first. The reason itself is not included.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.source(), |cause| (*cause).source())
    }

    #[must_use]
    pub fn to_json_with(&self, config: &JsonConfig) -> Value {
        let mut object = Map::new();
        object.insert("name".to_string(), Value::from(self.name()));
        object.insert("message".to_string(), Value::from(self.message()));

        let causes: Vec<Value> = self
            .causes()
            .take(config.cause_limit())
            .map(|cause| Value::from(cause.to_string()))
            .collect();
        if !causes.is_empty() {
            object.insert("causes".to_string(), Value::Array(causes));
        }

        Value::Object(object)
    }

    fn from_wire(wire: WireReason) -> Self {
        let chain = wire
            .causes
            .into_iter()
            .rev()
            .fold(None, |next, message| {
                Some(WireCause {
                    message,
                    next: next.map(Box::new),
                })
            });
        let origin = WireCause {
            message: wire.message.clone(),
            next: chain.map(Box::new),
        };
        Self::from_parts(
            Cow::Owned(wire.name),
            wire.message,
            Some(Origin::Error(Box::new(origin))),
        )
    }
}

fn short_type_name<E>() -> &'static str {
    let full = type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if f.alternate() {
            for cause in self.causes() {
                write!(f, ": {cause}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let causes: Vec<String> = self.causes().map(ToString::to_string).collect();
        f.debug_struct("Reason")
            .field("name", &self.name())
            .field("message", &self.message())
            .field("causes", &causes)
            .finish()
    }
}

impl StdError for Reason {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.origin.as_ref().and_then(Origin::source)
    }
}

/// Equal when name and message match. Use [`Reason::ptr_eq`] for identity.
impl PartialEq for Reason {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
            || (self.name() == other.name() && self.message() == other.message())
    }
}

impl Eq for Reason {}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_with(&JsonConfig::default())
            .serialize(serializer)
    }
}

#[derive(Deserialize)]
struct WireReason {
    #[serde(default = "default_name")]
    name: String,
    message: String,
    #[serde(default)]
    causes: Vec<String>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl<'de> Deserialize<'de> for Reason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        WireReason::deserialize(deserializer).map(Self::from_wire)
    }
}

/// Source chain rebuilt from serialized cause messages.
#[derive(Debug)]
struct WireCause {
    message: String,
    next: Option<Box<WireCause>>,
}

impl fmt::Display for WireCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for WireCause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.next
            .as_deref()
            .map(|next| next as &(dyn StdError + 'static))
    }
}
