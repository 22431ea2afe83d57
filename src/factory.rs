#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

//! Classification of raw outcomes into [`Settled`] values.
//!
//! The `Ok`/`Err` tag decides the variant; the payload is never inspected.
//! An `Err` payload goes through [`Rejection`], which is implemented per type:
//! a [`Reason`] passes through as the same reason, known error types become a
//! `Reason` that keeps them as its origin, and plain strings are coerced into
//! a `Reason` carrying them as the message. A type with no `Rejection` impl is
//! a compile error, never a silent guess based on its shape.

use tracing::debug;

use crate::error::SettleError;
use crate::reason::{BoxError, Reason};
use crate::settled::Settled;

/// Conversion of a failure payload into the reason stored by `Settled::Rejected`.
pub trait Rejection {
    fn into_reason(self) -> Reason;
}

impl Rejection for Reason {
    fn into_reason(self) -> Reason {
        self
    }
}

impl Rejection for String {
    fn into_reason(self) -> Reason {
        debug!(len = self.len(), "coercing non-error rejection into a reason");
        Reason::msg(self)
    }
}

impl Rejection for &str {
    fn into_reason(self) -> Reason {
        self.to_string().into_reason()
    }
}

impl Rejection for BoxError {
    fn into_reason(self) -> Reason {
        match self.downcast::<Reason>() {
            Ok(reason) => *reason,
            Err(error) => Reason::from_boxed(error),
        }
    }
}

impl Rejection for anyhow::Error {
    fn into_reason(self) -> Reason {
        match self.downcast::<Reason>() {
            Ok(reason) => reason,
            Err(error) => Reason::from_anyhow(error),
        }
    }
}

macro_rules! reject_as_origin {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Rejection for $ty {
                fn into_reason(self) -> Reason {
                    Reason::new(self)
                }
            }
        )+
    };
}

reject_as_origin!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    serde_json::Error,
    tokio::task::JoinError,
    tokio::time::error::Elapsed,
    SettleError,
);

/// Classifies a raw outcome: `Ok(v)` is always fulfilled, `Err(e)` is always rejected.
///
/// Use [`Settled::void`] for the payload-free success and
/// [`Settled::fulfilled`] to build a success directly.
pub fn make_result<T, E>(input: Result<T, E>) -> Settled<T>
where
    E: Rejection,
{
    match input {
        Ok(value) => Settled::Fulfilled(value),
        Err(rejection) => Settled::Rejected(rejection.into_reason()),
    }
}

impl<T, E> From<Result<T, E>> for Settled<T>
where
    E: Rejection,
{
    fn from(input: Result<T, E>) -> Self {
        make_result(input)
    }
}
