#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use futures_util::future::{FutureExt, Map};
use std::future::Future;
use tracing::trace;

use crate::factory::{make_result, Rejection};
use crate::reason::Reason;
use crate::settled::Settled;

/// Awaits `pending` and captures its outcome. The returned future never fails.
///
/// Dropping the returned future drops `pending`; wrapping a tokio `JoinHandle`
/// turns a cancelled or panicked task into a `JoinError` rejection.
pub async fn wrap_settled<F, T, E>(pending: F) -> Settled<T>
where
    F: Future<Output = Result<T, E>>,
    E: Rejection,
{
    let settled = make_result(pending.await);
    trace!(status = %settled.status(), "pending computation settled");
    settled
}

/// Awaits `pending` and turns its `Settled` back into a plain `Result`.
///
/// # Errors
///
/// Returns the stored `Reason`, unchanged, when `pending` yields a rejection.
pub async fn unwrap_settled<F, T>(pending: F) -> Result<T, Reason>
where
    F: Future<Output = Settled<T>>,
{
    let settled = pending.await;
    trace!(status = %settled.status(), "reinstating settled outcome");
    settled.enforce_value()
}

pub type Settle<Fut, T, E> = Map<Fut, fn(Result<T, E>) -> Settled<T>>;
pub type Enforce<Fut, T> = Map<Fut, fn(Settled<T>) -> Result<T, Reason>>;

/// Combinator forms of [`wrap_settled`] and [`unwrap_settled`] with nameable types.
pub trait SettleFutureExt: Future + Sized {
    fn settle<T, E>(self) -> Settle<Self, T, E>
    where
        Self: Future<Output = Result<T, E>>,
        E: Rejection,
    {
        self.map(make_result::<T, E> as fn(Result<T, E>) -> Settled<T>)
    }

    fn enforce<T>(self) -> Enforce<Self, T>
    where
        Self: Future<Output = Settled<T>>,
    {
        self.map(Settled::<T>::enforce_value as fn(Settled<T>) -> Result<T, Reason>)
    }
}

impl<F: Future> SettleFutureExt for F {}
