//! Settled results: a success value or a failure reason, kept as data.
//!
//! ```
//! use settled::{make_result, Reason, Settled};
//!
//! let ok = make_result::<_, Reason>(Ok("hi"));
//! assert_eq!(ok.to_json().ok(), Some(serde_json::json!({"status": "fulfilled", "value": "hi"})));
//!
//! let failed: Settled<u32> = make_result(Err("boom"));
//! assert_eq!(failed.to_string(), "[Settled: rejected]");
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod factory;
pub mod reason;
pub mod settled;
pub mod status;
mod unit;

pub use adapters::{unwrap_settled, wrap_settled, Enforce, Settle, SettleFutureExt};
pub use config::JsonConfig;
pub use error::{Result, SettleError};
pub use factory::{make_result, Rejection};
pub use reason::Reason;
pub use settled::{Settled, FULFILLED_TOKEN, REJECTED_TOKEN};
pub use status::Status;
