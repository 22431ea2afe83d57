use serde_json::Value;
use settled::{Reason, Settled};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// One simulated per-item operation in a batch.
#[derive(Debug, Clone)]
pub struct ItemScenario {
    pub id: &'static str,
    pub outcome: Result<u32, &'static str>,
}

#[must_use]
pub fn mixed_batch() -> Vec<ItemScenario> {
    vec![
        ItemScenario {
            id: "item-ok-1",
            outcome: Ok(1),
        },
        ItemScenario {
            id: "item-db-down",
            outcome: Err("db down"),
        },
        ItemScenario {
            id: "item-ok-2",
            outcome: Ok(2),
        },
        ItemScenario {
            id: "item-timeout",
            outcome: Err("upstream timed out"),
        },
    ]
}

pub async fn run_item(scenario: ItemScenario) -> Result<u32, Reason> {
    tokio::task::yield_now().await;
    scenario.outcome.map_err(Reason::msg)
}

pub fn assert_settle_all_shape(encoded: &Value) -> Result<(), String> {
    match encoded.get("status").and_then(Value::as_str) {
        Some("fulfilled") if encoded.get("reason").is_none() => Ok(()),
        Some("rejected") if encoded.get("value").is_none() && encoded.get("reason").is_some() => {
            Ok(())
        }
        _ => Err(format!("not a settle-all shaped value: {encoded}")),
    }
}

pub fn message_of<T>(settled: &Settled<T>) -> Option<&str> {
    settled.reason().map(Reason::message)
}
