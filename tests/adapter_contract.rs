mod support;

use futures_util::future::join_all;
use serde_json::{json, Value};
use settled::{unwrap_settled, wrap_settled, Reason, SettleFutureExt, Settled};
use support::settle_harness::{
    assert_settle_all_shape, init_tracing, message_of, mixed_batch, run_item,
};

#[tokio::test]
async fn round_trip_reproduces_success() -> Result<(), String> {
    init_tracing();
    let payload = std::sync::Arc::new("payload".to_string());
    let expected = std::sync::Arc::clone(&payload);

    let value = unwrap_settled(wrap_settled(async move { Ok::<_, Reason>(payload) }))
        .await
        .map_err(|e| e.to_string())?;

    if std::sync::Arc::ptr_eq(&value, &expected) {
        Ok(())
    } else {
        Err("round trip must keep the same value".to_string())
    }
}

#[tokio::test]
async fn round_trip_reproduces_failure_identity() -> Result<(), String> {
    init_tracing();
    let reason = Reason::msg("db down");
    let raised = reason.clone();

    let outcome = unwrap_settled(wrap_settled(async move { Err::<u8, _>(raised) })).await;
    match outcome {
        Err(err) if Reason::ptr_eq(&err, &reason) => Ok(()),
        other => Err(format!("round trip must keep the same reason, got {other:?}")),
    }
}

#[tokio::test]
async fn wrap_never_fails_for_plain_string_rejections() {
    init_tracing();
    let settled = wrap_settled(async { Err::<(), _>("boom".to_string()) }).await;

    assert!(settled.is_err());
    assert!(message_of(&settled).is_some_and(|message| message.contains("boom")));
}

#[tokio::test]
async fn unwrap_propagates_rejection_message() {
    init_tracing();
    let pending = async { Settled::<String>::rejected(Reason::msg("db down")) };

    let outcome = unwrap_settled(pending).await;
    assert_eq!(
        outcome.err().map(|reason| reason.message().to_string()),
        Some("db down".to_string())
    );
}

#[tokio::test]
async fn batch_keeps_every_item_outcome() -> Result<(), String> {
    init_tracing();
    let scenarios = mixed_batch();
    let ids: Vec<&str> = scenarios.iter().map(|scenario| scenario.id).collect();

    let pending = scenarios
        .into_iter()
        .map(|scenario| run_item(scenario).settle());
    let settled = join_all(pending).await;

    assert_eq!(settled.len(), ids.len());
    assert_eq!(settled.iter().filter(|item| item.is_ok()).count(), 2);
    assert_eq!(message_of(&settled[1]), Some("db down"));
    assert_eq!(message_of(&settled[3]), Some("upstream timed out"));

    let encoded = settled
        .iter()
        .map(Settled::to_json)
        .collect::<Result<Vec<Value>, _>>()
        .map_err(|e| e.to_string())?;
    for item in &encoded {
        assert_settle_all_shape(item)?;
    }
    assert_eq!(encoded[0], json!({"status": "fulfilled", "value": 1}));
    assert_eq!(
        encoded[1],
        json!({"status": "rejected", "reason": {"name": "Error", "message": "db down"}})
    );
    Ok(())
}

#[tokio::test]
async fn enforce_combinator_fails_on_first_rejected_item() {
    init_tracing();
    let pending = mixed_batch()
        .into_iter()
        .map(|scenario| run_item(scenario).settle());
    let settled = join_all(pending).await;

    let mut values = Vec::new();
    let mut first_failure = None;
    for item in settled {
        match async move { item }.enforce().await {
            Ok(value) => values.push(value),
            Err(reason) => {
                first_failure = Some(reason);
                break;
            }
        }
    }

    assert_eq!(values, vec![1]);
    assert_eq!(
        first_failure.map(|reason| reason.message().to_string()),
        Some("db down".to_string())
    );
}

#[tokio::test]
async fn spawned_tasks_settle_across_threads() {
    init_tracing();
    let handles: Vec<_> = (0..4_u32)
        .map(|n| tokio::spawn(async move { n * 10 }))
        .collect();

    let settled = join_all(handles.into_iter().map(wrap_settled)).await;
    let values: Vec<u32> = settled
        .into_iter()
        .filter_map(|item| item.enforce_value().ok())
        .collect();
    assert_eq!(values, vec![0, 10, 20, 30]);
}
