//! Concurrent classification of many queries.

use std::collections::HashMap;
use std::sync::Arc;

use cb_nlu::Pipeline;
use cb_protocol::QueryRecord;
use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// One line of CLI output.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchLine {
    Record(QueryRecord),
    Failed { text: String, error: String },
}

/// Classify a single query, turning hard failures into an output line.
pub async fn classify(pipeline: &Pipeline, text: String, today: NaiveDate) -> BatchLine {
    match pipeline.understand(&text, today).await {
        Ok(understanding) => BatchLine::Record(understanding.record),
        Err(e) => {
            tracing::warn!(error = %e, text = %text, "query could not be classified");
            BatchLine::Failed {
                text,
                error: e.to_string(),
            }
        }
    }
}

/// Classify `queries` with at most `workers` in flight.
///
/// Output is one line per query, in input order. A task that panics
/// becomes a `Failed` line for its own query.
pub async fn run(
    pipeline: Arc<Pipeline>,
    queries: Vec<String>,
    today: NaiveDate,
    workers: usize,
) -> Vec<BatchLine> {
    let permits = Arc::new(Semaphore::new(workers.max(1)));
    let mut join_set = JoinSet::new();
    let mut pending = HashMap::with_capacity(queries.len());
    let mut lines: Vec<Option<BatchLine>> = vec![None; queries.len()];

    for (index, text) in queries.into_iter().enumerate() {
        let pipeline = Arc::clone(&pipeline);
        let permits = Arc::clone(&permits);
        let query = text.clone();
        let handle = join_set.spawn(async move {
            let _permit = permits.acquire_owned().await;
            classify(&pipeline, query, today).await
        });
        pending.insert(handle.id(), (index, text));
    }

    while let Some(joined) = join_set.join_next_with_id().await {
        match joined {
            Ok((id, line)) => {
                if let Some((index, _)) = pending.remove(&id) {
                    lines[index] = Some(line);
                }
            }
            Err(e) => {
                let Some((index, text)) = pending.remove(&e.id()) else {
                    tracing::error!(error = %e, "untracked classification task failed");
                    continue;
                };
                tracing::error!(error = %e, index, text = %text, "classification task failed");
                lines[index] = Some(BatchLine::Failed {
                    text,
                    error: format!("classification task failed: {e}"),
                });
            }
        }
    }
    lines.into_iter().flatten().collect()
}
