//! # Fan-out
//!
//! All-or-nothing join over independently spawned lookups.
//!
//! Every future is spawned onto the runtime before the first one is awaited, so
//! all N requests are issued no matter which one fails. The first error observed
//! terminates the join; the remaining tasks are detached (their `JoinHandle`s are
//! dropped, not aborted) and drain on their own. Successful results come back in
//! input order regardless of completion order.

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use tokio::task::JoinError;
use tracing::debug;

/// Runs every lookup on its own task and joins them, failing on the first error.
pub async fn try_join_ordered<I, F, T, E>(lookups: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    let mut in_flight: FuturesUnordered<_> = lookups
        .into_iter()
        .enumerate()
        .map(|(index, lookup)| {
            let task = tokio::spawn(lookup);
            async move { (index, task.await) }
        })
        .collect();

    let mut slots: Vec<Option<T>> = (0..in_flight.len()).map(|_| None).collect();
    while let Some((index, joined)) = in_flight.next().await {
        match joined {
            Ok(Ok(value)) => slots[index] = Some(value),
            Ok(Err(error)) => {
                debug!(index, detached = in_flight.len(), "Fan-out failed");
                return Err(error);
            }
            Err(join_error) => return Err(E::from(join_error)),
        }
    }

    Ok(slots.into_iter().flatten().collect())
}
