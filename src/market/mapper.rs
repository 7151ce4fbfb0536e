use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::join_all;
use parking_lot::Mutex;
use tracing::debug;

/// Apply an async fallible operation to every item with at most `concurrency`
/// operations in flight, returning results in input order.
///
/// A fixed pool of worker futures consumes an explicit work queue: a shared
/// atomic cursor over the item indexes. Each worker claims the next unclaimed
/// index with a single `fetch_add` (no suspension between claim and slot
/// write), runs `op`, and stores the outcome at that index, so the output
/// order is independent of completion order.
///
/// A failed operation records `None` at its position and the batch continues;
/// one item's failure never rejects the whole call. Duplicate items are each
/// processed independently.
///
/// `concurrency` is clamped to `1..=items.len()`; an empty input returns
/// immediately without invoking `op`.
pub async fn map_bounded<'a, T, R, E, F, Fut>(
    items: &'a [T],
    concurrency: usize,
    op: F,
) -> Vec<Option<R>>
where
    E: Display,
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    if items.is_empty() {
        return Vec::new();
    }

    let workers = concurrency.max(1).min(items.len());
    let cursor = AtomicUsize::new(0);
    let results: Mutex<Vec<Option<R>>> = Mutex::new((0..items.len()).map(|_| None).collect());

    let pool = (0..workers).map(|_| async {
        loop {
            let index = cursor.fetch_add(1, Ordering::SeqCst);
            if index >= items.len() {
                break;
            }
            match op(&items[index]).await {
                Ok(value) => results.lock()[index] = Some(value),
                Err(e) => {
                    debug!(index, error = %e, "item failed, recording empty slot");
                    // Slot stays None; later indexes are still claimed.
                }
            }
        }
    });

    join_all(pool).await;
    results.into_inner()
}
