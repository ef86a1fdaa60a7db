use crate::clock::unix_now;
use crate::storage::interface::IMarketStorage;
use crate::storage::memory::HashMapMarketStorage;
use std::time::Duration;

/// Periodic featured-ad expiry sweep. Runs until the server shuts down.
pub async fn run(storage: HashMapMarketStorage, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        sweep_once(&storage).await;
    }
}

/// One sweep pass: clears the featured flag on listings whose expiry has
/// passed and completes their promotion orders. Safe to re-run; a pass
/// over an already-clean set changes nothing. Concurrent passes race only
/// on a one-directional flag flip, so last-write-wins is the same result.
pub async fn sweep_once<MS: IMarketStorage>(storage: &MS) -> usize {
    let timestamp = unix_now();
    let expired = storage.expire_featured(timestamp).await;
    if !expired.is_empty() {
        tracing::info!(
            task = "expiry_sweep",
            expired_listings = expired.len() as u64,
            timestamp,
        );
    }
    expired.len()
}
