use crate::listings::models::Listing;
use crate::storage::interface::ListingRepo;
use crate::storage::memory::HashMapMarketStorage;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads listings from an NDJSON file into storage. Only used at startup;
/// any malformed line is a configuration error and aborts the boot.
pub async fn load(path: &Path, storage: &HashMapMarketStorage) {
    let seed_file = File::open(path).expect("Failed to open the listings seed file.");
    let file_reader = BufReader::new(seed_file);
    let mut count = 0_u64;
    for line in file_reader.lines() {
        let line = line.expect("Failed to read a line in the listings seed file.");
        if line.trim().is_empty() {
            continue;
        }
        let listing: Listing = serde_json::from_str(&line)
            .expect("Failed to deserialize a line in the listings seed file into a `Listing`.");
        storage.insert(listing).await;
        count += 1;
    }
    tracing::info!("Seeded {count} listings from {}.", path.display());
}
