pub const DEFAULT_LOG_BATCH_SIZE: usize = 100;
pub const INGEST_CHANNEL_CAPACITY: usize = 10_000;
