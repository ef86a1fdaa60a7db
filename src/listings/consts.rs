pub const MAX_TITLE_LENGTH: usize = 120;
pub const MAX_DESCRIPTION_LENGTH: usize = 4000;
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 50.0;
pub const MAX_FEATURE_HOURS: u64 = 24 * 30;
pub const SECONDS_PER_HOUR: u64 = 3600;
