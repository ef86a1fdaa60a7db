pub const MAX_COMMENT_LENGTH: usize = 2000;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
/// Default scope of the "local reputation" aggregate.
pub const DEFAULT_REPUTATION_RADIUS_KM: f64 = 50.0;
