use crate::listings::models::{Listing, PromotionOrder};
use crate::messaging::models::ListingMessage;
use crate::reviews::models::Review;
use crate::shipping::models::RateRow;

pub trait IMarketStorage:
    ListingRepo + FeaturedAdRepo + ConversationRepo + ReviewRepo + ShippingRateRepo
{
}

pub trait ListingRepo {
    async fn insert(&self, listing: Listing);

    async fn get(&self, listing_id: &str) -> Option<Listing>;

    async fn exists(&self, listing_id: &str) -> bool;

    /// All listings carrying coordinates, fetched wholesale. The radius
    /// filter runs over this in application memory; there is no spatial
    /// index.
    async fn with_coordinates(&self) -> Vec<Listing>;
}

pub trait FeaturedAdRepo {
    /// Marks the listing featured until the given timestamp and records the
    /// promotion order. Returns `None` if the listing does not exist.
    async fn feature(&self, listing_id: &str, until: u64, now: u64) -> Option<PromotionOrder>;

    /// Clears the featured flag on every listing whose expiry has passed and
    /// completes the related promotion orders. Returns the ids of the
    /// listings that were expired. Idempotent: a second run over a clean
    /// set returns nothing.
    async fn expire_featured(&self, now: u64) -> Vec<String>;

    async fn promotion_orders(&self, listing_id: &str) -> Vec<PromotionOrder>;
}

pub trait ConversationRepo {
    async fn add_message(&self, listing_id: &str, message: ListingMessage);

    async fn messages(&self, listing_id: &str) -> Vec<ListingMessage>;
}

pub trait ReviewRepo {
    async fn add_review(&self, review: Review);

    async fn reviews_of(&self, subject_id: &str) -> Vec<Review>;
}

pub trait ShippingRateRepo {
    async fn rate_rows(&self) -> Vec<RateRow>;
}
