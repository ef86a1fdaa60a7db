use crate::listings::models::{Listing, PromotionOrder, PromotionOrderStatus};
use crate::messaging::models::ListingMessage;
use crate::reviews::models::Review;
use crate::shipping::models::RateRow;
use crate::storage::consts::MESSAGES_PER_CONVERSATION;
use crate::storage::interface::{
    ConversationRepo, FeaturedAdRepo, IMarketStorage, ListingRepo, ReviewRepo, ShippingRateRepo,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
pub struct HashMapMarketStorage {
    listings: Arc<RwLock<HashMap<String, Listing>>>,
    conversations: Arc<RwLock<HashMap<String, VecDeque<ListingMessage>>>>,
    reviews: Arc<RwLock<HashMap<String, Vec<Review>>>>,
    promotion_orders: Arc<RwLock<HashMap<String, Vec<PromotionOrder>>>>,
    rate_rows: Arc<RwLock<Vec<RateRow>>>,
}

impl Default for HashMapMarketStorage {
    fn default() -> Self {
        Self {
            listings: Arc::default(),
            conversations: Arc::default(),
            reviews: Arc::default(),
            promotion_orders: Arc::default(),
            rate_rows: Arc::new(RwLock::new(default_rate_rows())),
        }
    }
}

impl IMarketStorage for HashMapMarketStorage {}

impl ListingRepo for HashMapMarketStorage {
    async fn insert(&self, listing: Listing) {
        self.listings
            .write()
            .await
            .insert(listing.id.clone(), listing);
    }

    async fn get(&self, listing_id: &str) -> Option<Listing> {
        self.listings.read().await.get(listing_id).cloned()
    }

    async fn exists(&self, listing_id: &str) -> bool {
        self.listings.read().await.contains_key(listing_id)
    }

    async fn with_coordinates(&self) -> Vec<Listing> {
        self.listings
            .read()
            .await
            .values()
            .filter(|listing| listing.location.is_some())
            .cloned()
            .collect()
    }
}

impl FeaturedAdRepo for HashMapMarketStorage {
    async fn feature(&self, listing_id: &str, until: u64, now: u64) -> Option<PromotionOrder> {
        let mut listings = self.listings.write().await;
        let listing = listings.get_mut(listing_id)?;
        listing.is_featured = true;
        listing.featured_until = Some(until);
        drop(listings);
        let order = PromotionOrder {
            id: Uuid::new_v4().to_string(),
            listing_id: listing_id.to_string(),
            status: PromotionOrderStatus::Active,
            placed_at: now,
            expires_at: until,
        };
        self.promotion_orders
            .write()
            .await
            .entry(listing_id.to_string())
            .or_default()
            .push(order.clone());
        Some(order)
    }

    async fn expire_featured(&self, now: u64) -> Vec<String> {
        let mut listings = self.listings.write().await;
        let mut expired = Vec::new();
        for listing in listings.values_mut() {
            if listing.is_featured && listing.featured_until.is_some_and(|until| until < now) {
                listing.is_featured = false;
                expired.push(listing.id.clone());
            }
        }
        drop(listings);
        if !expired.is_empty() {
            let mut all_orders = self.promotion_orders.write().await;
            for listing_id in &expired {
                let Some(orders) = all_orders.get_mut(listing_id) else {
                    continue;
                };
                for order in orders.iter_mut() {
                    if order.status == PromotionOrderStatus::Active {
                        order.status = PromotionOrderStatus::Completed;
                    }
                }
            }
        }
        expired
    }

    async fn promotion_orders(&self, listing_id: &str) -> Vec<PromotionOrder> {
        self.promotion_orders
            .read()
            .await
            .get(listing_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl ConversationRepo for HashMapMarketStorage {
    async fn add_message(&self, listing_id: &str, message: ListingMessage) {
        let mut conversations = self.conversations.write().await;
        let thread = conversations.entry(listing_id.to_string()).or_default();
        if thread.len() == MESSAGES_PER_CONVERSATION {
            thread.pop_front();
        }
        thread.push_back(message);
    }

    async fn messages(&self, listing_id: &str) -> Vec<ListingMessage> {
        self.conversations
            .read()
            .await
            .get(listing_id)
            .map(|thread| thread.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl ReviewRepo for HashMapMarketStorage {
    async fn add_review(&self, review: Review) {
        self.reviews
            .write()
            .await
            .entry(review.subject_id.clone())
            .or_default()
            .push(review);
    }

    async fn reviews_of(&self, subject_id: &str) -> Vec<Review> {
        self.reviews
            .read()
            .await
            .get(subject_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl ShippingRateRepo for HashMapMarketStorage {
    async fn rate_rows(&self) -> Vec<RateRow> {
        self.rate_rows.read().await.clone()
    }
}

fn default_rate_rows() -> Vec<RateRow> {
    vec![
        RateRow::Flat {
            label: String::from("Standard"),
            amount_cents: 599,
            eta_days: 5,
        },
        RateRow::Flat {
            label: String::from("Express"),
            amount_cents: 1499,
            eta_days: 2,
        },
        RateRow::FreeOver {
            label: String::from("Free standard"),
            threshold_cents: 5000,
            eta_days: 7,
        },
    ]
}
