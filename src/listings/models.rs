use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub price_cents: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_until: Option<u64>,
    #[serde(default)]
    pub created_at: u64,
}

/// A paid promotion of a listing. Created when the seller features the
/// listing, completed by the expiry sweep once `expires_at` has passed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionOrder {
    pub id: String,
    pub listing_id: String,
    pub status: PromotionOrderStatus,
    pub placed_at: u64,
    pub expires_at: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PromotionOrderStatus {
    Active,
    Completed,
}
