use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuoteRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub weight_grams: u64,
    pub subtotal_cents: u64,
}
