use crate::shipping::models::RateCandidate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuoteResponse {
    pub error: bool,
    /// Candidate rates, cheapest first. Carrier rates are simply absent
    /// when the carrier declines the shipment.
    pub rates: Vec<RateCandidate>,
}
