use serde::{Deserialize, Serialize};

/// A configured shipping rate row. Flat rows always produce a candidate;
/// free rows only when the order subtotal clears their threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RateRow {
    Flat {
        label: String,
        amount_cents: u64,
        eta_days: u64,
    },
    FreeOver {
        label: String,
        threshold_cents: u64,
        eta_days: u64,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCandidate {
    pub label: String,
    pub amount_cents: u64,
    pub eta_days: u64,
    pub source: RateSource,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateSource {
    Flat,
    Free,
    Carrier,
}
