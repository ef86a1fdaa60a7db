use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// The user being reviewed.
    pub subject_id: String,
    pub author_id: String,
    pub rating: u8,
    pub comment: String,
    /// Where the transaction took place, if the reviewer shared it. Feeds
    /// the distance-scoped reputation aggregate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    pub created_at: u64,
}
