use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMessage {
    pub author_id: String,
    pub content: String,
    pub sent_at: u64,
}
