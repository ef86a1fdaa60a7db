use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

/// One entry of the static area-code table: a US area code and the rough
/// geography it has historically been tied to.
pub struct AreaCodeRecord {
    pub code: &'static str,
    pub state: &'static str,
    pub cities: &'static [&'static str],
    pub location: LatLng,
}

/// Best-effort report of a phone number checked against a claimed location.
/// This is a heuristic, not an authoritative verification: the table covers
/// only major metros, so most real-world numbers come back unrecognized.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLocationCheck {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_location: Option<bool>,
}

impl PhoneLocationCheck {
    pub(crate) fn malformed() -> Self {
        Self {
            is_valid: false,
            area_code: None,
            state: None,
            cities: None,
            distance_miles: None,
            matches_location: None,
        }
    }

    pub(crate) fn unrecognized(code: &str) -> Self {
        Self {
            area_code: Some(code.to_string()),
            ..Self::malformed()
        }
    }
}
