use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair in degrees. Values are taken as-is; out-of-range
/// coordinates are not rejected anywhere in the crate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct RadiusQuery {
    pub center: LatLng,
    pub radius_km: f64,
}

/// An item that passed a radius filter, augmented with its computed distance
/// from the query center.
#[derive(Clone, Debug)]
pub struct GeoMatch<T> {
    pub item: T,
    pub distance_km: f64,
}
