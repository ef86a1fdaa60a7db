use crate::geo::models::{GeoMatch, LatLng, RadiusQuery};

pub mod models;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MILES_PER_KM: f64 = 0.621371;

/// Great-circle (Haversine) distance between two points, in kilometers.
pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn distance_miles(from: LatLng, to: LatLng) -> f64 {
    distance_km(from, to) * MILES_PER_KM
}

/// Linear-scan radius filter. Keeps items whose coordinates lie within
/// `query.radius_km` of the center, skips items with no coordinates, and
/// returns matches sorted ascending by distance. A negative radius matches
/// nothing; no invariant on the radius is enforced.
pub fn find_within_radius<T>(
    items: impl IntoIterator<Item = T>,
    coordinates_of: impl Fn(&T) -> Option<LatLng>,
    query: RadiusQuery,
) -> Vec<GeoMatch<T>> {
    let mut matches = items
        .into_iter()
        .filter_map(|item| {
            let location = coordinates_of(&item)?;
            let distance_km = distance_km(query.center, location);
            (distance_km <= query.radius_km).then_some(GeoMatch { item, distance_km })
        })
        .collect::<Vec<_>>();
    matches.sort_by(|lhs, rhs| lhs.distance_km.total_cmp(&rhs.distance_km));
    matches
}
