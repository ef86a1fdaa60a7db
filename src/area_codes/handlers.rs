use crate::area_codes::models::PhoneLocationCheck;
use crate::area_codes::requests::PhoneLocationCheckRequest;
use crate::area_codes::DEFAULT_MATCH_THRESHOLD_MILES;
use crate::geo::models::LatLng;
use axum::response::Json;

#[axum::debug_handler]
pub async fn check_location(
    Json(request): Json<PhoneLocationCheckRequest>,
) -> Json<PhoneLocationCheck> {
    let claimed = LatLng {
        lat: request.lat,
        lng: request.lng,
    };
    let threshold_miles = request
        .threshold_miles
        .unwrap_or(DEFAULT_MATCH_THRESHOLD_MILES);
    Json(crate::area_codes::check(&request.phone, claimed, threshold_miles))
}
