use crate::area_codes::models::PhoneLocationCheck;
use crate::area_codes::{check, normalize, DEFAULT_MATCH_THRESHOLD_MILES};
use crate::geo::models::LatLng;
use crate::http::tests::test_server;
use serde_json::json;

const NEW_YORK: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.0060,
};

#[test]
fn test_valid_number_with_matching_location() {
    let report = check("2125551234", NEW_YORK, DEFAULT_MATCH_THRESHOLD_MILES);

    assert!(report.is_valid);
    assert_eq!(report.area_code.as_deref(), Some("212"));
    assert_eq!(report.state.as_deref(), Some("NY"));
    assert_eq!(report.matches_location, Some(true));
    assert!(report.distance_miles.unwrap() < 1.0);
}

#[test]
fn test_valid_number_with_distant_location() {
    let los_angeles = LatLng {
        lat: 34.0522,
        lng: -118.2437,
    };

    let report = check("2125551234", los_angeles, DEFAULT_MATCH_THRESHOLD_MILES);

    assert!(report.is_valid);
    assert_eq!(report.matches_location, Some(false));
    assert!(report.distance_miles.unwrap() > 2000.0);
}

#[test]
fn test_bad_area_code_format_is_invalid() {
    let report = check("0005551234", NEW_YORK, DEFAULT_MATCH_THRESHOLD_MILES);

    assert_eq!(report, PhoneLocationCheck::malformed());
}

#[test]
fn test_leading_country_code_is_stripped() {
    let with_country_code = check("12125551234", NEW_YORK, DEFAULT_MATCH_THRESHOLD_MILES);
    let without = check("2125551234", NEW_YORK, DEFAULT_MATCH_THRESHOLD_MILES);

    assert_eq!(with_country_code, without);
    assert!(with_country_code.is_valid);
}

#[test]
fn test_formatted_number_is_normalized() {
    assert_eq!(normalize("(212) 555-1234").as_deref(), Some("2125551234"));
    assert_eq!(normalize("+1 212 555 1234").as_deref(), Some("2125551234"));
    assert_eq!(normalize("555-1234"), None);
}

#[test]
fn test_unrecognized_area_code_is_invalid() {
    let report = check("9995551234", NEW_YORK, DEFAULT_MATCH_THRESHOLD_MILES);

    assert!(!report.is_valid);
    assert_eq!(report.area_code.as_deref(), Some("999"));
    assert_eq!(report.state, None);
}

#[tokio::test]
async fn test_check_location_endpoint() {
    let server = test_server();

    let response = server
        .post("/phone/check-location")
        .json(&json!({
            "phone": "2125551234",
            "lat": 40.7128,
            "lng": -74.0060,
        }))
        .await;

    response.assert_status_ok();
    let report = response.json::<PhoneLocationCheck>();
    assert!(report.is_valid);
    assert_eq!(report.state.as_deref(), Some("NY"));
    assert_eq!(report.matches_location, Some(true));
}
