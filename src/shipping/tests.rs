use crate::geo::models::LatLng;
use crate::http::tests::test_server;
use crate::shipping::carrier::{CarrierError, CarrierQuote, MockCarrierClient};
use crate::shipping::compose_rates;
use crate::shipping::models::{RateRow, RateSource};
use crate::shipping::responses::ShippingQuoteResponse;
use serde_json::json;

const NEW_YORK: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.0060,
};
const LOS_ANGELES: LatLng = LatLng {
    lat: 34.0522,
    lng: -118.2437,
};

fn sample_rows() -> Vec<RateRow> {
    vec![
        RateRow::Flat {
            label: String::from("Standard"),
            amount_cents: 599,
            eta_days: 5,
        },
        RateRow::Flat {
            label: String::from("Express"),
            amount_cents: 1499,
            eta_days: 2,
        },
        RateRow::FreeOver {
            label: String::from("Free standard"),
            threshold_cents: 5000,
            eta_days: 7,
        },
    ]
}

#[test]
fn test_rates_are_sorted_cheapest_first() {
    let carrier_quotes = vec![CarrierQuote {
        service: String::from("Carrier ground"),
        amount_cents: 899,
        eta_days: 3,
    }];

    let rates = compose_rates(&sample_rows(), 10_000, &carrier_quotes);

    let amounts = rates
        .iter()
        .map(|rate| rate.amount_cents)
        .collect::<Vec<_>>();
    let mut sorted = amounts.clone();
    sorted.sort();
    assert_eq!(amounts, sorted);
    assert_eq!(rates[0].source, RateSource::Free);
    assert_eq!(rates[0].amount_cents, 0);
}

#[test]
fn test_free_rate_needs_the_threshold_cleared() {
    let below = compose_rates(&sample_rows(), 4999, &[]);
    let at_threshold = compose_rates(&sample_rows(), 5000, &[]);

    assert!(below.iter().all(|rate| rate.source != RateSource::Free));
    assert!(at_threshold
        .iter()
        .any(|rate| rate.source == RateSource::Free));
}

#[tokio::test]
async fn test_carrier_quotes_are_deterministic() {
    let first = MockCarrierClient
        .quote(NEW_YORK, LOS_ANGELES, 2_000)
        .await
        .unwrap();
    let second = MockCarrierClient
        .quote(NEW_YORK, LOS_ANGELES, 2_000)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn test_carrier_refuses_overweight_shipments() {
    let refusal = MockCarrierClient
        .quote(NEW_YORK, LOS_ANGELES, 30_001)
        .await;

    assert_eq!(refusal, Err(CarrierError::ShipmentTooHeavy));
}

#[tokio::test]
async fn test_quote_endpoint_includes_carrier_rates() {
    let server = test_server();

    let response = server
        .post("/shipping/quote")
        .json(&json!({
            "origin": {"lat": 40.7128, "lng": -74.0060},
            "destination": {"lat": 40.7549, "lng": -73.9840},
            "weightGrams": 1500,
            "subtotalCents": 2000,
        }))
        .await;

    response.assert_status_ok();
    let response = response.json::<ShippingQuoteResponse>();
    assert!(!response.error);
    assert!(response
        .rates
        .iter()
        .any(|rate| rate.source == RateSource::Carrier));
    // Subtotal is below the free-shipping threshold.
    assert!(response
        .rates
        .iter()
        .all(|rate| rate.source != RateSource::Free));
}

#[tokio::test]
async fn test_quote_endpoint_omits_carrier_rates_for_heavy_shipments() {
    let server = test_server();

    let response = server
        .post("/shipping/quote")
        .json(&json!({
            "origin": {"lat": 40.7128, "lng": -74.0060},
            "destination": {"lat": 34.0522, "lng": -118.2437},
            "weightGrams": 45_000,
            "subtotalCents": 8000,
        }))
        .await;

    response.assert_status_ok();
    let response = response.json::<ShippingQuoteResponse>();
    assert!(!response.error);
    assert!(!response.rates.is_empty());
    assert!(response
        .rates
        .iter()
        .all(|rate| rate.source != RateSource::Carrier));
}
