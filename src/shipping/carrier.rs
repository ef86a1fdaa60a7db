use crate::geo;
use crate::geo::models::LatLng;

pub const MAX_SHIPMENT_WEIGHT_GRAMS: u64 = 30_000;

#[derive(Debug, PartialEq)]
pub enum CarrierError {
    ShipmentTooHeavy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarrierQuote {
    pub service: String,
    pub amount_cents: u64,
    pub eta_days: u64,
}

/// Stand-in for the carrier's rating API. Prices are a deterministic
/// function of great-circle distance and weight, so quotes are stable
/// across calls with the same inputs.
pub struct MockCarrierClient;

impl MockCarrierClient {
    pub async fn quote(
        &self,
        origin: LatLng,
        destination: LatLng,
        weight_grams: u64,
    ) -> Result<Vec<CarrierQuote>, CarrierError> {
        if weight_grams > MAX_SHIPMENT_WEIGHT_GRAMS {
            return Err(CarrierError::ShipmentTooHeavy);
        }
        let distance_km = geo::distance_km(origin, destination);
        let weight_kg = weight_grams as f64 / 1000.0;
        let ground = CarrierQuote {
            service: String::from("Carrier ground"),
            amount_cents: (495.0 + distance_km * 0.8 + weight_kg * 120.0) as u64,
            eta_days: 2 + (distance_km / 800.0) as u64,
        };
        let air = CarrierQuote {
            service: String::from("Carrier air"),
            amount_cents: (1295.0 + distance_km * 1.9 + weight_kg * 260.0) as u64,
            eta_days: 2,
        };
        Ok(vec![ground, air])
    }
}
