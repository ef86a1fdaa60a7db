use crate::area_codes::models::{AreaCodeRecord, PhoneLocationCheck};
use crate::geo;
use crate::geo::models::LatLng;

pub mod handlers;
pub mod models;
pub mod requests;
pub mod table;
#[cfg(test)]
pub mod tests;

pub const DEFAULT_MATCH_THRESHOLD_MILES: f64 = 50.0;

/// Normalizes a US phone number to its 10 significant digits. An 11-digit
/// number with a leading country code `1` is reduced to 10; everything else
/// that isn't exactly 10 digits is malformed.
pub fn normalize(phone: &str) -> Option<String> {
    let digits = phone
        .chars()
        .filter(|symbol| symbol.is_ascii_digit())
        .collect::<String>();
    match digits.len() {
        10 => Some(digits),
        11 if digits.starts_with('1') => Some(digits[1..].to_string()),
        _ => None,
    }
}

/// Extracts the area code from a normalized 10-digit number. Area codes
/// never start with `0` or `1`.
pub fn area_code_of(normalized: &str) -> Option<&str> {
    let code = &normalized[..3];
    code.starts_with(|symbol: char| ('2'..='9').contains(&symbol))
        .then_some(code)
}

pub fn lookup(code: &str) -> Option<&'static AreaCodeRecord> {
    table::AREA_CODES.iter().find(|record| record.code == code)
}

/// Checks a phone number's area-code geography against a claimed location.
/// Malformed numbers and unrecognized area codes come back with
/// `is_valid: false`; this never fails louder than that.
pub fn check(phone: &str, claimed: LatLng, threshold_miles: f64) -> PhoneLocationCheck {
    let Some(normalized) = normalize(phone) else {
        return PhoneLocationCheck::malformed();
    };
    let Some(code) = area_code_of(&normalized) else {
        return PhoneLocationCheck::malformed();
    };
    let Some(record) = lookup(code) else {
        return PhoneLocationCheck::unrecognized(code);
    };
    let distance_miles = geo::distance_miles(record.location, claimed);
    PhoneLocationCheck {
        is_valid: true,
        area_code: Some(code.to_string()),
        state: Some(record.state.to_string()),
        cities: Some(record.cities.iter().map(|city| city.to_string()).collect()),
        distance_miles: Some(distance_miles),
        matches_location: Some(distance_miles <= threshold_miles),
    }
}
