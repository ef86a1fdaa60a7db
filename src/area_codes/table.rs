use crate::area_codes::models::AreaCodeRecord;
use crate::geo::models::LatLng;

/// Hard-coded area-code geography, roughly 20 major metros. Immutable by
/// construction; updating it requires a code change.
pub static AREA_CODES: [AreaCodeRecord; 20] = [
    AreaCodeRecord {
        code: "212",
        state: "NY",
        cities: &["New York"],
        location: LatLng { lat: 40.7128, lng: -74.0060 },
    },
    AreaCodeRecord {
        code: "213",
        state: "CA",
        cities: &["Los Angeles"],
        location: LatLng { lat: 34.0522, lng: -118.2437 },
    },
    AreaCodeRecord {
        code: "312",
        state: "IL",
        cities: &["Chicago"],
        location: LatLng { lat: 41.8781, lng: -87.6298 },
    },
    AreaCodeRecord {
        code: "415",
        state: "CA",
        cities: &["San Francisco"],
        location: LatLng { lat: 37.7749, lng: -122.4194 },
    },
    AreaCodeRecord {
        code: "305",
        state: "FL",
        cities: &["Miami", "Key West"],
        location: LatLng { lat: 25.7617, lng: -80.1918 },
    },
    AreaCodeRecord {
        code: "617",
        state: "MA",
        cities: &["Boston", "Cambridge"],
        location: LatLng { lat: 42.3601, lng: -71.0589 },
    },
    AreaCodeRecord {
        code: "206",
        state: "WA",
        cities: &["Seattle"],
        location: LatLng { lat: 47.6062, lng: -122.3321 },
    },
    AreaCodeRecord {
        code: "702",
        state: "NV",
        cities: &["Las Vegas"],
        location: LatLng { lat: 36.1699, lng: -115.1398 },
    },
    AreaCodeRecord {
        code: "602",
        state: "AZ",
        cities: &["Phoenix"],
        location: LatLng { lat: 33.4484, lng: -112.0740 },
    },
    AreaCodeRecord {
        code: "303",
        state: "CO",
        cities: &["Denver", "Boulder"],
        location: LatLng { lat: 39.7392, lng: -104.9903 },
    },
    AreaCodeRecord {
        code: "404",
        state: "GA",
        cities: &["Atlanta"],
        location: LatLng { lat: 33.7490, lng: -84.3880 },
    },
    AreaCodeRecord {
        code: "512",
        state: "TX",
        cities: &["Austin"],
        location: LatLng { lat: 30.2672, lng: -97.7431 },
    },
    AreaCodeRecord {
        code: "713",
        state: "TX",
        cities: &["Houston"],
        location: LatLng { lat: 29.7604, lng: -95.3698 },
    },
    AreaCodeRecord {
        code: "214",
        state: "TX",
        cities: &["Dallas"],
        location: LatLng { lat: 32.7767, lng: -96.7970 },
    },
    AreaCodeRecord {
        code: "215",
        state: "PA",
        cities: &["Philadelphia"],
        location: LatLng { lat: 39.9526, lng: -75.1652 },
    },
    AreaCodeRecord {
        code: "202",
        state: "DC",
        cities: &["Washington"],
        location: LatLng { lat: 38.9072, lng: -77.0369 },
    },
    AreaCodeRecord {
        code: "503",
        state: "OR",
        cities: &["Portland", "Salem"],
        location: LatLng { lat: 45.5152, lng: -122.6784 },
    },
    AreaCodeRecord {
        code: "612",
        state: "MN",
        cities: &["Minneapolis"],
        location: LatLng { lat: 44.9778, lng: -93.2650 },
    },
    AreaCodeRecord {
        code: "314",
        state: "MO",
        cities: &["St. Louis"],
        location: LatLng { lat: 38.6270, lng: -90.1994 },
    },
    AreaCodeRecord {
        code: "504",
        state: "LA",
        cities: &["New Orleans"],
        location: LatLng { lat: 29.9511, lng: -90.0715 },
    },
];
