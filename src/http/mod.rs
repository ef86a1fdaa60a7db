use crate::cli::Args;
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub mod middleware;
pub mod query_params;
pub mod router;
#[cfg(test)]
pub mod tests;

pub fn cors_layer(args: &Args) -> CorsLayer {
    let origins = args
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .expect("Failed to parse an allowed CORS origin.")
        })
        .collect::<Vec<HeaderValue>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            "User-Agent".parse().unwrap(),
            "Sec-Fetch-Mode".parse().unwrap(),
            "Referer".parse().unwrap(),
            "Origin".parse().unwrap(),
            "Access-Control-Request-Method".parse().unwrap(),
            "Access-Control-Request-Headers".parse().unwrap(),
            "content-type".parse().unwrap(),
            "Passcode".parse().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
