use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::memory::HashMapMarketStorage;
use crate::{area_codes, auth, health, http, listings, messaging, reviews, shipping};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapMarketStorage>) -> Router {
    let cors_policy = http::cors_layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new().route("/passcode/decode", get(auth::handlers::decode_passcode));
    let messages_routes = Router::new().route(
        "/",
        get(messaging::handlers::messages).post(messaging::handlers::post_message),
    );
    let listings_routes = Router::new()
        .route("/", post(listings::handlers::listing::create))
        .route("/nearby", get(listings::handlers::listing::nearby))
        .route("/:listing-id", get(listings::handlers::listing::get))
        .route(
            "/:listing-id/feature",
            post(listings::handlers::listing::feature),
        )
        .nest("/:listing-id/messages", messages_routes);
    let users_routes = Router::new()
        .route("/:user-id/reviews", post(reviews::handlers::post_review))
        .route("/:user-id/reputation", get(reviews::handlers::reputation));
    let phone_routes = Router::new().route(
        "/check-location",
        post(area_codes::handlers::check_location),
    );
    let shipping_routes = Router::new().route("/quote", post(shipping::handlers::quote));
    let admin_routes = Router::new().route(
        "/featured-sweep",
        post(listings::handlers::listing::run_featured_sweep),
    );

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/listings", listings_routes)
        .nest("/users", users_routes)
        .nest("/phone", phone_routes)
        .nest("/shipping", shipping_routes)
        .nest("/admin", admin_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(http::middleware::trace_request))
}
