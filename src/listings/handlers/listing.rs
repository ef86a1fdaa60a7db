use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::User;
use crate::http::query_params::NearbyQueryParams;
use crate::listings::handlers::http::{ListingHttpHandler, ListingQueryHttpHandler};
use crate::listings::handlers::requests::{CreateListingRequest, FeatureListingRequest};
use crate::listings::handlers::responses::{
    CreateListingResponse, FeatureListingResponse, FeaturedSweepResponse, GetListingResponse,
    NearbyListingsResponse,
};
use crate::listings::sweep;
use crate::storage::memory::HashMapMarketStorage;
use axum::extract::{Path, Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    user: User,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
    Json(request): Json<CreateListingRequest>,
) -> Json<CreateListingResponse> {
    let request_context = RequestContext {
        public_id: user.public_id,
        private_id: user.private_id,
    };
    let response = ListingHttpHandler::new(app_context, &request_context)
        .create(request)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn get(
    Path(listing_id): Path<String>,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
) -> Json<GetListingResponse> {
    let response = ListingQueryHttpHandler::new(app_context)
        .get(&listing_id)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn nearby(
    Query(query): Query<NearbyQueryParams>,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
) -> Json<NearbyListingsResponse> {
    let response = ListingQueryHttpHandler::new(app_context).nearby(query).await;
    Json(response)
}

#[axum::debug_handler]
pub async fn feature(
    user: User,
    Path(listing_id): Path<String>,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
    Json(request): Json<FeatureListingRequest>,
) -> Json<FeatureListingResponse> {
    let request_context = RequestContext {
        public_id: user.public_id,
        private_id: user.private_id,
    };
    let response = ListingHttpHandler::new(app_context, &request_context)
        .feature(&listing_id, request)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn run_featured_sweep(
    _user: User,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
) -> Json<FeaturedSweepResponse> {
    let expired_listings = sweep::sweep_once(&app_context.market).await;
    Json(FeaturedSweepResponse {
        error: false,
        expired_listings: expired_listings as u64,
    })
}
