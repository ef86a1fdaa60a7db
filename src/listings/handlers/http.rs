use crate::app_context::{AppContext, RequestContext};
use crate::clock::unix_now;
use crate::geo;
use crate::geo::models::{LatLng, RadiusQuery};
use crate::http::query_params::NearbyQueryParams;
use crate::listings::consts::{
    DEFAULT_SEARCH_RADIUS_KM, MAX_DESCRIPTION_LENGTH, MAX_FEATURE_HOURS, MAX_TITLE_LENGTH,
    SECONDS_PER_HOUR,
};
use crate::listings::handlers::requests::{CreateListingRequest, FeatureListingRequest};
use crate::listings::handlers::responses::{
    CreateListingError, CreateListingResponse, FeatureListingError, FeatureListingResponse,
    GetListingResponse, ListingNotFoundError, NearbyListing, NearbyListingsResponse,
};
use crate::listings::models::Listing;
use crate::storage::interface::IMarketStorage;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

/// Seller-facing listing operations; callers are authenticated.
pub struct ListingHttpHandler<'a, MS: IMarketStorage> {
    app_context: AppContext<MS>,
    request_context: &'a RequestContext,
}

impl<'a, MS> ListingHttpHandler<'a, MS>
where
    MS: IMarketStorage,
{
    pub fn new(app_context: AppContext<MS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn create(&self, request: CreateListingRequest) -> CreateListingResponse {
        if request.title.trim().is_empty() {
            return CreateListingResponse {
                error: true,
                error_code: Some(CreateListingError::TitleEmpty),
                listing: None,
            };
        }
        if request.title.graphemes(true).count() > MAX_TITLE_LENGTH {
            return CreateListingResponse {
                error: true,
                error_code: Some(CreateListingError::TitleTooLong),
                listing: None,
            };
        }
        if request.description.graphemes(true).count() > MAX_DESCRIPTION_LENGTH {
            return CreateListingResponse {
                error: true,
                error_code: Some(CreateListingError::DescriptionTooLong),
                listing: None,
            };
        }
        let listing = Listing {
            id: Uuid::new_v4().to_string(),
            seller_id: self.request_context.public_id.clone(),
            title: request.title,
            description: request.description,
            price_cents: request.price_cents,
            location: request.location,
            is_featured: false,
            featured_until: None,
            created_at: unix_now(),
        };
        self.app_context.market.insert(listing.clone()).await;
        CreateListingResponse {
            error: false,
            error_code: None,
            listing: Some(listing),
        }
    }

    pub async fn feature(
        &self,
        listing_id: &str,
        request: FeatureListingRequest,
    ) -> FeatureListingResponse {
        let Some(listing) = self.app_context.market.get(listing_id).await else {
            return FeatureListingResponse {
                error: true,
                error_code: Some(FeatureListingError::ListingNotFound),
                order: None,
            };
        };
        if listing.seller_id != self.request_context.public_id {
            return FeatureListingResponse {
                error: true,
                error_code: Some(FeatureListingError::NotTheSeller),
                order: None,
            };
        }
        if request.hours == 0 || request.hours > MAX_FEATURE_HOURS {
            return FeatureListingResponse {
                error: true,
                error_code: Some(FeatureListingError::InvalidDuration),
                order: None,
            };
        }
        let now = unix_now();
        let until = now + request.hours * SECONDS_PER_HOUR;
        match self.app_context.market.feature(listing_id, until, now).await {
            Some(order) => FeatureListingResponse {
                error: false,
                error_code: None,
                order: Some(order),
            },
            None => FeatureListingResponse {
                error: true,
                error_code: Some(FeatureListingError::ListingNotFound),
                order: None,
            },
        }
    }
}

/// Unauthenticated listing reads: single fetch and radius search.
pub struct ListingQueryHttpHandler<MS: IMarketStorage> {
    app_context: AppContext<MS>,
}

impl<MS> ListingQueryHttpHandler<MS>
where
    MS: IMarketStorage,
{
    pub fn new(app_context: AppContext<MS>) -> Self {
        Self { app_context }
    }

    pub async fn get(&self, listing_id: &str) -> GetListingResponse {
        match self.app_context.market.get(listing_id).await {
            Some(listing) => GetListingResponse {
                error: false,
                error_code: None,
                listing: Some(listing),
            },
            None => GetListingResponse {
                error: true,
                error_code: Some(ListingNotFoundError::ListingNotFound),
                listing: None,
            },
        }
    }

    pub async fn nearby(&self, query: NearbyQueryParams) -> NearbyListingsResponse {
        let radius_query = RadiusQuery {
            center: LatLng {
                lat: query.lat,
                lng: query.lng,
            },
            radius_km: query.radius_km.unwrap_or(DEFAULT_SEARCH_RADIUS_KM),
        };
        let candidates = self.app_context.market.with_coordinates().await;
        let matches = geo::find_within_radius(candidates, |listing| listing.location, radius_query);
        NearbyListingsResponse {
            error: false,
            listings: matches
                .into_iter()
                .map(|geo_match| NearbyListing {
                    listing: geo_match.item,
                    distance_km: geo_match.distance_km,
                })
                .collect(),
        }
    }
}
