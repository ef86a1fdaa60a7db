use crate::app_context::AppContext;
use crate::auth::extractors::User;
use crate::clock::unix_now;
use crate::geo;
use crate::geo::models::{LatLng, RadiusQuery};
use crate::http::query_params::ReputationQueryParams;
use crate::reviews::consts::{
    DEFAULT_REPUTATION_RADIUS_KM, MAX_COMMENT_LENGTH, MAX_RATING, MIN_RATING,
};
use crate::reviews::models::Review;
use crate::reviews::requests::PostReviewRequest;
use crate::reviews::responses::{PostReviewError, PostReviewResponse, ReputationResponse};
use crate::storage::interface::ReviewRepo;
use crate::storage::memory::HashMapMarketStorage;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

#[axum::debug_handler]
pub async fn post_review(
    user: User,
    Path(subject_id): Path<String>,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
    Json(request): Json<PostReviewRequest>,
) -> Json<PostReviewResponse> {
    if !(MIN_RATING..=MAX_RATING).contains(&request.rating) {
        return Json(PostReviewResponse {
            error: true,
            error_code: Some(PostReviewError::InvalidRating),
            review_id: None,
        });
    }
    if request.comment.graphemes(true).count() > MAX_COMMENT_LENGTH {
        return Json(PostReviewResponse {
            error: true,
            error_code: Some(PostReviewError::CommentTooLong),
            review_id: None,
        });
    }
    let review = Review {
        id: Uuid::new_v4().to_string(),
        subject_id,
        author_id: user.public_id,
        rating: request.rating,
        comment: request.comment,
        location: request.location,
        created_at: unix_now(),
    };
    let review_id = review.id.clone();
    app_context.market.add_review(review).await;
    Json(PostReviewResponse {
        error: false,
        error_code: None,
        review_id: Some(review_id),
    })
}

/// Reputation aggregate over a user's reviews. With `lat`/`lng` query
/// params the aggregate is scoped to reviews within the radius ("local
/// reputation"); without them it covers all reviews.
#[axum::debug_handler]
pub async fn reputation(
    Path(subject_id): Path<String>,
    Query(params): Query<ReputationQueryParams>,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
) -> Json<ReputationResponse> {
    let reviews = app_context.market.reviews_of(&subject_id).await;
    let scoped = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => {
            let radius_query = RadiusQuery {
                center: LatLng { lat, lng },
                radius_km: params.radius_km.unwrap_or(DEFAULT_REPUTATION_RADIUS_KM),
            };
            geo::find_within_radius(reviews, |review| review.location, radius_query)
                .into_iter()
                .map(|geo_match| geo_match.item)
                .collect()
        }
        _ => reviews,
    };
    let review_count = scoped.len() as u64;
    let average_rating = (review_count > 0).then(|| {
        scoped.iter().map(|review| review.rating as f64).sum::<f64>() / review_count as f64
    });
    Json(ReputationResponse {
        error: false,
        average_rating,
        review_count,
    })
}
