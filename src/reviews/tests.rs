use crate::auth::tests::PASSCODE;
use crate::http::tests::test_server;
use crate::reviews::responses::{
    PostReviewError, PostReviewResponse, ReputationResponse,
};
use axum_test::TestServer;
use serde_json::json;

async fn post_review(server: &TestServer, rating: u8, comment: &str, location: Option<(f64, f64)>) {
    let mut body = json!({"rating": rating, "comment": comment});
    if let Some((lat, lng)) = location {
        body["location"] = json!({"lat": lat, "lng": lng});
    }
    let response = server
        .post("/users/reviewedUser/reviews")
        .add_header("Passcode", PASSCODE)
        .json(&body)
        .await;
    response.assert_status_ok();
    let response = response.json::<PostReviewResponse>();
    assert!(!response.error);
    assert!(response.review_id.is_some());
}

#[tokio::test]
async fn test_out_of_range_rating_is_rejected() {
    let server = test_server();

    for rating in [0, 6] {
        let response = server
            .post("/users/reviewedUser/reviews")
            .add_header("Passcode", PASSCODE)
            .json(&json!({"rating": rating, "comment": "Fine."}))
            .await;

        response.assert_status_ok();
        let response = response.json::<PostReviewResponse>();
        assert_eq!(response.error_code, Some(PostReviewError::InvalidRating));
    }
}

#[tokio::test]
async fn test_overlong_comment_is_rejected() {
    let server = test_server();

    let response = server
        .post("/users/reviewedUser/reviews")
        .add_header("Passcode", PASSCODE)
        .json(&json!({"rating": 4, "comment": "a".repeat(2001)}))
        .await;

    response.assert_status_ok();
    let response = response.json::<PostReviewResponse>();
    assert!(response.error);
    assert_eq!(response.error_code, Some(PostReviewError::CommentTooLong));
    assert_eq!(response.review_id, None);
}

#[tokio::test]
async fn test_reputation_averages_all_reviews() {
    let server = test_server();
    post_review(&server, 5, "Great seller.", None).await;
    post_review(&server, 3, "Slow to respond.", None).await;

    let response = server.get("/users/reviewedUser/reputation").await;

    response.assert_status_ok();
    response.assert_json(&ReputationResponse {
        error: false,
        average_rating: Some(4.0),
        review_count: 2,
    });
}

#[tokio::test]
async fn test_local_reputation_is_scoped_by_radius() {
    let server = test_server();
    post_review(&server, 5, "Met up downtown.", Some((40.7128, -74.0060))).await;
    post_review(&server, 4, "Met up in midtown.", Some((40.7549, -73.9840))).await;
    post_review(&server, 1, "Shipped cross-country, arrived broken.", Some((34.0522, -118.2437)))
        .await;

    let local = server
        .get("/users/reviewedUser/reputation")
        .add_query_param("lat", 40.7128)
        .add_query_param("lng", -74.0060)
        .add_query_param("radiusKm", 25.0)
        .await;

    local.assert_status_ok();
    local.assert_json(&ReputationResponse {
        error: false,
        average_rating: Some(4.5),
        review_count: 2,
    });
}

#[tokio::test]
async fn test_reputation_of_unreviewed_user_is_empty() {
    let server = test_server();

    let response = server.get("/users/nobodyReviewedMe/reputation").await;

    response.assert_status_ok();
    response.assert_json(&ReputationResponse {
        error: false,
        average_rating: None,
        review_count: 0,
    });
}
