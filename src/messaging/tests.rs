use crate::auth::tests::PASSCODE;
use crate::clock::unix_now;
use crate::http::tests::test_server_with_context;
use crate::listings::models::Listing;
use crate::messaging::responses::{
    ListingMessagesError, ListingMessagesResponse, PostMessageError, PostMessageResponse,
};
use crate::storage::interface::ListingRepo;
use crate::storage::memory::HashMapMarketStorage;
use axum_test::TestServer;
use serde_json::json;

async fn server_with_listing() -> TestServer {
    let (server, app_context) = test_server_with_context();
    insert_listing(&app_context.market).await;
    server
}

async fn insert_listing(storage: &HashMapMarketStorage) {
    storage
        .insert(Listing {
            id: String::from("bike-listing"),
            seller_id: String::from("someSeller"),
            title: String::from("Old bike"),
            description: String::from("Rusty but trusty."),
            price_cents: 4500,
            location: None,
            is_featured: false,
            featured_until: None,
            created_at: unix_now(),
        })
        .await;
}

#[tokio::test]
async fn test_post_and_list_messages() {
    let server = server_with_listing().await;

    for content in ["Is this still available?", "Would you take 40?"] {
        let posted = server
            .post("/listings/bike-listing/messages")
            .add_header("Passcode", PASSCODE)
            .json(&json!({"content": content}))
            .await;
        posted.assert_status_ok();
        posted.assert_json(&PostMessageResponse {
            error: false,
            error_code: None,
        });
    }

    let listed = server
        .get("/listings/bike-listing/messages")
        .add_header("Passcode", PASSCODE)
        .await;

    listed.assert_status_ok();
    let listed = listed.json::<ListingMessagesResponse>();
    let messages = listed.messages.expect("Expected the message log.");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "Is this still available?");
    assert_eq!(messages[0].author_id, "testPublicId");
    assert_eq!(messages[1].content, "Would you take 40?");
}

#[tokio::test]
async fn test_message_to_unknown_listing_is_rejected() {
    let (server, _app_context) = test_server_with_context();

    let response = server
        .post("/listings/no-such-listing/messages")
        .add_header("Passcode", PASSCODE)
        .json(&json!({"content": "Hello?"}))
        .await;

    response.assert_status_ok();
    response.assert_json(&PostMessageResponse {
        error: true,
        error_code: Some(PostMessageError::ListingNotFound),
    });

    let listed = server
        .get("/listings/no-such-listing/messages")
        .add_header("Passcode", PASSCODE)
        .await;
    let listed = listed.json::<ListingMessagesResponse>();
    assert_eq!(
        listed.error_code,
        Some(ListingMessagesError::ListingNotFound)
    );
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let server = server_with_listing().await;

    let response = server
        .post("/listings/bike-listing/messages")
        .add_header("Passcode", PASSCODE)
        .json(&json!({"content": "   "}))
        .await;

    response.assert_json(&PostMessageResponse {
        error: true,
        error_code: Some(PostMessageError::MessageEmpty),
    });
}

#[tokio::test]
async fn test_overlong_message_is_rejected() {
    let server = server_with_listing().await;

    let response = server
        .post("/listings/bike-listing/messages")
        .add_header("Passcode", PASSCODE)
        .json(&json!({"content": "a".repeat(1001)}))
        .await;

    response.assert_json(&PostMessageResponse {
        error: true,
        error_code: Some(PostMessageError::MessageTooLong),
    });
}

#[tokio::test]
async fn test_messages_require_passcode() {
    let server = server_with_listing().await;

    let response = server
        .post("/listings/bike-listing/messages")
        .json(&json!({"content": "Anonymous ping."}))
        .await;

    response.assert_status_unauthorized();
}
