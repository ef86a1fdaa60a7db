use crate::app_context::AppContext;
use crate::auth::extractors::User;
use crate::clock::unix_now;
use crate::messaging::consts::MAX_MESSAGE_LENGTH;
use crate::messaging::models::ListingMessage;
use crate::messaging::requests::PostMessageRequest;
use crate::messaging::responses::{
    ListingMessagesError, ListingMessagesResponse, PostMessageError, PostMessageResponse,
};
use crate::storage::interface::{ConversationRepo, ListingRepo};
use crate::storage::memory::HashMapMarketStorage;
use axum::extract::{Path, State};
use axum::response::Json;
use unicode_segmentation::UnicodeSegmentation;

#[axum::debug_handler]
pub async fn post_message(
    user: User,
    Path(listing_id): Path<String>,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
    Json(request): Json<PostMessageRequest>,
) -> Json<PostMessageResponse> {
    if !app_context.market.exists(&listing_id).await {
        return Json(PostMessageResponse {
            error: true,
            error_code: Some(PostMessageError::ListingNotFound),
        });
    }
    if request.content.trim().is_empty() {
        return Json(PostMessageResponse {
            error: true,
            error_code: Some(PostMessageError::MessageEmpty),
        });
    }
    if request.content.graphemes(true).count() > MAX_MESSAGE_LENGTH {
        return Json(PostMessageResponse {
            error: true,
            error_code: Some(PostMessageError::MessageTooLong),
        });
    }
    let message = ListingMessage {
        author_id: user.public_id,
        content: request.content,
        sent_at: unix_now(),
    };
    app_context.market.add_message(&listing_id, message).await;
    Json(PostMessageResponse {
        error: false,
        error_code: None,
    })
}

#[axum::debug_handler]
pub async fn messages(
    _user: User,
    Path(listing_id): Path<String>,
    State(app_context): State<AppContext<HashMapMarketStorage>>,
) -> Json<ListingMessagesResponse> {
    if !app_context.market.exists(&listing_id).await {
        return Json(ListingMessagesResponse {
            error: true,
            error_code: Some(ListingMessagesError::ListingNotFound),
            messages: None,
        });
    }
    Json(ListingMessagesResponse {
        error: false,
        error_code: None,
        messages: Some(app_context.market.messages(&listing_id).await),
    })
}
