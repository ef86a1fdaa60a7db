use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

/// The authenticated caller, decoded from the `Passcode` header.
pub struct User {
    pub public_id: String,
    pub private_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for User
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(raw_passcode) = parts.headers.get("Passcode") else {
            return Err(unauthorized(
                PasscodeExtractionReason::NoPasscodeHeaderProvided,
            ));
        };
        let Ok(raw_passcode) = raw_passcode.to_str() else {
            return Err(unauthorized(PasscodeExtractionReason::InvalidPasscode));
        };
        match passcode::decode(raw_passcode) {
            Ok(payload) => Ok(User {
                public_id: payload.public_id,
                private_id: payload.private_id,
            }),
            Err(_) => Err(unauthorized(PasscodeExtractionReason::InvalidPasscode)),
        }
    }
}

fn unauthorized(
    reason: PasscodeExtractionReason,
) -> (StatusCode, Json<PasscodeExtractionError>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}
