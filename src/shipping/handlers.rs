use crate::app_context::AppContext;
use crate::shipping::carrier::MockCarrierClient;
use crate::shipping::compose_rates;
use crate::shipping::requests::ShippingQuoteRequest;
use crate::shipping::responses::ShippingQuoteResponse;
use crate::storage::interface::ShippingRateRepo;
use crate::storage::memory::HashMapMarketStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn quote(
    State(app_context): State<AppContext<HashMapMarketStorage>>,
    Json(request): Json<ShippingQuoteRequest>,
) -> Json<ShippingQuoteResponse> {
    let rows = app_context.market.rate_rows().await;
    let carrier_quotes = match MockCarrierClient
        .quote(request.origin, request.destination, request.weight_grams)
        .await
    {
        Ok(quotes) => quotes,
        Err(refusal) => {
            tracing::warn!(
                task = "carrier_quote",
                refusal = ?refusal,
                weight_grams = request.weight_grams,
                "Carrier declined to quote the shipment.",
            );
            Vec::new()
        }
    };
    let rates = compose_rates(&rows, request.subtotal_cents, &carrier_quotes);
    Json(ShippingQuoteResponse {
        error: false,
        rates,
    })
}
