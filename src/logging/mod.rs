use crate::cli::Args;
use crate::logging::quickwit::QuickwitLayer;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

pub fn init(args: &Args) {
    let quickwit_layer = QuickwitLayer::builder(args.quickwit_url.clone())
        .marker_field("task")
        .route("http_request", "http_requests")
        .route("expiry_sweep", "expiry_sweeps")
        .route("carrier_quote", "carrier_quotes")
        .build();
    let env_filter = EnvFilter::default().add_directive("bazaar_server=info".parse().unwrap());
    tracing_subscriber::registry()
        .with(quickwit_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
