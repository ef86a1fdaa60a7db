use crate::app_context::AppContext;
use crate::cli::tests::fake_args;
use crate::http::router;
use crate::storage::memory::HashMapMarketStorage;
use crate::{app_context, auth};
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    let (server, _app_context) = test_server_with_context();
    server
}

/// Like [`test_server`], but also hands back the context serving the
/// requests, for tests that need to poke at storage directly.
pub fn test_server_with_context() -> (TestServer, AppContext<HashMapMarketStorage>) {
    let args = fake_args();
    auth::init(&args);
    let app_context = app_context::init();
    let router = router::new(&args, app_context.clone());
    let server = TestServer::new(router).expect("Failed to run test server.");
    (server, app_context)
}
