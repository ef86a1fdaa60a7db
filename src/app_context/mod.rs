use crate::storage::interface::IMarketStorage;
use crate::storage::memory::HashMapMarketStorage;

#[derive(Clone, Default)]
pub struct AppContext<MS: IMarketStorage> {
    pub market: MS,
}

pub struct RequestContext {
    pub public_id: String,
    pub private_id: String,
}

pub fn init() -> AppContext<HashMapMarketStorage> {
    AppContext::default()
}
