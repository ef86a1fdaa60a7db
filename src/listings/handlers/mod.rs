pub mod http;
pub mod listing;
pub mod requests;
pub mod responses;
