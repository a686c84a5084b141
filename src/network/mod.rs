pub mod http_api;
pub mod server;
pub mod session;
