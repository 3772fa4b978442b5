// Adapters layer: the upstream HTTP client and the inbound HTTP server.

pub mod http;
pub mod server;
