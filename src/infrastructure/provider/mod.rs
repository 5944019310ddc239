pub mod http;
pub mod snapshot;
