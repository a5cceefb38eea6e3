//! HTTP/JSON surface over the inventory service.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod shutdown;

pub use error::ApiError;
pub use router::build_router;
pub use server::{ApiServer, ServerError, ServerHandle};
