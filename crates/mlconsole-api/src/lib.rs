mod client;
mod error;
mod traits;
pub use client::BackendClient;
pub use error::ApiError;
pub use traits::MlBackend;
