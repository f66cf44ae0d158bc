//! QuoteForge API Client
//!
//! HTTP client for the collaborator services: authentication, company
//! profile storage and logo upload.

mod client;
mod error;
mod upload;

pub use client::{ApiClient, ClientConfig};
pub use error::{ApiError, ApiResult};
pub use upload::{validate_logo, MAX_LOGO_BYTES};
