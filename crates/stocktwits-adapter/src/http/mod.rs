/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod streams;
pub mod sync;
pub mod trending;
pub mod watchlists;

pub use error::{Result, StocktwitsError};

pub use client::{ClientConfig, StocktwitsClient};
