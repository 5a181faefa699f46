// File: uyabot-common/src/lib.rs

pub mod error;
pub mod models;
pub mod traits;

pub use error::{Endpoint, Error, FetchError, PublishError};
