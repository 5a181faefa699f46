// src/lib.rs

pub mod config;
pub mod fetch;
pub mod http;
pub mod platforms;
pub mod publisher;
pub mod render;
pub mod tasks;

pub use config::StatusConfig;
pub use http::{DefaultHttpClient, HttpClient, HttpResponse};
pub use uyabot_common::error::Error;
