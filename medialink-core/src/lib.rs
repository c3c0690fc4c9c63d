pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod resolver;

pub use config::Config;
pub use error::{Error, Result};
