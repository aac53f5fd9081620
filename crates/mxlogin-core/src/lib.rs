//! Core mxlogin library (config, credentials, login client, logging).

pub mod client;
pub mod config;
pub mod credentials;
pub mod logging;
