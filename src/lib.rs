//! Translation gateway: validates translation requests and dispatches them to
//! an ordered chain of providers, falling back when an upstream API fails.

pub mod config;
pub mod languages;
pub mod models;
pub mod server;
pub mod translation;
