//! Cardioscore Server
//!
//! HTTP front end for the heart-disease classifier. The classifier artifact
//! is loaded once at startup, wrapped in [`state::AppState`], and injected
//! into handlers through axum state; no global state exists.

pub mod cli;
pub mod config;
pub mod server;
pub mod state;

pub use cli::*;
pub use config::*;
pub use server::*;
pub use state::*;
