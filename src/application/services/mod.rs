//! Application services
//!
//! Services own application state and expose it to the transport layer.

pub mod config_store;

pub use config_store::ConfigStore;
