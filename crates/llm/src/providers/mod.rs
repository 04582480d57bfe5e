//! Service provider implementations.

pub mod replay;

pub use replay::ReplayClient;
