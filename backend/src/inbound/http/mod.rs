//! HTTP inbound adapter exposing the task REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod tasks;

pub use error::ApiResult;
