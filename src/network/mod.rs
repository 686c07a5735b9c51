//! Network layer - async HTTP execution against the expense API

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;
