// src/core/mod.rs
//! Backend access: the endpoint contract and its HTTP implementation

pub mod backend;
#[cfg(test)]
pub mod fake_backend;
pub mod service_client;

pub use backend::Backend;
pub use service_client::ServiceClient;
