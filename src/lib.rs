// src/lib.rs
//! Client for the SkillSnap resume analysis API.
//!
//! [`App`] holds one session: the resume text, the derived control states,
//! the result panels and the banner slot. Every backend exchange goes through
//! the [`Backend`] trait; [`ServiceClient`] is the HTTP implementation.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod environment;
pub mod errors;
pub mod gate;
pub mod notify;
pub mod panels;
pub mod render;
pub mod session;
pub mod types;
pub mod upload;
pub mod utils;

pub use app::{Action, App};
pub use config::ClientConfig;
pub use crate::core::{Backend, ServiceClient};
pub use errors::{ClientError, ClientResult};

/// Log through `tracing` at the given level.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
