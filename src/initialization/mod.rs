//! Initialization of shared resources: logger and HTTP clients.

mod client;
mod logger;

pub use client::{init_clients, HttpClients};
pub use logger::init_logger_with;
