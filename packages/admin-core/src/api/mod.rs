//! REST API access

mod client;
mod transport;

pub use client::*;
pub use transport::*;
