//! Session wiring for the browser

mod context;
#[cfg(feature = "web")]
mod cookie;

pub use context::*;
#[cfg(feature = "web")]
pub use cookie::CookieStore;
