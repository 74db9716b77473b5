//! Reusable UI components

mod access;
mod admin_layout;
mod admin_nav;
mod list;
mod loading;
mod notice;

pub use access::*;
pub use admin_layout::*;
pub use admin_nav::*;
pub use list::*;
pub use loading::*;
pub use notice::*;
