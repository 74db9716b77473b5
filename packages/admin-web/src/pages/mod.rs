//! Admin pages

mod ads;
mod categories;
mod dashboard;
mod login;
mod not_found;
mod permissions;
mod posts;
mod role_requests;
mod users;

pub use ads::*;
pub use categories::*;
pub use dashboard::*;
pub use login::*;
pub use not_found::*;
pub use permissions::*;
pub use posts::*;
pub use role_requests::*;
pub use users::*;
