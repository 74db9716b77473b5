pub mod ads;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod permissions;
pub mod posts;
pub mod role_requests;
pub mod users;
