//! Application routes

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::{
    AdminAdCreate, AdminAds, AdminCategories, AdminDashboard, AdminLogin, AdminPermissions,
    AdminPostEdit, AdminPosts, AdminRoleRequests, AdminUsers, Home, NotFound,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    AdminLogin {},

    #[route("/")]
    Home {},

    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminDashboard {},

            #[route("/categories")]
            AdminCategories {},

            #[route("/posts")]
            AdminPosts {},

            #[route("/posts/:id")]
            AdminPostEdit { id: String },

            #[route("/ads")]
            AdminAds {},

            #[route("/ads/new")]
            AdminAdCreate {},

            #[route("/users")]
            AdminUsers {},

            #[route("/permissions")]
            AdminPermissions {},

            #[route("/role-requests")]
            AdminRoleRequests {},
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
