//! Admin navigation component

use admin_core::Capability;
use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::use_session;

/// Admin navigation bar. Links the current role cannot use are hidden.
#[component]
pub fn AdminNav() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let links = [
        (Route::AdminDashboard {}, "Dashboard", Capability::ViewDashboard),
        (Route::AdminCategories {}, "Categories", Capability::ManageCategories),
        (Route::AdminPosts {}, "Posts", Capability::ManagePosts),
        (Route::AdminAds {}, "Ads", Capability::ManageAds),
        (Route::AdminUsers {}, "Users", Capability::ManageUsers),
        (Route::AdminPermissions {}, "Permissions", Capability::ManagePermissions),
        (Route::AdminRoleRequests {}, "Role Requests", Capability::ReviewRoleRequests),
    ];

    let handle_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            navigator.push(Route::AdminLogin {});
        }
    };

    let name = session.display_name().unwrap_or_default();
    let role = session.role().unwrap_or_default();

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    span { class: "text-xl font-bold text-indigo-700", "City Insights Admin" }

                    div {
                        class: "hidden md:flex items-center gap-1",
                        for (to, label, capability) in links {
                            if session.permits(capability) {
                                NavLink { to, label }
                            }
                        }
                    }
                }

                div {
                    class: "flex items-center gap-4",
                    span {
                        class: "text-sm text-gray-600",
                        "{name} "
                        span { class: "text-xs uppercase text-gray-400", "{role}" }
                    }
                    button {
                        class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-indigo-100 text-indigo-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
