//! Admin layout wrapper with session protection

use dioxus::prelude::*;

use super::AdminNav;
use crate::routes::Route;
use crate::session::use_session;

/// Layout for every screen behind login. Anonymous visitors (including a
/// session just ended by a 401) are sent to the login page.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();

    if !session.is_authenticated() {
        return rsx! {
            Redirect { to: Route::AdminLogin {} }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            AdminNav {}

            main {
                class: "p-6 max-w-7xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}
