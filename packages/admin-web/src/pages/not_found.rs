use dioxus::prelude::*;

use crate::routes::Route;

/// `/` goes straight to the dashboard; the layout handles login.
#[component]
pub fn Home() -> Element {
    rsx! {
        Redirect { to: Route::AdminDashboard {} }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-100",
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Page not found" }
            p { class: "text-gray-500 mb-4", "/{path}" }
            Link {
                to: Route::AdminDashboard {},
                class: "text-indigo-700 hover:underline",
                "Back to the dashboard"
            }
        }
    }
}
