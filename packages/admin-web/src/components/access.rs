//! Capability gates

use admin_core::Capability;
use dioxus::prelude::*;

use crate::session::use_session;

/// Render `children` only when the session grants `capability`.
#[component]
pub fn RequireCapability(capability: Capability, children: Element) -> Element {
    let session = use_session();

    if !session.permits(capability) {
        return rsx! { AccessDenied { capability } };
    }

    rsx! { {children} }
}

#[component]
pub fn AccessDenied(capability: Capability) -> Element {
    let roles = capability.allowed_roles().join(", ");

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
            h2 { class: "text-lg font-semibold text-gray-900", "Access denied" }
            p { class: "mt-2 text-sm text-gray-500", "This page is available to: {roles}" }
        }
    }
}
