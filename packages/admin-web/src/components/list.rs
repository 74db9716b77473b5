//! Shared list chrome: error/empty states and pagination

use admin_core::{ApiError, ListState};
use dioxus::prelude::*;

/// Error banner or empty notice for a list, if either applies.
pub fn list_status<R>(state: &ListState<R>, empty_message: &str) -> Option<Element> {
    if let Some(error) = &state.error {
        return Some(error_banner(error));
    }
    if state.is_empty() && !state.loading {
        return Some(rsx! {
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                p { class: "text-gray-500", "{empty_message}" }
            }
        });
    }
    None
}

fn error_banner(error: &ApiError) -> Element {
    rsx! {
        div {
            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
            "Error loading data: {error}"
        }
    }
}

/// Previous/next controls
#[component]
pub fn Pagination(page: u32, total_pages: u32, on_change: EventHandler<u32>) -> Element {
    let has_previous = page > 1;
    let has_next = page < total_pages;

    rsx! {
        div {
            class: "flex items-center justify-between mt-4",
            button {
                class: "px-3 py-1.5 text-sm rounded border border-gray-300 bg-white hover:bg-gray-50",
                disabled: !has_previous,
                onclick: move |_| on_change.call(page - 1),
                "Previous"
            }
            span { class: "text-sm text-gray-600", "Page {page} of {total_pages}" }
            button {
                class: "px-3 py-1.5 text-sm rounded border border-gray-300 bg-white hover:bg-gray-50",
                disabled: !has_next,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}
