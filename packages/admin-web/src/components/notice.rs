//! Success and error banners after an action

use admin_core::ApiError;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn from_result(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => Notice::Success(message),
            Err(e) => Notice::Error(e.to_string()),
        }
    }
}

/// Dismissable banner for the last action's outcome
#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    let current = notice.read().clone();
    let Some(current) = current else {
        return rsx! {};
    };

    let (class, message) = match current {
        Notice::Success(message) => ("bg-green-50 border border-green-200 text-green-700", message),
        Notice::Error(message) => ("bg-red-50 border border-red-200 text-red-700", message),
    };

    rsx! {
        div {
            class: "{class} p-4 rounded-lg mb-4 flex items-center justify-between",
            span { "{message}" }
            button {
                class: "text-sm opacity-70 hover:opacity-100",
                onclick: move |_| notice.set(None),
                "Dismiss"
            }
        }
    }
}
