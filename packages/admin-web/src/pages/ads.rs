//! Advertisement catalog and creation

use admin_core::resources::ad::{self, Ad, AdDraft, AdStatus, FILTER_STATUS};
use admin_core::{Capability, FilterValue, ResourceListController};
use dioxus::prelude::*;

use crate::components::{list_status, LoadingDots, Notice, NoticeBanner, Pagination, RequireCapability};
use crate::hooks::{confirm, use_resource_list};
use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn AdminAds() -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::ManageAds,
            AdCatalog {}
        }
    }
}

#[component]
fn AdCatalog() -> Element {
    let session = use_session();
    let ads = use_resource_list(ad::list_config);
    let mut notice = use_signal(|| None::<Notice>);

    let can_create = session.permits(Capability::CreateAds);
    let state = ads.state.read().clone();
    let status = state.query.filter_text(FILTER_STATUS).unwrap_or("All").to_string();

    let handle_delete = move |item: Ad| {
        let Some(confirmation) = confirm(&format!("Delete the ad \"{}\"?", item.title)) else {
            return;
        };
        let controller = ads.controller();
        spawn(async move {
            let result = controller.remove(&item.id, confirmation).await;
            notice.set(Some(Notice::from_result(result)));
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                div {
                    class: "flex items-center gap-3",
                    h1 { class: "text-2xl font-bold text-gray-900", "Ads" }
                    if state.loading { LoadingDots {} }
                }
                if can_create {
                    Link {
                        to: Route::AdminAdCreate {},
                        class: "px-4 py-2 bg-indigo-700 text-white rounded-md hover:bg-indigo-800",
                        "New Ad"
                    }
                }
            }

            NoticeBanner { notice }

            div {
                class: "mb-4",
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md",
                    value: "{status}",
                    onchange: move |e| ads.set_filter(FILTER_STATUS, FilterValue::text(e.value())),
                    option { value: "All", "All" }
                    for s in AdStatus::ALL {
                        option { value: s.as_str(), {s.as_str()} }
                    }
                }
            }

            if let Some(status) = list_status(&state, "No ads to show.") {
                {status}
            } else {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                    for item in state.data.iter().cloned() {
                        AdCard { key: "{item.id}", item, on_delete: handle_delete }
                    }
                }
            }

            Pagination {
                page: state.page,
                total_pages: state.total_pages,
                on_change: move |page| ads.set_page(page),
            }
        }
    }
}

#[component]
fn AdCard(item: Ad, on_delete: EventHandler<Ad>) -> Element {
    let delete_item = item.clone();
    let creator = item.creator_name().to_string();
    let status = item.status.clone().unwrap_or_else(|| "Pending".to_string());
    let created = item
        .created_at
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
            div {
                class: "flex items-start justify-between mb-2",
                h3 { class: "font-semibold text-gray-900", "{item.title}" }
                span { class: "px-2 py-0.5 text-xs bg-gray-100 text-gray-700 rounded", "{status}" }
            }
            p { class: "text-sm text-gray-500", "{item.business_name}" }
            p { class: "text-sm text-gray-600 mt-2 line-clamp-3", "{item.description}" }
            p { class: "text-xs text-gray-400 mt-2", "{item.address}" }
            a {
                class: "text-sm text-indigo-700 hover:underline",
                href: "{item.link}",
                target: "_blank",
                "{item.link}"
            }
            div {
                class: "flex items-center justify-between mt-4",
                span { class: "text-xs text-gray-400", "By {creator} {created}" }
                button {
                    class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                    onclick: move |_| on_delete.call(delete_item.clone()),
                    "Delete"
                }
            }
        }
    }
}

/// Create a new ad
#[component]
pub fn AdminAdCreate() -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::CreateAds,
            AdForm {}
        }
    }
}

#[component]
fn AdForm() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let controller = use_hook(|| ResourceListController::new(session.client.clone(), ad::list_config()));

    let mut draft = use_signal(AdDraft::default);
    let mut notice = use_signal(|| None::<Notice>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let controller = controller.clone();
        let current = draft();
        spawn(async move {
            is_pending.set(true);
            match controller.create(&current).await {
                Ok(_) => {
                    navigator.push(Route::AdminAds {});
                }
                Err(e) => notice.set(Some(Notice::Error(e.to_string()))),
            }
            is_pending.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "New Ad" }

            NoticeBanner { notice }

            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                onsubmit: handle_submit,
                TextField {
                    label: "Business name",
                    value: draft.read().business_name.clone(),
                    on_input: move |v| draft.write().business_name = v,
                }
                TextField {
                    label: "Title",
                    value: draft.read().title.clone(),
                    on_input: move |v| draft.write().title = v,
                }
                TextField {
                    label: "Link",
                    value: draft.read().link.clone(),
                    on_input: move |v| draft.write().link = v,
                }
                TextField {
                    label: "Description",
                    value: draft.read().description.clone(),
                    on_input: move |v| draft.write().description = v,
                }
                TextField {
                    label: "Address",
                    value: draft.read().address.clone(),
                    on_input: move |v| draft.write().address = v,
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-indigo-700 text-white rounded-md hover:bg-indigo-800",
                    disabled: is_pending(),
                    if is_pending() { "Creating..." } else { "Create Ad" }
                }
            }
        }
    }
}

#[component]
fn TextField(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            input {
                class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
