//! Publisher applications

use admin_core::resources::role_request::{self, RoleDecision, RoleRequest};
use admin_core::Capability;
use dioxus::prelude::*;

use crate::components::{list_status, LoadingDots, Notice, NoticeBanner, Pagination, RequireCapability};
use crate::hooks::use_resource_list;

#[component]
pub fn AdminRoleRequests() -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::ReviewRoleRequests,
            RoleRequestList {}
        }
    }
}

#[component]
fn RoleRequestList() -> Element {
    let requests = use_resource_list(role_request::list_config);
    let mut notice = use_signal(|| None::<Notice>);
    let state = requests.state.read().clone();

    let handle_decision = move |(id, decision): (String, RoleDecision)| {
        let controller = requests.controller();
        spawn(async move {
            let result = controller.update(&id, &decision).await;
            notice.set(Some(Notice::from_result(result)));
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center gap-3 mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Role Requests" }
                if state.loading { LoadingDots {} }
            }

            NoticeBanner { notice }

            if let Some(status) = list_status(&state, "No publisher applications.") {
                {status}
            } else {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                    for item in state.data.iter().cloned() {
                        RoleRequestRow { key: "{item.id}", item, on_decide: handle_decision }
                    }
                }
            }

            Pagination {
                page: state.page,
                total_pages: state.total_pages,
                on_change: move |page| requests.set_page(page),
            }
        }
    }
}

#[component]
fn RoleRequestRow(item: RoleRequest, on_decide: EventHandler<(String, RoleDecision)>) -> Element {
    let status = item
        .verification_status
        .clone()
        .unwrap_or_else(|| "applied".to_string());
    let approve_id = item.id.clone();
    let reject_id = item.id.clone();

    rsx! {
        div {
            class: "p-4 hover:bg-gray-50 flex items-start justify-between",
            div {
                class: "flex-1 min-w-0",
                h3 { class: "text-sm font-medium text-gray-900", "{item.name}" }
                p { class: "text-sm text-gray-500", "{item.email} \u{00B7} {item.contact}" }
                p { class: "text-xs text-gray-400 mt-1 capitalize", "{status}" }
            }
            if item.is_pending() {
                div {
                    class: "flex items-center gap-2 ml-4",
                    button {
                        class: "px-3 py-1.5 bg-green-100 text-green-700 text-sm rounded hover:bg-green-200",
                        onclick: move |_| on_decide.call((approve_id.clone(), RoleDecision::Accepted)),
                        "Approve"
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: move |_| on_decide.call((reject_id.clone(), RoleDecision::Rejected)),
                        "Reject"
                    }
                }
            }
        }
    }
}
