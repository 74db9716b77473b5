//! Registered users

use admin_core::resources::user::{self, User};
use admin_core::Capability;
use dioxus::prelude::*;

use crate::components::{list_status, LoadingDots, Pagination, RequireCapability};
use crate::hooks::use_resource_list;

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::ManageUsers,
            UserList {}
        }
    }
}

#[component]
fn UserList() -> Element {
    let users = use_resource_list(user::list_config);
    let state = users.state.read().clone();

    rsx! {
        div {
            div {
                class: "flex items-center gap-3 mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Users" }
                if state.loading { LoadingDots {} }
            }

            input {
                class: "w-full md:w-96 mb-4 px-3 py-2 border border-gray-300 rounded-md",
                placeholder: "Search by name or email",
                value: state.query.search_text().to_string(),
                oninput: move |e| users.set_search_text(e.value()),
            }

            if let Some(status) = list_status(&state, "No users found.") {
                {status}
            } else {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                                th { "Joined" }
                            }
                        }
                        tbody {
                            for item in state.data.iter().cloned() {
                                UserRow { key: "{item.id}", item }
                            }
                        }
                    }
                }
            }

            Pagination {
                page: state.page,
                total_pages: state.total_pages,
                on_change: move |page| users.set_page(page),
            }
        }
    }
}

#[component]
fn UserRow(item: User) -> Element {
    let role = item.role.clone().unwrap_or_else(|| "user".to_string());
    let joined = item
        .created_at
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default();

    rsx! {
        tr {
            td { class: "font-medium text-gray-900", "{item.name}" }
            td { "{item.email}" }
            td { class: "capitalize", "{role}" }
            td { class: "text-gray-500", "{joined}" }
        }
    }
}
