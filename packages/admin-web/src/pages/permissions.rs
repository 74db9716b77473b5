//! Staff accounts and their roles

use admin_core::access::STAFF_ROLES;
use admin_core::resources::permission::{self, RoleChange, StaffAccount, StaffDraft};
use admin_core::Capability;
use dioxus::prelude::*;

use crate::components::{list_status, LoadingDots, Notice, NoticeBanner, Pagination, RequireCapability};
use crate::hooks::{confirm, use_resource_list};
use crate::session::use_session;

#[component]
pub fn AdminPermissions() -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::ManagePermissions,
            StaffManager {}
        }
    }
}

#[component]
fn StaffManager() -> Element {
    let session = use_session();
    let staff = use_resource_list(permission::list_config);
    let mut notice = use_signal(|| None::<Notice>);
    let mut draft = use_signal(|| StaffDraft {
        role: "editor".to_string(),
        ..StaffDraft::default()
    });

    let state = staff.state.read().clone();
    let config = session.config.clone();
    let protected: Vec<bool> = state
        .data
        .iter()
        .map(|account| config.is_protected_account(&account.email))
        .collect();

    let handle_create = move |e: FormEvent| {
        e.prevent_default();
        let controller = staff.controller();
        let current = draft();
        spawn(async move {
            let result = controller.create(&current).await;
            if result.is_ok() {
                draft.set(StaffDraft {
                    role: current.role,
                    ..StaffDraft::default()
                });
            }
            notice.set(Some(Notice::from_result(result)));
        });
    };

    let handle_role = move |(id, role): (String, String)| {
        let controller = staff.controller();
        spawn(async move {
            let result = controller.update(&id, &RoleChange::new(role)).await;
            notice.set(Some(Notice::from_result(result)));
        });
    };

    let handle_delete = move |account: StaffAccount| {
        if let Err(e) = permission::ensure_deletable(&account, &config) {
            notice.set(Some(Notice::Error(e.to_string())));
            return;
        }
        let Some(confirmation) = confirm(&format!("Delete the account of {}?", account.email)) else {
            return;
        };
        let controller = staff.controller();
        spawn(async move {
            let result = controller.remove(&account.id, confirmation).await;
            notice.set(Some(Notice::from_result(result)));
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center gap-3 mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Permissions" }
                if state.loading { LoadingDots {} }
            }

            NoticeBanner { notice }

            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 mb-6 grid grid-cols-1 md:grid-cols-5 gap-3 items-end",
                onsubmit: handle_create,
                input {
                    class: "px-3 py-2 border border-gray-300 rounded-md",
                    placeholder: "Name",
                    value: draft.read().name.clone(),
                    oninput: move |e| draft.write().name = e.value(),
                }
                input {
                    class: "px-3 py-2 border border-gray-300 rounded-md",
                    r#type: "email",
                    placeholder: "Email",
                    value: draft.read().email.clone(),
                    oninput: move |e| draft.write().email = e.value(),
                }
                input {
                    class: "px-3 py-2 border border-gray-300 rounded-md",
                    r#type: "password",
                    placeholder: "Password",
                    value: draft.read().password.clone(),
                    oninput: move |e| draft.write().password = e.value(),
                }
                RoleSelect {
                    value: draft.read().role.clone(),
                    on_change: move |role| draft.write().role = role,
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-indigo-700 text-white rounded-md hover:bg-indigo-800",
                    "Create Account"
                }
            }

            if let Some(status) = list_status(&state, "No staff accounts.") {
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
                                th {}
                            }
                        }
                        tbody {
                            for (account, is_protected) in state.data.iter().cloned().zip(protected) {
                                StaffRow {
                                    key: "{account.id}",
                                    account,
                                    is_protected,
                                    on_role: handle_role,
                                    on_delete: handle_delete.clone(),
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                page: state.page,
                total_pages: state.total_pages,
                on_change: move |page| staff.set_page(page),
            }
        }
    }
}

#[component]
fn StaffRow(
    account: StaffAccount,
    is_protected: bool,
    on_role: EventHandler<(String, String)>,
    on_delete: EventHandler<StaffAccount>,
) -> Element {
    let id = account.id.clone();
    let delete_account = account.clone();

    rsx! {
        tr {
            td { class: "font-medium text-gray-900", "{account.name}" }
            td { "{account.email}" }
            td {
                RoleSelect {
                    value: account.role.to_lowercase(),
                    on_change: move |role| on_role.call((id.clone(), role)),
                }
            }
            td {
                class: "text-right",
                if is_protected {
                    span { class: "text-xs text-gray-400", "Protected" }
                } else {
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: move |_| on_delete.call(delete_account.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn RoleSelect(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        select {
            class: "px-3 py-2 border border-gray-300 rounded-md capitalize",
            value: "{value}",
            onchange: move |e| on_change.call(e.value()),
            for role in STAFF_ROLES {
                option { value: *role, "{role}" }
            }
        }
    }
}
