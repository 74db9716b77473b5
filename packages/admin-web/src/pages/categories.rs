//! Category management

use admin_core::resources::category::{self, Category, CategoryDraft};
use admin_core::Capability;
use dioxus::prelude::*;

use crate::components::{list_status, LoadingDots, Notice, NoticeBanner, Pagination, RequireCapability};
use crate::hooks::{confirm, use_resource_list};
use crate::session::use_session;

#[component]
pub fn AdminCategories() -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::ManageCategories,
            CategoryManager {}
        }
    }
}

#[component]
fn CategoryManager() -> Element {
    let session = use_session();
    let categories = use_resource_list(category::list_config);
    let mut notice = use_signal(|| None::<Notice>);

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    // Category being edited; `None` means the form creates
    let mut editing = use_signal(|| None::<String>);

    let can_delete = session.permits(Capability::DeleteCategories);
    let state = categories.state.read().clone();

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let draft = CategoryDraft::new(name(), description());
        let controller = categories.controller();
        let target = editing();

        spawn(async move {
            let result = match &target {
                Some(id) => controller.update(id, &draft).await,
                None => controller.create(&draft).await,
            };
            if result.is_ok() {
                name.set(String::new());
                description.set(String::new());
                editing.set(None);
            }
            notice.set(Some(Notice::from_result(result)));
        });
    };

    let handle_edit = move |item: Category| {
        name.set(item.name.clone());
        description.set(item.description.clone());
        editing.set(Some(item.id));
    };

    let handle_delete = move |item: Category| {
        let Some(confirmation) = confirm(&format!("Delete category \"{}\"?", item.name)) else {
            return;
        };
        let controller = categories.controller();
        spawn(async move {
            let result = controller.remove(&item.id, confirmation).await;
            notice.set(Some(Notice::from_result(result)));
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center gap-3 mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Categories" }
                if state.loading { LoadingDots {} }
            }

            NoticeBanner { notice }

            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 mb-6 flex flex-wrap gap-3 items-end",
                onsubmit: handle_submit,
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Name" }
                    input {
                        class: "px-3 py-2 border border-gray-300 rounded-md",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div {
                    class: "flex-1",
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Description" }
                    input {
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-indigo-700 text-white rounded-md hover:bg-indigo-800",
                    if editing().is_some() { "Save" } else { "Add Category" }
                }
                if editing().is_some() {
                    button {
                        r#type: "button",
                        class: "px-4 py-2 text-gray-600 rounded-md hover:bg-gray-100",
                        onclick: move |_| {
                            editing.set(None);
                            name.set(String::new());
                            description.set(String::new());
                        },
                        "Cancel"
                    }
                }
            }

            if let Some(status) = list_status(&state, "No categories yet.") {
                {status}
            } else {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Description" }
                                th {}
                            }
                        }
                        tbody {
                            for item in state.data.iter().cloned() {
                                CategoryRow {
                                    key: "{item.id}",
                                    item,
                                    can_delete,
                                    on_edit: handle_edit,
                                    on_delete: handle_delete,
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                page: state.page,
                total_pages: state.total_pages,
                on_change: move |page| categories.set_page(page),
            }
        }
    }
}

#[component]
fn CategoryRow(
    item: Category,
    can_delete: bool,
    on_edit: EventHandler<Category>,
    on_delete: EventHandler<Category>,
) -> Element {
    let edit_item = item.clone();
    let delete_item = item.clone();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "font-medium text-gray-900", "{item.name}" }
            td { class: "text-gray-600", "{item.description}" }
            td {
                class: "text-right space-x-2",
                button {
                    class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                    onclick: move |_| on_edit.call(edit_item.clone()),
                    "Edit"
                }
                if can_delete {
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: move |_| on_delete.call(delete_item.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
