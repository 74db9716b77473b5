//! Admin posts pages

use admin_core::resources::category;
use admin_core::resources::post::{
    self, Post, PostDraft, ALL_CATEGORIES, FILTER_AUTHOR, FILTER_CATEGORY, FILTER_FEATURED,
};
use admin_core::{Capability, FilterValue, ResourceListController};
use dioxus::prelude::*;

use crate::components::{
    list_status, LoadingDots, LoadingSpinner, Notice, NoticeBanner, Pagination, RequireCapability,
};
use crate::hooks::{confirm, use_resource_list};
use crate::routes::Route;
use crate::session::use_session;

/// Admin posts list page
#[component]
pub fn AdminPosts() -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::ManagePosts,
            PostList {}
        }
    }
}

#[component]
fn PostList() -> Element {
    let session = use_session();
    let posts = use_resource_list(post::list_config);
    let mut notice = use_signal(|| None::<Notice>);

    let categories = use_resource({
        let client = session.client.clone();
        move || {
            let client = client.clone();
            async move { category::fetch_all(&client).await.unwrap_or_default() }
        }
    });

    let can_delete = session.permits(Capability::DeletePosts);
    let state = posts.state.read().clone();
    let viewer = session.state.read().clone();
    let visible: Vec<Post> = post::visible_to(&state.data, &viewer).cloned().collect();

    let selected_category = state
        .query
        .filter_text(FILTER_CATEGORY)
        .unwrap_or(ALL_CATEGORIES)
        .to_string();
    let featured_only = state.query.flag(FILTER_FEATURED);

    let handle_delete = move |item: Post| {
        let Some(confirmation) = confirm("Are you sure you want to delete this post?") else {
            return;
        };
        let controller = posts.controller();
        spawn(async move {
            let result = controller.remove(&item.id, confirmation).await;
            notice.set(Some(Notice::from_result(result)));
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center gap-3 mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Posts" }
                if state.loading { LoadingDots {} }
            }

            NoticeBanner { notice }

            // Filters
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 mb-6 flex flex-wrap gap-4 items-end",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Title" }
                    input {
                        class: "px-3 py-2 border border-gray-300 rounded-md",
                        placeholder: "Search by title",
                        value: state.query.search_text().to_string(),
                        oninput: move |e| posts.set_search_text(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Author" }
                    input {
                        class: "px-3 py-2 border border-gray-300 rounded-md",
                        placeholder: "Author name",
                        value: state.query.filter_text(FILTER_AUTHOR).unwrap_or("").to_string(),
                        oninput: move |e| posts.set_text_filter(FILTER_AUTHOR, e.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Category" }
                    select {
                        class: "px-3 py-2 border border-gray-300 rounded-md",
                        value: "{selected_category}",
                        onchange: move |e| posts.set_filter(FILTER_CATEGORY, FilterValue::text(e.value())),
                        option { value: ALL_CATEGORIES, "All" }
                        if let Some(list) = categories.read().as_ref() {
                            for item in list.iter() {
                                option { key: "{item.id}", value: "{item.name}", "{item.name}" }
                            }
                        }
                    }
                }
                label {
                    class: "flex items-center gap-2 text-sm text-gray-700",
                    input {
                        r#type: "checkbox",
                        checked: featured_only,
                        onchange: move |e| posts.set_filter(FILTER_FEATURED, FilterValue::Flag(e.checked())),
                    }
                    "Featured only"
                }
            }

            if let Some(status) = list_status(&state, "No posts match these filters.") {
                {status}
            } else {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200",
                    table {
                        thead {
                            tr {
                                th { "Title" }
                                th { "Category" }
                                th { "Author" }
                                th { "Likes" }
                                th { "Views" }
                                th {}
                            }
                        }
                        tbody {
                            for item in visible {
                                PostRow {
                                    key: "{item.id}",
                                    item,
                                    can_delete,
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
                on_change: move |page| posts.set_page(page),
            }
        }
    }
}

#[component]
fn PostRow(item: Post, can_delete: bool, on_delete: EventHandler<Post>) -> Element {
    let delete_item = item.clone();
    let category = item.category_name().to_string();
    let author = item.author_name().to_string();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "font-medium text-gray-900",
                "{item.title}"
                if item.featured {
                    span { class: "ml-2 px-2 py-0.5 text-xs bg-yellow-100 text-yellow-800 rounded", "Featured" }
                }
            }
            td { "{category}" }
            td { "{author}" }
            td { "{item.likes}" }
            td { "{item.views}" }
            td {
                class: "text-right space-x-2",
                Link {
                    to: Route::AdminPostEdit { id: item.id.clone() },
                    class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
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

/// Edit one post
#[component]
pub fn AdminPostEdit(id: String) -> Element {
    rsx! {
        RequireCapability {
            capability: Capability::ManagePosts,
            PostEditor { id }
        }
    }
}

#[component]
fn PostEditor(id: String) -> Element {
    let session = use_session();

    let detail = use_resource({
        let client = session.client.clone();
        let id = id.clone();
        move || {
            let client = client.clone();
            let id = id.clone();
            async move { client.fetch_json::<Post>(&post::detail_request(&id), false).await }
        }
    });

    match &*detail.read_unchecked() {
        Some(Ok(item)) => {
            let viewer = session.state.read().clone();
            if post::visible_to(std::slice::from_ref(item), &viewer).next().is_none() {
                return rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Publishers can only edit their own posts."
                    }
                };
            }
            rsx! { PostForm { id: id.clone(), draft: PostDraft::from(item) } }
        }
        Some(Err(e)) => rsx! {
            div {
                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                "Error loading post: {e}"
            }
        },
        None => rsx! {
            div { class: "py-12", LoadingSpinner {} }
        },
    }
}

#[component]
fn PostForm(id: String, draft: PostDraft) -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let controller = use_hook(|| ResourceListController::new(session.client.clone(), post::list_config()));
    let categories = use_resource({
        let client = session.client.clone();
        move || {
            let client = client.clone();
            async move { category::fetch_all(&client).await.unwrap_or_default() }
        }
    });

    let mut title = use_signal(|| draft.title.clone());
    let mut content = use_signal(|| draft.content.clone());
    let mut category_id = use_signal(|| draft.category.clone());
    let mut featured = use_signal(|| draft.featured);
    let mut tags = use_signal(|| draft.tags.join(", "));
    let mut notice = use_signal(|| None::<Notice>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let controller = controller.clone();
        let id = id.clone();
        let draft = PostDraft {
            title: title(),
            content: content(),
            category: category_id(),
            featured: featured(),
            tags: tags()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        };

        spawn(async move {
            is_pending.set(true);
            match controller.update(&id, &draft).await {
                Ok(_) => {
                    navigator.push(Route::AdminPosts {});
                }
                Err(e) => notice.set(Some(Notice::Error(e.to_string()))),
            }
            is_pending.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Edit Post" }

            NoticeBanner { notice }

            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                onsubmit: handle_submit,
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Title" }
                    input {
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Category" }
                    select {
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        value: "{category_id}",
                        onchange: move |e| category_id.set(e.value()),
                        option { value: "", "Uncategorized" }
                        if let Some(list) = categories.read().as_ref() {
                            for item in list.iter() {
                                option { key: "{item.id}", value: "{item.id}", "{item.name}" }
                            }
                        }
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Content" }
                    textarea {
                        class: "w-full h-64 px-3 py-2 border border-gray-300 rounded-md",
                        value: "{content}",
                        oninput: move |e| content.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Tags (comma-separated)" }
                    input {
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        value: "{tags}",
                        oninput: move |e| tags.set(e.value()),
                    }
                }
                label {
                    class: "flex items-center gap-2 text-sm text-gray-700",
                    input {
                        r#type: "checkbox",
                        checked: featured(),
                        onchange: move |e| featured.set(e.checked()),
                    }
                    "Featured"
                }
                div {
                    class: "flex gap-3",
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-indigo-700 text-white rounded-md hover:bg-indigo-800",
                        disabled: is_pending(),
                        if is_pending() { "Saving..." } else { "Save Changes" }
                    }
                    Link {
                        to: Route::AdminPosts {},
                        class: "px-4 py-2 text-gray-600 rounded-md hover:bg-gray-100",
                        "Cancel"
                    }
                }
            }
        }
    }
}
