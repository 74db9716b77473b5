//! Admin dashboard page

use admin_core::resources::dashboard::{self, DashboardStats};
use admin_core::Capability;
use dioxus::prelude::*;

use crate::components::{LoadingSpinner, RequireCapability};
use crate::session::use_session;

/// Site-wide totals
#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();
    let greeting = session.display_name().unwrap_or_default();

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Dashboard" }
            p { class: "text-gray-600 mb-6", "Welcome back, {greeting}." }

            RequireCapability {
                capability: Capability::ViewDashboard,
                DashboardStatsGrid {}
            }
        }
    }
}

#[component]
fn DashboardStatsGrid() -> Element {
    let session = use_session();
    let stats = use_resource(move || {
        let client = session.client.clone();
        async move { dashboard::fetch(&client).await }
    });

    match &*stats.read_unchecked() {
        Some(Ok(stats)) => rsx! { StatCards { stats: stats.clone() } },
        Some(Err(e)) => rsx! {
            div {
                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                "Error loading stats: {e}"
            }
        },
        None => rsx! {
            div { class: "py-12", LoadingSpinner {} }
        },
    }
}

#[component]
fn StatCards(stats: DashboardStats) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-6",
            StatCard { title: "Total Users", value: stats.total_users }
            StatCard { title: "New Users Today", value: stats.total_users_today }
            StatCard { title: "Posts Today", value: stats.total_posts_today }
            StatCard { title: "Posts This Month", value: stats.total_posts_this_month }
            StatCard { title: "Posts This Year", value: stats.total_posts_this_year }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: u64) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            p { class: "text-sm font-medium text-gray-500", "{title}" }
            p { class: "text-3xl font-bold text-gray-900 mt-1", "{value}" }
        }
    }
}
