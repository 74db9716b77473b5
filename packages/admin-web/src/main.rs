#![allow(non_snake_case)]

mod app;
mod components;
mod hooks;
mod pages;
mod routes;
mod session;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app::App);
}
