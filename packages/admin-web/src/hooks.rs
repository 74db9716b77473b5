//! Hooks binding list controllers to component state

use admin_core::{
    Confirmation, ControllerConfig, FilterValue, ListState, Resource, ResourceListController,
};
use dioxus::prelude::*;

use crate::session::use_session;

/// A list controller plus a signal mirroring its state.
pub struct ResourceList<R: 'static> {
    controller: CopyValue<ResourceListController<R>>,
    pub state: Signal<ListState<R>>,
}

impl<R: 'static> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for ResourceList<R> {}

impl<R: Resource> ResourceList<R> {
    pub fn controller(&self) -> ResourceListController<R> {
        self.controller.read().clone()
    }

    pub fn refresh(&self) {
        let controller = self.controller();
        spawn(async move {
            controller.refresh().await;
        });
    }

    pub fn set_page(&self, page: u32) {
        let controller = self.controller();
        spawn(async move {
            controller.set_page(page).await;
        });
    }

    pub fn set_filter(&self, name: &'static str, value: FilterValue) {
        let controller = self.controller();
        spawn(async move {
            controller.set_filter(name, value).await;
        });
    }

    pub fn set_text_filter(&self, name: &'static str, text: String) {
        let controller = self.controller();
        spawn(async move {
            controller.set_text_filter(name, text).await;
        });
    }

    pub fn set_search_text(&self, text: String) {
        let controller = self.controller();
        spawn(async move {
            controller.set_search_text(text).await;
        });
    }
}

/// Create a controller for this component and load its first page.
///
/// The controller lives as long as the component; every state change it
/// publishes is copied into `state`.
pub fn use_resource_list<R: Resource>(config: impl FnOnce() -> ControllerConfig<R>) -> ResourceList<R> {
    let session = use_session();

    let list = use_hook(|| {
        let controller = ResourceListController::new(session.client.clone(), config());
        let state = Signal::new(controller.snapshot());
        ResourceList {
            controller: CopyValue::new(controller),
            state,
        }
    });

    use_hook(|| {
        let controller = list.controller();
        let mut state = list.state;
        let mut changes = controller.subscribe();
        spawn(async move {
            while changes.changed().await.is_ok() {
                state.set(controller.snapshot());
            }
        });
        list.refresh();
    });

    list
}

/// Ask the browser to confirm a destructive action.
#[cfg(feature = "web")]
pub fn confirm(message: &str) -> Option<Confirmation> {
    let confirmed = web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false);
    confirmed.then(Confirmation::confirmed)
}

#[cfg(not(feature = "web"))]
pub fn confirm(_message: &str) -> Option<Confirmation> {
    None
}
