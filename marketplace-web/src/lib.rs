mod api;
mod components;
mod pages;
mod reactive;
mod storage;

use std::rc::Rc;

use leptos::*;
use leptos_router::*;
use marketplace::{
    config::ApiConfig, data::user::Role, notice::Notices, session::SessionContext,
};

pub use crate::{api::HttpApi, pages::Page, storage::BrowserStorage};
use crate::{
    components::notices::NoticeArea,
    pages::{freelance_dashboard::FreelanceDashboard, home::RoleHome, login::Login},
};

/// Services shared by every page: the backend client, session storage and the notice queue
#[derive(Clone)]
pub struct Portal {
    api: Rc<HttpApi>,
    storage: BrowserStorage,
    notices: Notices,
}

impl Portal {
    pub fn new(config: ApiConfig) -> Self {
        log::info!("Using marketplace API at {}", config.base_url());
        Self {
            api: Rc::new(HttpApi::new(config)),
            storage: BrowserStorage,
            notices: Notices::new(),
        }
    }

    pub fn api(&self) -> Rc<HttpApi> {
        Rc::clone(&self.api)
    }

    pub const fn session(&self) -> SessionContext<BrowserStorage> {
        SessionContext::new(self.storage)
    }

    pub fn notices(&self) -> Notices {
        self.notices.clone()
    }
}

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    let portal = Portal::new(ApiConfig::default());
    let notices = portal.notices();
    let home = portal.clone();
    let login = portal.clone();
    let freelance = portal.clone();
    let trainer = portal.clone();
    let client = portal;

    view! {
        cx,
        <Router>
            <NoticeArea notices=notices/>
            <main class="container-fluid">
                <Routes>
                    <Route
                        path=Page::Home.path()
                        view=move |cx| {
                            view! { cx, <Login portal=home.clone()/> }
                        }
                    />
                    <Route
                        path=Page::Login.path()
                        view=move |cx| {
                            view! { cx, <Login portal=login.clone()/> }
                        }
                    />
                    <Route
                        path=Page::FreelanceDashboard.path()
                        view=move |cx| {
                            view! { cx, <FreelanceDashboard portal=freelance.clone()/> }
                        }
                    />
                    <Route
                        path=Page::TrainerDashboard.path()
                        view=move |cx| {
                            view! { cx, <RoleHome portal=trainer.clone() role=Role::Formateur/> }
                        }
                    />
                    <Route
                        path=Page::ClientDashboard.path()
                        view=move |cx| {
                            view! { cx, <RoleHome portal=client.clone() role=Role::Client/> }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
