use leptos::*;
use leptos_router::*;
use marketplace::{page::Page, session::SessionKey};

use crate::Portal;

#[component]
fn UserContext(cx: Scope, portal: Portal) -> impl IntoView {
    let session = portal.session();
    if !session.is_authenticated() {
        return view! { cx,
            <li class="nav-item">
                <a class="nav-link" href=Page::Login.path()>"Connexion"</a>
            </li>
        };
    }
    let email = session
        .user()
        .map(|user| user.email)
        .or_else(|| session.get(SessionKey::UserEmail))
        .unwrap_or_default();
    let navigate = use_navigate(cx);
    let logout = move |_| {
        session.clear();
        log::info!("Session cleared");
        if let Err(error) = navigate(Page::Login.path(), NavigateOptions::default()) {
            log::error!("Could not navigate to login page. {error:?}");
        }
    };
    view! { cx,
        <li class="nav-item dropdown">
            <span class="navbar-text me-3">{email}</span>
            <button type="button" class="btn btn-outline-secondary btn-sm" on:click=logout>
                "Déconnexion"
            </button>
        </li>
    }
}

#[component]
pub fn Nav(cx: Scope, portal: Portal) -> impl IntoView {
    view! { cx,
        <nav class="navbar navbar-expand-lg bg-body-tertiary mb-4" id="mainNavBar">
            <div class="container-fluid">
                <a class="navbar-brand" href=Page::Home.path()>"Freelance"</a>
                <ul class="navbar-nav ms-auto my-2 my-lg-0">
                    <UserContext portal=portal/>
                </ul>
            </div>
        </nav>
    }
}
