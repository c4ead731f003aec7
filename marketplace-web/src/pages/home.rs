use leptos::*;
use marketplace::data::user::Role;

use crate::{components::nav::Nav, Page, Portal};

/// Landing page of trainers and clients. Their dashboards are served by other applications, this
/// page only confirms who is logged in.
#[component]
pub fn RoleHome(cx: Scope, portal: Portal, role: Role) -> impl IntoView {
    let title = match role {
        Role::Formateur => "Espace formateur",
        Role::Candidat => "Espace freelance",
        Role::Client => "Espace client",
    };
    let user = portal.session().user();
    view! { cx,
        <Nav portal=portal/>
        <h2>{title}</h2>
        {match user {
            Some(info) => {
                view! { cx, <p>"Vous êtes connecté en tant que " {info.email} "."</p> }
                    .into_view(cx)
            }
            None => {
                view! { cx,
                    <p>"Vous n'êtes pas connecté."</p>
                    <a href=Page::Login.path()>"Se connecter."</a>
                }
                    .into_view(cx)
            }
        }}
    }
}
