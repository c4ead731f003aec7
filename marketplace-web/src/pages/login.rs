use std::rc::Rc;

use leptos::*;
use leptos_router::*;
use marketplace::{data::credentials::LoginField, login::LoginFlow};

use crate::{components::credentials::CredentialsForm, reactive::use_store, Portal};

#[component]
pub fn Login(cx: Scope, portal: Portal) -> impl IntoView {
    let flow = LoginFlow::new(portal.api(), portal.session(), portal.notices());
    let form = use_store(cx, flow.form());
    let navigate = Rc::new(use_navigate(cx));
    let query = use_query_map(cx);
    let show_signup =
        move || query.with(|query| query.get("role").map(String::as_str) != Some("formateur"));

    let on_input: Rc<dyn Fn(LoginField, String)> = {
        let flow = flow.clone();
        Rc::new(move |field, value| flow.update_field(field, value))
    };
    let on_submit: Rc<dyn Fn()> = Rc::new(move || {
        let flow = flow.clone();
        let navigate = Rc::clone(&navigate);
        spawn_local(async move {
            let Ok(page) = flow.submit().await else {
                return;
            };
            if let Err(error) = navigate(page.path(), NavigateOptions::default()) {
                log::error!("Could not navigate to {}. {error:?}", page.path());
            }
        });
    });

    view! { cx,
        <div class="login-page d-flex justify-content-center align-items-center">
            <div class="login-form-box card p-4 shadow">
                <h3 class="mb-3">"Connexion"</h3>
                <CredentialsForm form=form on_input=on_input on_submit=on_submit/>
                {move || {
                    show_signup()
                        .then(|| {
                            view! { cx,
                                <div class="signup-footer mt-3">
                                    "Pas encore de compte ? "
                                    <a href="/signup">"Inscrivez-vous"</a>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
