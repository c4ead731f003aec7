use std::rc::Rc;

use leptos::*;
use marketplace::{data::credentials::LoginField, login::LoginForm};

/// Login form. Every keystroke is forwarded through `on_input`, the submit button stays disabled
/// until both fields are filled without errors and while a request is pending.
#[component]
pub fn CredentialsForm(
    cx: Scope,
    form: ReadSignal<LoginForm>,
    on_input: Rc<dyn Fn(LoginField, String)>,
    on_submit: Rc<dyn Fn()>,
) -> impl IntoView {
    let submit_is_disabled = Signal::derive(cx, move || form.with(|form| !form.can_submit()));
    let field_error = move |field: LoginField| move || form.with(|form| form.error(field));
    let input_class = move |field: LoginField| {
        move || {
            if form.with(|form| form.error(field).is_some()) {
                "form-control is-invalid"
            } else {
                "form-control"
            }
        }
    };
    let email_name: &'static str = LoginField::Email.into();
    let password_name: &'static str = LoginField::Password.into();
    let on_email = Rc::clone(&on_input);
    let on_password = on_input;

    view! { cx,
        <form
            class="login-form"
            on:submit=move |ev| {
                ev.prevent_default();
                if !submit_is_disabled.get() {
                    on_submit();
                }
            }
        >
            <div class="form-group mb-3">
                <label for="email">"Adresse e-mail"</label>
                <input
                    class=input_class(LoginField::Email)
                    type="email"
                    id="email"
                    name=email_name
                    placeholder="Veuillez saisir votre adresse e-mail"
                    prop:value=move || form.with(|form| form.credentials().email.clone())
                    on:input=move |ev| on_email(LoginField::Email, event_target_value(&ev))
                />
                <div class="invalid-feedback">{field_error(LoginField::Email)}</div>
            </div>
            <div class="form-group mb-3">
                <label for="password">"Mot de passe"</label>
                <input
                    class=input_class(LoginField::Password)
                    type="password"
                    id="password"
                    name=password_name
                    placeholder="********"
                    prop:value=move || form.with(|form| form.credentials().password.clone())
                    on:input=move |ev| on_password(LoginField::Password, event_target_value(&ev))
                />
                <div class="invalid-feedback">{field_error(LoginField::Password)}</div>
            </div>
            <div class="mb-3">
                <a href="/forgot-password" class="forgot-password">"Mot de passe oublié ?"</a>
            </div>
            {move || {
                form.with(LoginForm::is_pending)
                    .then(|| view! { cx, <p class="text-muted">"Connexion en cours..."</p> })
            }}
            <input
                class="btn btn-primary w-100"
                value="Se connecter"
                type="submit"
                prop:disabled=move || submit_is_disabled.get()
            />
        </form>
    }
}
