use std::rc::Rc;

use common::{error::PortalResult, storage::KeyValueStore};

use crate::{
    data::{
        credentials::{Credentials, LoginField},
        user::Session,
    },
    notice::Notices,
    page::Page,
    service::MarketplaceApi,
    session::SessionContext,
    store::Store,
    validation::{validate_field, FieldErrors},
};

/// Notice shown after a successful login
pub const LOGIN_SUCCESS: &str = "Connexion réussie";
/// Notice shown for every kind of login failure
pub const LOGIN_FAILURE: &str = "Échec de la connexion. Vérifiez vos identifiants.";

/// Values and per-field errors of the login form
#[derive(Clone, Default, PartialEq, Debug)]
pub struct LoginForm {
    credentials: Credentials,
    errors: FieldErrors,
    pending: bool,
}

impl LoginForm {
    /// Overwrite `field` with `value` and store its validation result
    pub fn update_field(&mut self, field: LoginField, value: String) {
        self.errors.set(field, validate_field(field, &value));
        *self.credentials.field_mut(field) = value;
    }

    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub const fn error(&self, field: LoginField) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Submission is offered once both fields hold a value without a validation error and no
    /// login request is in flight
    pub fn can_submit(&self) -> bool {
        !self.pending
            && !self.credentials.email.is_empty()
            && !self.credentials.password.is_empty()
            && !self.errors.has_errors()
    }
}

/// Login page workflow: form state, the login request, session persistence and role routing
pub struct LoginFlow<A, S> {
    api: Rc<A>,
    session: SessionContext<S>,
    form: Store<LoginForm>,
    notices: Notices,
}

impl<A, S: Clone> Clone for LoginFlow<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            session: self.session.clone(),
            form: self.form.clone(),
            notices: self.notices.clone(),
        }
    }
}

impl<A, S> LoginFlow<A, S>
where
    A: MarketplaceApi,
    S: KeyValueStore,
{
    pub fn new(api: Rc<A>, session: SessionContext<S>, notices: Notices) -> Self {
        Self {
            api,
            session,
            form: Store::default(),
            notices,
        }
    }

    pub const fn form(&self) -> &Store<LoginForm> {
        &self.form
    }

    pub fn update_field(&self, field: LoginField, value: String) {
        self.form.update(|form| form.update_field(field, value));
    }

    /// Send the current credentials. On success the session is persisted and the page for the
    /// user's role is returned. Every failure is reported with the same generic notice and leaves
    /// storage untouched.
    /// # Errors
    /// This function will return an error if the request fails, the backend rejects the
    /// credentials or the session cannot be stored
    pub async fn submit(&self) -> PortalResult<Page> {
        let credentials = self.form.with(|form| form.credentials.clone());
        self.form.update(|form| form.pending = true);
        let result = self.login(&credentials).await;
        self.form.update(|form| form.pending = false);
        match result {
            Ok(page) => {
                log::info!("Logged in as {}, redirecting to {}", credentials.email, page.path());
                self.notices.success(LOGIN_SUCCESS);
                Ok(page)
            }
            Err(error) => {
                log::error!("Unable to login with {}: {error}", credentials.email);
                self.notices.error(LOGIN_FAILURE);
                Err(error)
            }
        }
    }

    /// Performs the request and writes the session
    async fn login(&self, credentials: &Credentials) -> PortalResult<Page> {
        let response = self.api.login(credentials).await?;
        let session = Session::from(response);
        self.session.store(&session)?;
        Ok(Page::for_role(session.role))
    }
}
