pub mod view;

use std::rc::Rc;

use common::{
    error::{PortalError, PortalResult},
    storage::KeyValueStore,
};

use self::view::{ApplicationList, DashboardView, Modal, ProjectList, Tab};
use crate::{
    data::{
        application::{Application, DraftField},
        project::Project,
    },
    notice::Notices,
    service::MarketplaceApi,
    session::{FreelancerIdentity, SessionContext},
    store::{Liveness, Store},
};

/// Notice shown after an application is accepted by the backend
pub const APPLY_SUCCESS: &str = "Candidature envoyée avec succès !";

/// Freelancer dashboard: open projects, the freelancer's applications and the application modal.
/// Each list lives in its own [Store] so the view can subscribe to them independently.
pub struct Dashboard<A, S> {
    api: Rc<A>,
    session: SessionContext<S>,
    view: Store<DashboardView>,
    projects: Store<ProjectList>,
    applications: Store<ApplicationList>,
    notices: Notices,
    liveness: Liveness,
}

impl<A, S: Clone> Clone for Dashboard<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            session: self.session.clone(),
            view: self.view.clone(),
            projects: self.projects.clone(),
            applications: self.applications.clone(),
            notices: self.notices.clone(),
            liveness: self.liveness.clone(),
        }
    }
}

impl<A, S> Dashboard<A, S>
where
    A: MarketplaceApi,
    S: KeyValueStore,
{
    pub fn new(api: Rc<A>, session: SessionContext<S>, notices: Notices) -> Self {
        Self {
            api,
            session,
            view: Store::default(),
            projects: Store::default(),
            applications: Store::default(),
            notices,
            liveness: Liveness::new(),
        }
    }

    pub const fn view(&self) -> &Store<DashboardView> {
        &self.view
    }

    pub const fn projects(&self) -> &Store<ProjectList> {
        &self.projects
    }

    pub const fn applications(&self) -> &Store<ApplicationList> {
        &self.applications
    }

    pub const fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    /// Load both lists. The requests run concurrently and may complete in either order.
    pub async fn mount(&self) {
        futures::join!(self.load_projects(), self.load_applications());
    }

    /// Mark the dashboard as torn down. Responses still in flight are discarded.
    pub fn teardown(&self) {
        self.liveness.end();
    }

    /// Replace the project list with the open projects. On failure the previous list is kept.
    /// The loading flag is cleared either way.
    pub async fn load_projects(&self) {
        let result = self.api.open_projects().await;
        if !self.liveness.is_alive() {
            log::debug!("Dashboard torn down, dropping project list response");
            return;
        }
        self.projects.update(|list| {
            match result {
                Ok(projects) => {
                    log::debug!("Loaded {} open projects", projects.len());
                    list.projects = projects;
                }
                Err(error) => log::error!("Could not load open projects. {error}"),
            }
            list.loading = false;
        });
    }

    /// Replace the application list with the current freelancer's applications. Any failure
    /// results in an empty list.
    pub async fn load_applications(&self) {
        let identity = self.session.freelancer_identity();
        let result = self.api.freelancer_applications(identity.id()).await;
        if !self.liveness.is_alive() {
            log::debug!("Dashboard torn down, dropping application list response");
            return;
        }
        let entries = match result {
            Ok(entries) => {
                log::debug!("Loaded {} applications for {}", entries.len(), identity.id());
                entries
            }
            Err(error) => {
                log::error!("Could not load applications for {}. {error}", identity.id());
                Vec::new()
            }
        };
        self.applications.set(ApplicationList { entries });
    }

    pub fn select_tab(&self, tab: Tab) {
        self.view.update(|view| view.select_tab(tab));
    }

    pub fn open_modal(&self, project: Project) {
        self.view.update(|view| view.open_modal(project));
    }

    pub fn close_modal(&self) {
        self.view.update(DashboardView::close_modal);
    }

    pub fn edit_draft(&self, field: DraftField, value: String) {
        self.view.update(|view| view.edit_draft(field, value));
    }

    /// Submit the draft of the open modal. Local validation failures send nothing and change
    /// nothing. After the backend accepts the application the modal closes, the application list
    /// is fetched again and a confirmation is shown. Backend failures keep the modal open.
    /// Any 2xx response counts as accepted, the created application is returned when the backend
    /// echoed a readable one.
    /// # Errors
    /// This function will return an error if no modal is open, the draft is invalid, no
    /// freelancer is logged in or the backend request fails
    pub async fn submit_application(&self) -> PortalResult<Option<Application>> {
        let (project_id, draft) = self
            .view
            .with(|view| match &view.modal {
                Modal::Open { project, draft } => Some((project.id.clone(), draft.clone())),
                Modal::Closed => None,
            })
            .ok_or(PortalError::NoProjectSelected)?;
        let identity = self.session.freelancer_identity();
        let request = draft.to_request(identity.id())?;
        if identity == FreelancerIdentity::Placeholder {
            return Err(PortalError::MissingIdentity);
        }

        self.view.update(|view| view.submitting = true);
        let result = self.api.apply(&project_id, &request).await;
        if !self.liveness.is_alive() {
            return result;
        }
        self.view.update(|view| view.submitting = false);

        let created = match result {
            Ok(inner) => inner,
            Err(error) => {
                log::error!("Application to project {project_id} failed. {error}");
                self.notices.error(error.user_message());
                return Err(error);
            }
        };
        match &created {
            Some(application) => {
                log::info!("Application {} sent for project {project_id}", application.id);
            }
            None => log::info!("Application sent for project {project_id}"),
        }
        self.view.update(|view| {
            if view.selected_project().map(|project| project.id.as_str())
                == Some(project_id.as_str())
            {
                view.close_modal();
            }
        });
        self.load_applications().await;
        self.notices.success(APPLY_SUCCESS);
        Ok(created)
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use async_trait::async_trait;
    use common::{
        error::{PortalError, PortalResult},
        storage::{KeyValueStore, MemoryStore},
    };
    use futures::channel::oneshot;
    use rstest::{fixture, rstest};

    use super::{view::Tab, Dashboard, APPLY_SUCCESS};
    use crate::{
        data::{
            application::{
                Application, ApplicationDraft, ApplicationEntry, ApplicationStatus, ApplyRequest,
                DraftField, MISSING_FIELDS,
            },
            credentials::Credentials,
            project::Project,
            user::LoginResponse,
        },
        notice::{NoticeKind, Notices},
        service::{MarketplaceApi, MockMarketplaceApi},
        session::SessionContext,
    };

    type TestDashboard = Dashboard<MockMarketplaceApi, MemoryStore>;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_owned(),
            titre: format!("Projet {id}"),
            description: "Refonte du site".to_owned(),
            budget: 1200.0,
            specialite_requise: Some("Web".to_owned()),
            date_limite: None,
            client: None,
            statut: "Ouvert".to_owned(),
        }
    }

    fn application(id: &str, price: f64, delay: u32) -> Application {
        Application {
            id: id.to_owned(),
            statut: ApplicationStatus::Ouverte,
            message: "Hi".to_owned(),
            prix_propose: price,
            delai_propose: delay,
        }
    }

    fn entry(project_id: &str, application_id: &str) -> ApplicationEntry {
        ApplicationEntry {
            publication: project(project_id),
            candidature: application(application_id, 800.0, 14),
        }
    }

    #[fixture]
    fn storage() -> MemoryStore {
        let storage = MemoryStore::new();
        storage.set("token", "t1").unwrap();
        storage.set("userId", "u1").unwrap();
        storage
    }

    fn dashboard(api: MockMarketplaceApi, storage: MemoryStore) -> TestDashboard {
        Dashboard::new(Rc::new(api), SessionContext::new(storage), Notices::new())
    }

    fn fill_draft(dashboard: &TestDashboard, message: &str, price: &str, delay: &str) {
        dashboard.edit_draft(DraftField::Message, message.to_owned());
        dashboard.edit_draft(DraftField::PrixPropose, price.to_owned());
        dashboard.edit_draft(DraftField::DelaiPropose, delay.to_owned());
    }

    #[rstest]
    #[tokio::test]
    async fn mount_should_load_both_lists(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        api.expect_open_projects()
            .times(1)
            .returning(|| Ok(vec![project("p1"), project("p2")]));
        api.expect_freelancer_applications()
            .withf(|freelancer_id| freelancer_id == "u1")
            .times(1)
            .returning(|_| Ok(vec![entry("p3", "c1")]));
        let dashboard = dashboard(api, storage);
        assert!(dashboard.projects().get().loading);

        dashboard.mount().await;

        let projects = dashboard.projects().get();
        assert!(!projects.loading);
        assert_eq!(projects.projects.len(), 2);
        assert_eq!(dashboard.applications().get().entries, vec![entry("p3", "c1")]);
    }

    /// Backend whose project listing stays pending until `gate` is released
    struct GatedApi {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        completed: Rc<RefCell<Vec<&'static str>>>,
    }

    #[async_trait(?Send)]
    impl MarketplaceApi for GatedApi {
        async fn login(&self, _: &Credentials) -> PortalResult<LoginResponse> {
            unimplemented!("login is not used by the dashboard")
        }

        async fn open_projects(&self) -> PortalResult<Vec<Project>> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                gate.await.unwrap();
            }
            self.completed.borrow_mut().push("projects");
            Ok(vec![project("p1")])
        }

        async fn freelancer_applications(&self, _: &str) -> PortalResult<Vec<ApplicationEntry>> {
            self.completed.borrow_mut().push("applications");
            Ok(vec![entry("p2", "c1")])
        }

        async fn apply(&self, _: &str, _: &ApplyRequest) -> PortalResult<Option<Application>> {
            unimplemented!("apply is not used while mounting")
        }
    }

    #[rstest]
    #[tokio::test]
    async fn mount_should_tolerate_applications_landing_first(storage: MemoryStore) {
        let (release, gate) = oneshot::channel();
        let completed = Rc::new(RefCell::new(Vec::new()));
        let api = GatedApi {
            gate: RefCell::new(Some(gate)),
            completed: Rc::clone(&completed),
        };
        let dashboard = Dashboard::new(Rc::new(api), SessionContext::new(storage), Notices::new());
        let projects = dashboard.projects().clone();
        let release = RefCell::new(Some(release));
        let projects_loading = Rc::new(RefCell::new(None));
        let seen_loading = Rc::clone(&projects_loading);
        dashboard.applications().subscribe(move |_| {
            *seen_loading.borrow_mut() = Some(projects.get().loading);
            if let Some(release) = release.borrow_mut().take() {
                release.send(()).unwrap();
            }
        });

        dashboard.mount().await;

        assert_eq!(*completed.borrow(), vec!["applications", "projects"]);
        assert_eq!(*projects_loading.borrow(), Some(true));
        let projects = dashboard.projects().get();
        assert!(!projects.loading);
        assert_eq!(projects.projects, vec![project("p1")]);
        assert_eq!(dashboard.applications().get().entries, vec![entry("p2", "c1")]);
    }

    #[rstest]
    #[tokio::test]
    async fn load_projects_failure_should_keep_previous_list(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        let mut calls = 0;
        api.expect_open_projects().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![project("p1")])
            } else {
                Err(PortalError::Network("offline".to_owned()))
            }
        });
        let dashboard = dashboard(api, storage);

        dashboard.load_projects().await;
        dashboard.load_projects().await;

        let projects = dashboard.projects().get();
        assert!(!projects.loading);
        assert_eq!(projects.projects, vec![project("p1")]);
    }

    #[rstest]
    #[tokio::test]
    async fn first_load_failure_should_show_empty_list(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        api.expect_open_projects()
            .returning(|| Err(PortalError::Backend { status: 500, message: None }));
        let dashboard = dashboard(api, storage);

        dashboard.load_projects().await;

        let projects = dashboard.projects().get();
        assert!(!projects.loading);
        assert!(projects.projects.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn load_applications_failure_should_yield_empty_list(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        let mut calls = 0;
        api.expect_freelancer_applications()
            .times(2)
            .returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Ok(vec![entry("p1", "c1")])
                } else {
                    Err(PortalError::Network("reset".to_owned()))
                }
            });
        let dashboard = dashboard(api, storage);

        dashboard.load_applications().await;
        dashboard.load_applications().await;

        assert!(dashboard.applications().get().entries.is_empty());
    }

    #[tokio::test]
    async fn load_applications_should_fall_back_to_placeholder() {
        let mut api = MockMarketplaceApi::new();
        api.expect_freelancer_applications()
            .withf(|freelancer_id| freelancer_id == "demo_freelance_id")
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let dashboard = dashboard(api, MemoryStore::new());

        dashboard.load_applications().await;

        assert!(dashboard.applications().get().entries.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn responses_after_teardown_should_be_dropped(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        api.expect_open_projects()
            .returning(|| Ok(vec![project("p1")]));
        api.expect_freelancer_applications()
            .returning(|_| Ok(vec![entry("p1", "c1")]));
        let dashboard = dashboard(api, storage);

        dashboard.teardown();
        dashboard.mount().await;

        assert!(dashboard.projects().get().loading);
        assert!(dashboard.applications().get().entries.is_empty());
    }

    #[rstest]
    #[case::message("", "800", "14")]
    #[case::price("Hi", "", "14")]
    #[case::delay("Hi", "800", "")]
    #[tokio::test]
    async fn submit_with_missing_field_should_send_nothing(
        storage: MemoryStore,
        #[case] message: &str,
        #[case] price: &str,
        #[case] delay: &str,
    ) {
        let mut api = MockMarketplaceApi::new();
        api.expect_apply().never();
        api.expect_freelancer_applications().never();
        let dashboard = dashboard(api, storage);
        dashboard.open_modal(project("p1"));
        fill_draft(&dashboard, message, price, delay);
        let before = dashboard.view().get();

        let error = dashboard.submit_application().await.unwrap_err();

        assert_eq!(error.user_message(), MISSING_FIELDS);
        assert_eq!(dashboard.view().get(), before);
        assert!(dashboard.notices.current().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn submit_should_post_numbers_close_modal_and_refresh(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        api.expect_apply()
            .withf(|project_id, request| {
                project_id == "p1"
                    && request.candidat_id == "u1"
                    && request.message == "Hi"
                    && request.prix_propose == 800.0
                    && request.delai_propose == 14
            })
            .times(1)
            .returning(|_, _| Ok(Some(application("c9", 800.0, 14))));
        api.expect_freelancer_applications()
            .withf(|freelancer_id| freelancer_id == "u1")
            .times(2)
            .returning(|_| Ok(vec![entry("p1", "c9")]));
        let dashboard = dashboard(api, storage);
        dashboard.select_tab(Tab::Projects);
        dashboard.open_modal(project("p1"));
        fill_draft(&dashboard, "Hi", "800", "14");

        let created = dashboard.submit_application().await.unwrap();

        assert_eq!(created.map(|application| application.id).as_deref(), Some("c9"));
        let view = dashboard.view().get();
        assert_eq!(view.selected_project(), None);
        assert_eq!(view.draft(), None);
        assert!(!view.submitting);
        let first = dashboard.applications().get();
        assert_eq!(first.entries, vec![entry("p1", "c9")]);
        let notices = dashboard.notices.current();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].message, APPLY_SUCCESS);

        dashboard.load_applications().await;
        assert_eq!(dashboard.applications().get(), first);
    }

    #[rstest]
    #[case::backend_message(
        || PortalError::Backend { status: 400, message: Some("Vous avez déjà postulé".to_owned()) },
        "Vous avez déjà postulé"
    )]
    #[case::generic(|| PortalError::Backend { status: 502, message: None }, "Échec de l'envoi.")]
    #[case::network(|| PortalError::Network("timeout".to_owned()), "Échec de l'envoi.")]
    #[tokio::test]
    async fn submit_failure_should_keep_modal_open(
        storage: MemoryStore,
        #[case] error: fn() -> PortalError,
        #[case] expected: &str,
    ) {
        let mut api = MockMarketplaceApi::new();
        api.expect_apply().times(1).returning(move |_, _| Err(error()));
        api.expect_freelancer_applications().never();
        let dashboard = dashboard(api, storage);
        dashboard.open_modal(project("p1"));
        fill_draft(&dashboard, "Hi", "800", "14");

        let result = dashboard.submit_application().await;

        assert!(result.is_err());
        let view = dashboard.view().get();
        assert_eq!(view.selected_project().map(|p| p.id.as_str()), Some("p1"));
        assert_eq!(
            view.draft(),
            Some(&ApplicationDraft {
                message: "Hi".to_owned(),
                prix_propose: "800".to_owned(),
                delai_propose: "14".to_owned(),
            })
        );
        assert!(!view.submitting);
        let notices = dashboard.notices.current();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].message, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn submit_accepted_without_readable_body_should_still_succeed(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        api.expect_apply().times(1).returning(|_, _| Ok(None));
        api.expect_freelancer_applications()
            .times(1)
            .returning(|_| Ok(vec![entry("p1", "c9")]));
        let dashboard = dashboard(api, storage);
        dashboard.open_modal(project("p1"));
        fill_draft(&dashboard, "Hi", "800", "14");

        let created = dashboard.submit_application().await.unwrap();

        assert_eq!(created, None);
        assert_eq!(dashboard.view().get().selected_project(), None);
        assert_eq!(dashboard.applications().get().entries, vec![entry("p1", "c9")]);
        let notices = dashboard.notices.current();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn submit_without_session_should_not_use_placeholder() {
        let mut api = MockMarketplaceApi::new();
        api.expect_apply().never();
        let dashboard = dashboard(api, MemoryStore::new());
        dashboard.open_modal(project("p1"));
        fill_draft(&dashboard, "Hi", "800", "14");

        let result = dashboard.submit_application().await;

        assert!(matches!(result, Err(PortalError::MissingIdentity)));
        assert!(dashboard.view().get().selected_project().is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn submit_with_closed_modal_should_fail(storage: MemoryStore) {
        let mut api = MockMarketplaceApi::new();
        api.expect_apply().never();
        let dashboard = dashboard(api, storage);

        let result = dashboard.submit_application().await;

        assert!(matches!(result, Err(PortalError::NoProjectSelected)));
    }
}
