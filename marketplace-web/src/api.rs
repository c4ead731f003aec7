use async_trait::async_trait;
use common::error::{PortalError, PortalResult};
use gloo_net::http::{Request, Response};
use marketplace::{
    config::ApiConfig,
    data::{
        application::{Application, ApplicationEntry, ApplyRequest},
        credentials::Credentials,
        project::Project,
        user::LoginResponse,
    },
    service::{parse_created, parse_list, parse_record, MarketplaceApi},
};

/// [MarketplaceApi] backed by the browser `fetch` API
#[derive(Clone)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub const fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> PortalResult<LoginResponse> {
        let url = self.config.login_url();
        let response = Request::post(&url)
            .json(credentials)
            .map_err(fetch_error)?
            .send()
            .await
            .map_err(fetch_error)?;
        let (status, body) = read_response(response).await;
        parse_record(status, &body)
    }

    async fn open_projects(&self) -> PortalResult<Vec<Project>> {
        let url = self.config.open_projects_url();
        let response = Request::get(&url).send().await.map_err(fetch_error)?;
        let (status, body) = read_response(response).await;
        parse_list(status, &body)
    }

    async fn freelancer_applications(
        &self,
        freelancer_id: &str,
    ) -> PortalResult<Vec<ApplicationEntry>> {
        let url = self.config.freelancer_applications_url(freelancer_id);
        let response = Request::get(&url).send().await.map_err(fetch_error)?;
        let (status, body) = read_response(response).await;
        parse_list(status, &body)
    }

    async fn apply(
        &self,
        project_id: &str,
        request: &ApplyRequest,
    ) -> PortalResult<Option<Application>> {
        let url = self.config.apply_url(project_id);
        let response = Request::post(&url)
            .json(request)
            .map_err(fetch_error)?
            .send()
            .await
            .map_err(fetch_error)?;
        let (status, body) = read_response(response).await;
        parse_created(status, &body)
    }
}

/// Map a transport level failure into the portal error taxonomy
fn fetch_error(error: gloo_net::Error) -> PortalError {
    match error {
        gloo_net::Error::SerdeError(error) => PortalError::Decode(error),
        error => PortalError::Network(error.to_string()),
    }
}

/// Status and text body of `response`. A body that cannot be read is treated as empty, the
/// status still decides the outcome.
async fn read_response(response: Response) -> (u16, String) {
    let status = response.status();
    let body = match response.text().await {
        Ok(inner) => inner,
        Err(error) => {
            log::warn!("Could not read body of {status} response. {error}");
            String::new()
        }
    };
    (status, body)
}
