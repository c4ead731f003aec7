use crate::data::project::OPEN_STATUS;

/// Backend address used when `MARKETPLACE_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8001/api";

/// Location of the marketplace REST API and the endpoints the portal consumes
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("MARKETPLACE_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl ApiConfig {
    /// Create a config for `base_url`. A trailing slash is dropped.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    pub fn open_projects_url(&self) -> String {
        format!("{}/publications?statut={OPEN_STATUS}", self.base_url)
    }

    pub fn freelancer_applications_url(&self, freelancer_id: &str) -> String {
        format!(
            "{}/publications/freelance/{freelancer_id}/candidatures",
            self.base_url
        )
    }

    pub fn apply_url(&self, project_id: &str) -> String {
        format!("{}/publications/{project_id}/apply", self.base_url)
    }
}
