use async_trait::async_trait;
use common::error::{PortalError, PortalResult};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::data::{
    application::{Application, ApplicationEntry, ApplyRequest},
    credentials::Credentials,
    project::Project,
    user::LoginResponse,
};

/// Marketplace backend as seen by the portal. Futures are not `Send`, every call runs on the
/// browser event loop.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait MarketplaceApi {
    /// Exchange `credentials` for a user record and token
    async fn login(&self, credentials: &Credentials) -> PortalResult<LoginResponse>;
    /// All projects with the open status
    async fn open_projects(&self) -> PortalResult<Vec<Project>>;
    /// Applications submitted by `freelancer_id`. Malformed listings come back empty.
    async fn freelancer_applications(
        &self,
        freelancer_id: &str,
    ) -> PortalResult<Vec<ApplicationEntry>>;
    /// Submit `request` against the project `project_id`. Yields the created application when the
    /// backend echoes one that can be read.
    async fn apply(
        &self,
        project_id: &str,
        request: &ApplyRequest,
    ) -> PortalResult<Option<Application>>;
}

/// Error payload some endpoints return alongside a non-2xx status
#[derive(Deserialize)]
struct ErrorBody {
    /// Message written by the apply endpoint
    error: Option<String>,
    /// Message written by other endpoints
    message: Option<String>,
}

/// Build the [PortalError::Backend] for a non-2xx response with `status` and raw `body`. The
/// message is taken from an `error` or `message` field of a JSON body when present.
pub fn backend_error(status: u16, body: &str) -> PortalError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .filter(|message| !message.trim().is_empty());
    PortalError::Backend { status, message }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response that must carry a `T`, such as the login response
/// # Errors
/// This function will return a [PortalError::Backend] for a non-2xx `status` or a
/// [PortalError::Decode] if the body is not a `T`
pub fn parse_record<T: DeserializeOwned>(status: u16, body: &str) -> PortalResult<T> {
    if !is_success(status) {
        return Err(backend_error(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// Decode the response of a creation request. The status alone decides success, a 2xx body
/// that cannot be read as a `T` is logged and yields `None`.
/// # Errors
/// This function will return a [PortalError::Backend] for a non-2xx `status`
pub fn parse_created<T: DeserializeOwned>(status: u16, body: &str) -> PortalResult<Option<T>> {
    if !is_success(status) {
        return Err(backend_error(status, body));
    }
    match serde_json::from_str(body) {
        Ok(record) => Ok(Some(record)),
        Err(error) => {
            log::warn!("Created record could not be read. {error}");
            Ok(None)
        }
    }
}

/// Decode the response of a listing request with [coerce_sequence]. A 2xx body that is not JSON
/// is treated as an empty list.
/// # Errors
/// This function will return a [PortalError::Backend] for a non-2xx `status`
pub fn parse_list<T: DeserializeOwned>(status: u16, body: &str) -> PortalResult<Vec<T>> {
    if !is_success(status) {
        return Err(backend_error(status, body));
    }
    let value = serde_json::from_str(body).unwrap_or_else(|error| {
        log::warn!("Listing body is not JSON. {error}");
        Value::Null
    });
    Ok(coerce_sequence(value))
}

/// Coerce a JSON body into a list. Anything that is not an array becomes an empty list and
/// elements that do not match `T` are skipped.
pub fn coerce_sequence<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let Value::Array(items) = value else {
        log::warn!("Expected a JSON array, got {}", json_kind(&value));
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(inner) => Some(inner),
            Err(error) => {
                log::warn!("Skipping malformed list element. {error}");
                None
            }
        })
        .collect()
}

/// Name of the JSON type of `value` for log messages
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
