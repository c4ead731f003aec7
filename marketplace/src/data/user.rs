use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::EnumString;

use super::{document_id, null_as_default};

/// Marketplace account as returned by the login endpoint. Fields the portal does not read are
/// kept in `extra` so the full record can be persisted unchanged.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(try_from = "UserDocument")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User record as written by the backend, keyed by `id`, `_id` or both
#[derive(Deserialize)]
struct UserDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    role: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<UserDocument> for User {
    type Error = String;

    fn try_from(value: UserDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document_id(value.id, value.object_id)?,
            email: value.email,
            role: value.role,
            extra: value.extra,
        })
    }
}

impl User {
    /// Role used for routing. See [Role::from_name].
    pub fn role(&self) -> Role {
        Role::from_name(&self.role)
    }
}

/// All account roles the portal routes on
#[derive(EnumString, PartialEq, Eq, Debug, Copy, Clone)]
pub enum Role {
    #[strum(serialize = "formateur")]
    Formateur,
    #[strum(serialize = "candidat")]
    Candidat,
    #[strum(serialize = "client")]
    Client,
}

impl Role {
    /// Parse a backend role name. Anything that is not a trainer or a freelancer is treated as a
    /// client.
    pub fn from_name(name: &str) -> Self {
        Self::from_str(name).unwrap_or(Self::Client)
    }
}

/// Body of a successful `POST /login`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Identity of the logged in account, created from a [LoginResponse]
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(value: LoginResponse) -> Self {
        Self {
            token: value.token,
            user_id: value.user.id.clone(),
            email: value.user.email.clone(),
            role: value.user.role(),
            user: value.user,
        }
    }
}
