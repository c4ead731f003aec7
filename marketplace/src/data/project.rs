use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{document_id, null_as_default};

/// Status of a project still accepting applications
pub const OPEN_STATUS: &str = "Ouvert";

/// Job listing posted by a client ("publication"). Read-only on the portal side.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase", try_from = "ProjectDocument")]
pub struct Project {
    pub id: String,
    pub titre: String,
    pub description: String,
    pub budget: f64,
    pub specialite_requise: Option<String>,
    pub date_limite: Option<String>,
    pub client: Option<ClientSummary>,
    pub statut: String,
}

/// Project as written by the backend. Any field but the key may be missing or `null`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    titre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    budget: f64,
    #[serde(default)]
    specialite_requise: Option<String>,
    #[serde(default)]
    date_limite: Option<String>,
    #[serde(default)]
    client: Option<ClientSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    statut: String,
}

impl TryFrom<ProjectDocument> for Project {
    type Error = String;

    fn try_from(value: ProjectDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document_id(value.id, value.object_id)?,
            titre: value.titre,
            description: value.description,
            budget: value.budget,
            specialite_requise: value.specialite_requise,
            date_limite: value.date_limite,
            client: value.client,
            statut: value.statut,
        })
    }
}

/// Name of the client that posted a [Project]
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct ClientSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nom: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prenom: String,
}

impl Project {
    /// Deadline as a calendar date. Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates,
    /// anything else is ignored.
    pub fn deadline(&self) -> Option<NaiveDate> {
        let raw = self.date_limite.as_deref()?.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.date_naive());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Deadline formatted for display as `dd/mm/yyyy`
    pub fn deadline_label(&self) -> Option<String> {
        self.deadline()
            .map(|date| date.format("%d/%m/%Y").to_string())
    }

    /// Speciality label, skipping blank values
    pub fn speciality(&self) -> Option<&str> {
        self.specialite_requise
            .as_deref()
            .filter(|speciality| !speciality.trim().is_empty())
    }

    /// "nom prenom" of the posting client, empty when the backend did not populate it
    pub fn client_name(&self) -> String {
        self.client
            .as_ref()
            .map(|client| format!("{} {}", client.nom, client.prenom).trim().to_owned())
            .unwrap_or_default()
    }
}
