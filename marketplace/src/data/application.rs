use common::error::{PortalError, PortalResult};
use serde::{Deserialize, Serialize, Serializer};

use super::{document_id, null_as_default, project::Project};

/// Warning shown when a draft is submitted with a missing field
pub const MISSING_FIELDS: &str = "Veuillez remplir tous les champs obligatoires.";
/// Warning shown when the proposed price is not a number
pub const INVALID_PRICE: &str = "Le prix proposé doit être un nombre.";
/// Warning shown when the proposed delay is not a whole number of days
pub const INVALID_DELAY: &str = "Le délai proposé doit être un nombre entier de jours.";

/// Lifecycle status of an [Application]. Owned by the backend after creation, a new application
/// starts out [ApplicationStatus::Ouverte].
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    #[default]
    Ouverte,
    Acceptee,
    Refusee,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ouverte => "Ouverte",
            Self::Acceptee => "Acceptée",
            Self::Refusee => "Refusée",
            Self::Other(status) => status,
        }
    }

    /// CSS classes of the status badge
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::Acceptee => "badge text-bg-success",
            Self::Refusee => "badge text-bg-danger",
            Self::Ouverte | Self::Other(_) => "badge text-bg-secondary",
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ouverte" => Self::Ouverte,
            "Acceptée" => Self::Acceptee,
            "Refusée" => Self::Refusee,
            _ => Self::Other(value),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(value: ApplicationStatus) -> Self {
        match value {
            ApplicationStatus::Other(status) => status,
            status => status.as_str().to_owned(),
        }
    }
}

/// A freelancer's submission against a [Project] ("candidature")
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase", try_from = "ApplicationDocument")]
pub struct Application {
    pub id: String,
    pub statut: ApplicationStatus,
    pub message: String,
    pub prix_propose: f64,
    pub delai_propose: u32,
}

/// Application as written by the backend. Any field but the key may be missing or `null`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    object_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    statut: ApplicationStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    prix_propose: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    delai_propose: u32,
}

impl TryFrom<ApplicationDocument> for Application {
    type Error = String;

    fn try_from(value: ApplicationDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document_id(value.id, value.object_id)?,
            statut: value.statut,
            message: value.message,
            prix_propose: value.prix_propose,
            delai_propose: value.delai_propose,
        })
    }
}

/// Element of the freelancer applications listing
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ApplicationEntry {
    pub publication: Project,
    pub candidature: Application,
}

/// Inputs of the application modal
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum DraftField {
    Message,
    PrixPropose,
    DelaiPropose,
}

/// Raw text of an application being written in the modal
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ApplicationDraft {
    pub message: String,
    pub prix_propose: String,
    pub delai_propose: String,
}

impl ApplicationDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Message => self.message = value,
            DraftField::PrixPropose => self.prix_propose = value,
            DraftField::DelaiPropose => self.delai_propose = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Message => &self.message,
            DraftField::PrixPropose => &self.prix_propose,
            DraftField::DelaiPropose => &self.delai_propose,
        }
    }

    /// True when every field holds something other than whitespace
    pub fn is_complete(&self) -> bool {
        [&self.message, &self.prix_propose, &self.delai_propose]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Validate the draft and convert it into the payload sent for `candidat_id`. Price and delay
    /// are coerced from text to numbers.
    /// # Errors
    /// This function will return a [PortalError::Validation] if a field is blank or a numeric
    /// field does not parse
    pub fn to_request(&self, candidat_id: &str) -> PortalResult<ApplyRequest> {
        if !self.is_complete() {
            return Err(MISSING_FIELDS.into());
        }
        let prix_propose = self
            .prix_propose
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| PortalError::from(INVALID_PRICE))?;
        let delai_propose = self
            .delai_propose
            .trim()
            .parse::<u32>()
            .map_err(|_| PortalError::from(INVALID_DELAY))?;
        Ok(ApplyRequest {
            candidat_id: candidat_id.to_owned(),
            message: self.message.clone(),
            prix_propose,
            delai_propose,
        })
    }
}

/// Body of `POST /publications/{projectId}/apply`
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub candidat_id: String,
    pub message: String,
    #[serde(serialize_with = "serialize_amount")]
    pub prix_propose: f64,
    pub delai_propose: u32,
}

/// Whole amounts are written as JSON integers, the rest as floats
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use serde_json::json;

    use super::{
        Application, ApplicationDraft, ApplicationEntry, ApplicationStatus, INVALID_DELAY,
        INVALID_PRICE, MISSING_FIELDS,
    };

    fn draft(message: &str, price: &str, delay: &str) -> ApplicationDraft {
        ApplicationDraft {
            message: message.to_owned(),
            prix_propose: price.to_owned(),
            delai_propose: delay.to_owned(),
        }
    }

    #[test]
    fn to_request_should_send_numbers_not_strings() {
        let request = draft("Hi", "800", "14").to_request("u1").unwrap();

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "candidatId": "u1",
                "message": "Hi",
                "prixPropose": 800,
                "delaiPropose": 14
            })
        );
    }

    #[test]
    fn to_request_should_keep_fractional_prices() {
        let request = draft("Hi", " 799.5 ", "3").to_request("u1").unwrap();

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["prixPropose"], json!(799.5));
    }

    #[rstest]
    #[case::no_message("", "800", "14", MISSING_FIELDS)]
    #[case::blank_message("   ", "800", "14", MISSING_FIELDS)]
    #[case::no_price("Hi", "", "14", MISSING_FIELDS)]
    #[case::no_delay("Hi", "800", "", MISSING_FIELDS)]
    #[case::text_price("Hi", "huit cents", "14", INVALID_PRICE)]
    #[case::text_delay("Hi", "800", "deux semaines", INVALID_DELAY)]
    #[case::fractional_delay("Hi", "800", "1.5", INVALID_DELAY)]
    fn to_request_should_reject(
        #[case] message: &str,
        #[case] price: &str,
        #[case] delay: &str,
        #[case] expected: &str,
    ) {
        let error = draft(message, price, delay).to_request("u1").unwrap_err();

        assert_eq!(error.user_message(), expected);
        assert!(error.is_local());
    }

    #[rstest]
    #[case("Ouverte", ApplicationStatus::Ouverte)]
    #[case("Acceptée", ApplicationStatus::Acceptee)]
    #[case("Refusée", ApplicationStatus::Refusee)]
    #[case("En attente", ApplicationStatus::Other("En attente".to_owned()))]
    fn status_should_keep_backend_string(#[case] raw: &str, #[case] expected: ApplicationStatus) {
        let status: ApplicationStatus = serde_json::from_value(json!(raw)).unwrap();

        assert_eq!(status, expected);
        assert_eq!(serde_json::to_value(&status).unwrap(), json!(raw));
    }

    #[test]
    fn entry_should_deserialize_listing_element() {
        let value = json!({
            "publication": { "_id": "p1", "titre": "Logo", "budget": 300, "statut": "Ouvert" },
            "candidature": {
                "_id": "c1",
                "statut": "Acceptée",
                "message": "Bonjour",
                "prixPropose": 250,
                "delaiPropose": 5
            }
        });

        let entry: ApplicationEntry = serde_json::from_value(value).unwrap();

        assert_eq!(entry.publication.titre, "Logo");
        assert_eq!(entry.candidature.statut.badge_class(), "badge text-bg-success");
        assert_eq!(entry.candidature.delai_propose, 5);
    }

    #[test]
    fn created_application_without_status_should_start_open() {
        let application: Application = serde_json::from_value(json!({
            "_id": "c1",
            "id": "c1",
            "message": "Hi",
            "prixPropose": 800,
            "delaiPropose": 14
        }))
        .unwrap();

        assert_eq!(application.id, "c1");
        assert_eq!(application.statut, ApplicationStatus::Ouverte);
        assert_eq!(application.prix_propose, 800.0);
    }
}
