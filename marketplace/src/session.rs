use common::{error::PortalResult, storage::KeyValueStore};
use strum::{AsRefStr, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::data::user::{Session, User};

/// Identity used when no freelancer id is stored. The backend cannot match it to any account, it
/// only keeps the dashboard rendering for anonymous visits.
pub const PLACEHOLDER_FREELANCER_ID: &str = "demo_freelance_id";

/// Keys of the client-persistent session storage
#[derive(EnumIter, IntoStaticStr, AsRefStr, PartialEq, Eq, Debug, Copy, Clone)]
pub enum SessionKey {
    #[strum(serialize = "token")]
    Token,
    #[strum(serialize = "userId")]
    UserId,
    #[strum(serialize = "userEmail")]
    UserEmail,
    #[strum(serialize = "userRole")]
    UserRole,
    #[strum(serialize = "user")]
    User,
    /// Older copy of the user id still read by some consumers
    #[strum(serialize = "id")]
    LegacyId,
}

impl SessionKey {
    /// Keys that together describe the logged in account
    pub const IDENTITY: [Self; 5] = [
        Self::Token,
        Self::UserId,
        Self::UserEmail,
        Self::UserRole,
        Self::User,
    ];
}

/// Result of resolving which freelancer the dashboard acts for
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FreelancerIdentity {
    Session(String),
    Placeholder,
}

impl FreelancerIdentity {
    pub fn id(&self) -> &str {
        match self {
            Self::Session(id) => id,
            Self::Placeholder => PLACEHOLDER_FREELANCER_ID,
        }
    }
}

/// Single access point to the session persisted in client storage. A session is written by
/// [SessionContext::store] at login and removed by [SessionContext::clear] at logout.
#[derive(Clone, Debug)]
pub struct SessionContext<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist every identity key of `session`. If any write fails the keys already written are
    /// removed so storage never holds half a session.
    /// # Errors
    /// This function will return an error if the user record cannot be serialized or the storage
    /// rejects a write
    pub fn store(&self, session: &Session) -> PortalResult<()> {
        let result = self.write_all(session);
        if result.is_err() {
            self.clear();
        }
        result
    }

    /// Writes each key of `session`, stopping at the first failure
    fn write_all(&self, session: &Session) -> PortalResult<()> {
        let user = serde_json::to_string(&session.user)?;
        self.write(SessionKey::Token, &session.token)?;
        self.write(SessionKey::UserId, &session.user_id)?;
        self.write(SessionKey::UserEmail, &session.email)?;
        self.write(SessionKey::UserRole, &session.user.role)?;
        self.write(SessionKey::User, &user)?;
        self.write(SessionKey::LegacyId, &session.user_id)
    }

    /// Writes one key
    fn write(&self, key: SessionKey, value: &str) -> PortalResult<()> {
        self.storage.set(key.as_ref(), value)
    }

    /// Remove every session key
    pub fn clear(&self) {
        for key in SessionKey::iter() {
            self.storage.delete(key.as_ref());
        }
    }

    pub fn get(&self, key: SessionKey) -> Option<String> {
        self.storage
            .get(key.as_ref())
            .filter(|value| !value.is_empty())
    }

    pub fn token(&self) -> Option<String> {
        self.get(SessionKey::Token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Full user record written at login. A record that no longer parses is reported and ignored.
    pub fn user(&self) -> Option<User> {
        let raw = self.get(SessionKey::User)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                log::warn!("Stored user record could not be read. {error}");
                None
            }
        }
    }

    /// Resolve the freelancer id from `userId`, then from the legacy `id` key, otherwise fall back
    /// to [FreelancerIdentity::Placeholder].
    pub fn freelancer_identity(&self) -> FreelancerIdentity {
        if let Some(id) = self
            .get(SessionKey::UserId)
            .or_else(|| self.get(SessionKey::LegacyId))
        {
            return FreelancerIdentity::Session(id);
        }
        log::warn!(
            "No freelancer id in session storage, falling back to '{PLACEHOLDER_FREELANCER_ID}'"
        );
        FreelancerIdentity::Placeholder
    }
}
