use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Login form values. The backend expects the password under the `mdp` key.
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Eq, Debug)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "mdp")]
    pub password: String,
}

impl Credentials {
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Mutable access to the value behind `field`
    pub fn field_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn field(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }
}

/// Named inputs of the login form, matching the `name` attribute of each input
#[derive(IntoStaticStr, PartialEq, Eq, Debug, Copy, Clone)]
pub enum LoginField {
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "password")]
    Password,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{Credentials, LoginField};

    #[test]
    fn credentials_should_serialize_password_as_mdp() {
        let credentials = Credentials::new("a@b.com", "x");

        let value = serde_json::to_value(&credentials).unwrap();

        assert_eq!(value, json!({ "email": "a@b.com", "mdp": "x" }));
    }

    #[test]
    fn login_field_should_name_inputs() {
        assert_eq!(<&str>::from(LoginField::Email), "email");
        assert_eq!(<&str>::from(LoginField::Password), "password");
    }
}
