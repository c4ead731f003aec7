use lazy_regex::regex_is_match;

use crate::data::credentials::LoginField;

/// Error shown when the email input is empty
pub const EMAIL_REQUIRED: &str = "Veuillez saisir votre adresse e-mail";
/// Error shown when the email input does not look like an address
pub const EMAIL_INVALID: &str = "Adresse e-mail invalide";
/// Error shown when the password input is empty
pub const PASSWORD_REQUIRED: &str = "Veuillez saisir votre mot de passe";

/// Validate the current `value` of a login form `field`. Returns the error message to display or
/// [None] when the value is acceptable.
pub fn validate_field(field: LoginField, value: &str) -> Option<&'static str> {
    match field {
        LoginField::Email if value.is_empty() => Some(EMAIL_REQUIRED),
        LoginField::Email if !regex_is_match!(r"\S+@\S+\.\S+", value) => Some(EMAIL_INVALID),
        LoginField::Password if value.is_empty() => Some(PASSWORD_REQUIRED),
        LoginField::Email | LoginField::Password => None,
    }
}

/// Latest validation result of each login field
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FieldErrors {
    pub const fn get(&self, field: LoginField) -> Option<&'static str> {
        match field {
            LoginField::Email => self.email,
            LoginField::Password => self.password,
        }
    }

    pub fn set(&mut self, field: LoginField, error: Option<&'static str>) {
        match field {
            LoginField::Email => self.email = error,
            LoginField::Password => self.password = error,
        }
    }

    pub const fn has_errors(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{validate_field, FieldErrors, EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED};
    use crate::data::credentials::LoginField;

    #[rstest]
    #[case::empty("", Some(EMAIL_REQUIRED))]
    #[case::no_at("a.b.com", Some(EMAIL_INVALID))]
    #[case::no_domain_dot("a@bcom", Some(EMAIL_INVALID))]
    #[case::no_local("@b.com", Some(EMAIL_INVALID))]
    #[case::whitespace_domain("a@ .com", Some(EMAIL_INVALID))]
    #[case::simple("a@b.com", None)]
    #[case::subdomain("jean.dupont@mail.example.tn", None)]
    #[case::plus("freelance+tag@domain.io", None)]
    fn validate_email(#[case] value: &str, #[case] expected: Option<&str>) {
        assert_eq!(validate_field(LoginField::Email, value), expected);
    }

    #[rstest]
    #[case::empty("", Some(PASSWORD_REQUIRED))]
    #[case::single_char("x", None)]
    #[case::spaces("   ", None)]
    #[case::long("correct horse battery staple", None)]
    fn validate_password(#[case] value: &str, #[case] expected: Option<&str>) {
        assert_eq!(validate_field(LoginField::Password, value), expected);
    }

    #[test]
    fn field_errors_should_track_each_field() {
        let mut errors = FieldErrors::default();
        assert!(!errors.has_errors());

        errors.set(LoginField::Email, Some(EMAIL_INVALID));
        assert_eq!(errors.get(LoginField::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(LoginField::Password), None);
        assert!(errors.has_errors());

        errors.set(LoginField::Email, None);
        assert!(!errors.has_errors());
    }
}
