//! Registration - Sign-up Form Payload

use std::fmt;

use serde::Serialize;

/// Body of `POST /api/auth/register/user`
///
/// Values are sent exactly as typed; there is no client-side validation.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Get a field value
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
        }
    }

    /// Mutable access to a field value
    pub fn get_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Name,
    Email,
    Password,
}

impl RegistrationField {
    pub fn all() -> &'static [RegistrationField] {
        &[
            RegistrationField::Name,
            RegistrationField::Email,
            RegistrationField::Password,
        ]
    }

    /// Whether the value is shown masked
    pub fn is_secret(&self) -> bool {
        matches!(self, RegistrationField::Password)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            RegistrationField::Name => "register.name",
            RegistrationField::Email => "register.email",
            RegistrationField::Password => "register.password",
        }
    }

    pub fn placeholder_key(&self) -> &'static str {
        match self {
            RegistrationField::Name => "register.name_placeholder",
            RegistrationField::Email => "register.email_placeholder",
            RegistrationField::Password => "register.password_placeholder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_three_fields() {
        let input = RegistrationInput::new("Ana", "ana@x.com", "pw123");
        let value = serde_json::to_value(&input).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({ "name": "Ana", "email": "ana@x.com", "password": "pw123" })
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let input = RegistrationInput::new("Ana", "ana@x.com", "pw123");
        let debug = format!("{input:?}");
        assert!(debug.contains("ana@x.com"));
        assert!(!debug.contains("pw123"));
    }

    #[test]
    fn test_only_password_is_masked() {
        let masked: Vec<_> = RegistrationField::all()
            .iter()
            .filter(|field| field.is_secret())
            .collect();
        assert_eq!(masked, vec![&RegistrationField::Password]);
    }
}
