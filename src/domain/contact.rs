use super::*;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Word chars, dots or hyphens, '@', domain, '.', word chars
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.\-]+@[\w.\-]+\.\w+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,

    #[serde(default)] // Files written with the name-only layout carry no surname column.
    pub surname: String,

    pub phone: String,

    #[serde(default)]
    pub email: String,
}

/// Which fields decide whether two contacts are the same person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityScheme {
    Name,
    NameSurname,
}

/// User-facing descriptions of each field rule.
pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Name is required".to_string()
    }

    pub fn surname_req() -> String {
        "Surname is required when contacts are identified by name and surname".to_string()
    }

    pub fn phone_req() -> String {
        "Phone is required".to_string()
    }

    pub fn email_req() -> String {
        "Email can be empty, or must look like local@domain.tld".to_string()
    }
}

impl IdentityScheme {
    pub fn is_which(&self) -> &str {
        match self {
            IdentityScheme::Name => "name",
            IdentityScheme::NameSurname => "name-surname",
        }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "name" => Ok(IdentityScheme::Name),
            "name-surname" | "name_surname" => Ok(IdentityScheme::NameSurname),
            _ => Err(AppError::Validation(format!(
                "Not a recognized identity scheme: '{}'",
                str
            ))),
        }
    }
}

impl Contact {
    /// Builds a contact with every field trimmed of surrounding whitespace.
    pub fn new(name: &str, surname: &str, phone: &str, email: &str) -> Self {
        Contact {
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    pub fn trimmed(self) -> Self {
        Contact::new(&self.name, &self.surname, &self.phone, &self.email)
    }

    pub fn validate(&self, scheme: IdentityScheme) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        if scheme == IdentityScheme::NameSurname && self.surname.is_empty() {
            return Err(AppError::Validation(ValidationReq::surname_req()));
        }

        if self.phone.is_empty() {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        if !self.validate_email() {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }

        Ok(())
    }

    /// Email can be empty.
    pub fn validate_email(&self) -> bool {
        self.email.is_empty() || EMAIL_RE.is_match(&self.email)
    }

    pub fn has_identity(&self, name: &str, surname: &str, scheme: IdentityScheme) -> bool {
        same_text(&self.name, name)
            && match scheme {
                IdentityScheme::Name => true,
                IdentityScheme::NameSurname => same_text(&self.surname, surname),
            }
    }

    /// `query` must already be lowercase.
    pub fn matches_lowercase(&self, query: &str) -> bool {
        [&self.name, &self.surname, &self.phone, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(query))
    }

    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }
}

fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
