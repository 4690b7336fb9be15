use std::{collections::BTreeMap, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::i18n::ContactKey;

/// Raw, unvalidated contents of the contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Id of the input element bound to this field.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label_key(self) -> ContactKey {
        match self {
            Self::Name => ContactKey::Name,
            Self::Email => ContactKey::Email,
            Self::Message => ContactKey::Message,
        }
    }

    pub fn placeholder_key(self) -> ContactKey {
        match self {
            Self::Name => ContactKey::NamePlaceholder,
            Self::Email => ContactKey::EmailPlaceholder,
            Self::Message => ContactKey::MessagePlaceholder,
        }
    }

    /// Key of the message shown when the field fails validation.
    pub fn error_key(self) -> ContactKey {
        match self {
            Self::Name => ContactKey::ErrNameMin,
            Self::Email => ContactKey::ErrEmailInvalid,
            Self::Message => ContactKey::ErrMessageMin,
        }
    }
}

/// Localized validation messages of the last submit attempt, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: ContactField, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(&field, message)| (field, message.as_str()))
    }
}

impl FromIterator<(ContactField, String)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (ContactField, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Snapshot of everything the contact form view needs to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFormFields,
    pub errors: FieldErrors,
    /// Generic delivery failure banner. Set only while `status` is `Idle`.
    pub api_error: Option<String>,
    pub status: SubmissionStatus,
}

/// Contact form contents that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageEmail,
}

#[nutype(
    validate(predicate = |name| utf16_len(name) >= 2),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(predicate = is_valid_email),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageEmail(String);

#[nutype(
    validate(predicate = |content| utf16_len(content) >= 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// Length in UTF-16 code units, the unit browsers report for input values.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Checks `email` against the grammar accepted by the contact form.
///
/// The local part must not start with a dot and no two dots may follow each
/// other anywhere in the address.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_REGEX.is_match(email)
}
