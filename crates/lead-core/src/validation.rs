//! Lead Validation Schema
//!
//! Per-field rules for the add-lead form. Each field reports at most one
//! message: the first rule it fails.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{LeadDraft, LeadStatus, NewLead};

/// Maximum name length, counted in characters
pub const NAME_MAX_CHARS: usize = 20;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    Email,
    Status,
}

impl LeadField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Status => "status",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field -> message map produced by a failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<LeadField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: LeadField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: LeadField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message in field order (name, email, status)
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        Some("Name is required")
    } else if name.chars().count() > NAME_MAX_CHARS {
        Some("Name must be 20 characters or less")
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some("Email is required")
    } else if !EMAIL_RE.is_match(email) {
        Some("Invalid email address")
    } else {
        None
    }
}

pub fn validate_status(status: &str) -> Result<LeadStatus, &'static str> {
    if status.trim().is_empty() {
        return Err("Status is required");
    }
    status.parse::<LeadStatus>().map_err(|_| "Invalid status")
}

/// Check a draft against every rule.
///
/// On success the trimmed name/email and parsed status are returned as the
/// create request body.
pub fn validate(draft: &LeadDraft) -> Result<NewLead, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(msg) = validate_name(&draft.name) {
        errors.insert(LeadField::Name, msg);
    }
    if let Some(msg) = validate_email(&draft.email) {
        errors.insert(LeadField::Email, msg);
    }
    let status = match validate_status(&draft.status) {
        Ok(status) => Some(status),
        Err(msg) => {
            errors.insert(LeadField::Status, msg);
            None
        }
    };

    match status {
        Some(status) if errors.is_empty() => Ok(NewLead {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            status,
        }),
        _ => Err(errors),
    }
}
