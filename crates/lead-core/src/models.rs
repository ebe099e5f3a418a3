//! Lead Models
//!
//! Data structures exchanged with the leads API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Engaged")]
    Engaged,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
    #[serde(rename = "Closed-Won")]
    ClosedWon,
    #[serde(rename = "Closed-Lost")]
    ClosedLost,
}

impl LeadStatus {
    /// All statuses in pipeline order
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Engaged,
        LeadStatus::ProposalSent,
        LeadStatus::ClosedWon,
        LeadStatus::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Engaged => "Engaged",
            LeadStatus::ProposalSent => "Proposal Sent",
            LeadStatus::ClosedWon => "Closed-Won",
            LeadStatus::ClosedLost => "Closed-Lost",
        }
    }

    /// CSS modifier used by the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            LeadStatus::New => "status-new",
            LeadStatus::Engaged => "status-engaged",
            LeadStatus::ProposalSent => "status-proposal-sent",
            LeadStatus::ClosedWon => "status-closed-won",
            LeadStatus::ClosedLost => "status-closed-lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five statuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for LeadStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A lead as held by the server (identity = `id`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: LeadStatus,
}

/// Validated create request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub status: LeadStatus,
}

impl NewLead {
    /// Attach a server-assigned id
    pub fn into_lead(self, id: String) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            status: self.status,
        }
    }
}

/// Raw form input, exactly as typed. Lives only while the modal is open.
///
/// Missing keys deserialize as empty strings so the schema reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub status: String,
}

impl LeadDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status: status.into(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(LeadStatus::ProposalSent).unwrap(), json!("Proposal Sent"));
        assert_eq!(serde_json::to_value(LeadStatus::ClosedWon).unwrap(), json!("Closed-Won"));
        let parsed: LeadStatus = serde_json::from_value(json!("Closed-Lost")).unwrap();
        assert_eq!(parsed, LeadStatus::ClosedLost);
    }

    #[test]
    fn test_status_from_str_is_exact() {
        assert_eq!("Engaged".parse::<LeadStatus>(), Ok(LeadStatus::Engaged));
        assert!("engaged".parse::<LeadStatus>().is_err());
        assert!("Closed Won".parse::<LeadStatus>().is_err());
        assert!("".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn test_lead_accepts_mongo_style_id() {
        let lead: Lead = serde_json::from_value(json!({
            "_id": "65af01",
            "name": "Ada",
            "email": "ada@x.com",
            "status": "New"
        }))
        .unwrap();
        assert_eq!(lead.id, "65af01");
    }

    #[test]
    fn test_lead_accepts_numeric_id() {
        let lead: Lead = serde_json::from_value(json!({
            "id": 42,
            "name": "Grace",
            "email": "grace@navy.mil",
            "status": "Engaged"
        }))
        .unwrap();
        assert_eq!(lead.id, "42");
        assert_eq!(lead.status, LeadStatus::Engaged);
    }

    #[test]
    fn test_new_lead_body_shape() {
        let body = NewLead {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            status: LeadStatus::New,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "name": "Ada", "email": "ada@x.com", "status": "New" })
        );
    }
}
