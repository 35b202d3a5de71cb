//! Record shapes delivered by the recruiting platform's fetch layer.
//!
//! Every field except the identifier is optional: the backend omits fields it
//! has no value for, and the engine has to tolerate that (missing text sorts
//! as empty, missing categorical values never match a concrete filter). The
//! engine itself never looks at these types; the presets in
//! [`crate::screens`] wire their fields into accessors.

use serde::{Deserialize, Serialize};

/// A recruiter's assistant account, listed on the assistant management screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assistant {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Approval state, e.g. `approved`, `pending`, `rejected`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One application submitted against a recruiter's job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_email: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    /// Review state, e.g. `pending`, `shortlisted`, `rejected`, `hired`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub applied_at: Option<String>,
}

/// A job seeker that a recruiter follows, or that follows a recruiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedCandidate {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub followed_at: Option<String>,
}

/// A company followed by a job seeker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedCompany {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub followed_at: Option<String>,
}

/// A job on the job seeker's "my jobs" screen, either applied to or saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyJob {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Employment type, e.g. `full-time`, `part-time`, `contract`.
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// When the job was applied to or saved, depending on the tab.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let assistant: Assistant = serde_json::from_str(r#"{"_id": "a1"}"#).unwrap();
        assert_eq!(assistant.id, "a1");
        assert!(assistant.name.is_none());
        assert!(assistant.created_at.is_none());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{"id": "j1", "applicantName": "Ada", "appliedAt": "2024-01-02"}"#;
        let application: JobApplication = serde_json::from_str(json).unwrap();
        assert_eq!(application.applicant_name.as_deref(), Some("Ada"));
        assert_eq!(application.applied_at.as_deref(), Some("2024-01-02"));
    }
}
