//! Ready-made [`Screen`] definitions for the platform's list screens.
//!
//! Each preset names the fields the search box looks at, the categorical
//! filter axes the screen offers, the date and text fields behind the sort
//! dropdown and the record key used for optimistic removal.
//!
//! | Preset | Search | Axes | Date / text sort |
//! |---|---|---|---|
//! | [`assistants`] | name, email, phone | `status` | `createdAt` / name |
//! | [`job_applications`] | applicant, email, job title | `status`, `job_title` | `appliedAt` / applicant |
//! | [`followed_candidates`] | name, email, headline | `city` | `followedAt` / name |
//! | [`followed_companies`] | company, industry | `industry`, `city` | `followedAt` / company |
//! | [`my_jobs`] | title, company, city | `job_type`, `status` | `createdAt` / title |

use crate::app::Screen;
use crate::domain::error::Result;
use crate::domain::{Assistant, FollowedCandidate, FollowedCompany, JobApplication, MyJob};
use crate::engine::{Accessor, SortAccessors};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Assistant management: a recruiter's assistants and their approval state.
#[must_use]
pub fn assistants() -> Screen<Assistant> {
    Screen::new(
        "assistants",
        Accessor::new(|a: &Assistant| Some(a.id.as_str())),
        SortAccessors {
            date: Accessor::new(|a: &Assistant| a.created_at.as_deref()),
            text: Accessor::new(|a: &Assistant| a.name.as_deref()),
        },
    )
    .search_in(Accessor::new(|a: &Assistant| a.name.as_deref()))
    .search_in(Accessor::new(|a: &Assistant| a.email.as_deref()))
    .search_in(Accessor::new(|a: &Assistant| a.phone.as_deref()))
    .axis("status", Accessor::new(|a: &Assistant| a.status.as_deref()))
}

/// Applications received on a recruiter's postings.
#[must_use]
pub fn job_applications() -> Screen<JobApplication> {
    Screen::new(
        "job_applications",
        Accessor::new(|a: &JobApplication| Some(a.id.as_str())),
        SortAccessors {
            date: Accessor::new(|a: &JobApplication| a.applied_at.as_deref()),
            text: Accessor::new(|a: &JobApplication| a.applicant_name.as_deref()),
        },
    )
    .search_in(Accessor::new(|a: &JobApplication| a.applicant_name.as_deref()))
    .search_in(Accessor::new(|a: &JobApplication| a.applicant_email.as_deref()))
    .search_in(Accessor::new(|a: &JobApplication| a.job_title.as_deref()))
    .axis("status", Accessor::new(|a: &JobApplication| a.status.as_deref()))
    .axis("job_title", Accessor::new(|a: &JobApplication| a.job_title.as_deref()))
}

/// Candidates on the followers/following tabs of a recruiter.
#[must_use]
pub fn followed_candidates() -> Screen<FollowedCandidate> {
    Screen::new(
        "followed_candidates",
        Accessor::new(|c: &FollowedCandidate| Some(c.id.as_str())),
        SortAccessors {
            date: Accessor::new(|c: &FollowedCandidate| c.followed_at.as_deref()),
            text: Accessor::new(|c: &FollowedCandidate| c.name.as_deref()),
        },
    )
    .search_in(Accessor::new(|c: &FollowedCandidate| c.name.as_deref()))
    .search_in(Accessor::new(|c: &FollowedCandidate| c.email.as_deref()))
    .search_in(Accessor::new(|c: &FollowedCandidate| c.headline.as_deref()))
    .axis("city", Accessor::new(|c: &FollowedCandidate| c.city.as_deref()))
}

/// Companies a job seeker follows.
#[must_use]
pub fn followed_companies() -> Screen<FollowedCompany> {
    Screen::new(
        "followed_companies",
        Accessor::new(|c: &FollowedCompany| Some(c.id.as_str())),
        SortAccessors {
            date: Accessor::new(|c: &FollowedCompany| c.followed_at.as_deref()),
            text: Accessor::new(|c: &FollowedCompany| c.company_name.as_deref()),
        },
    )
    .search_in(Accessor::new(|c: &FollowedCompany| c.company_name.as_deref()))
    .search_in(Accessor::new(|c: &FollowedCompany| c.industry.as_deref()))
    .axis("industry", Accessor::new(|c: &FollowedCompany| c.industry.as_deref()))
    .axis("city", Accessor::new(|c: &FollowedCompany| c.city.as_deref()))
}

/// A job seeker's applied and saved jobs (two contexts of one screen).
#[must_use]
pub fn my_jobs() -> Screen<MyJob> {
    Screen::new(
        "my_jobs",
        Accessor::new(|j: &MyJob| Some(j.id.as_str())),
        SortAccessors {
            date: Accessor::new(|j: &MyJob| j.created_at.as_deref()),
            text: Accessor::new(|j: &MyJob| j.title.as_deref()),
        },
    )
    .search_in(Accessor::new(|j: &MyJob| j.title.as_deref()))
    .search_in(Accessor::new(|j: &MyJob| j.company_name.as_deref()))
    .search_in(Accessor::new(|j: &MyJob| j.city.as_deref()))
    .axis("job_type", Accessor::new(|j: &MyJob| j.job_type.as_deref()))
    .axis("status", Accessor::new(|j: &MyJob| j.status.as_deref()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<R> {
    Bare(Vec<R>),
    Wrapped { data: Vec<R> },
}

/// Decodes a fetched JSON collection.
///
/// Accepts a bare array or the API's `{"data": [...]}` envelope.
///
/// # Errors
///
/// Returns [`RosterError::Json`](crate::RosterError::Json) if the body is
/// neither shape or a record fails to decode.
///
/// # Examples
///
/// ```
/// use rosterview::domain::Assistant;
/// use rosterview::screens::decode_collection;
///
/// let records: Vec<Assistant> = decode_collection(r#"{"data": [{"_id": "a1", "name": "Ada"}]}"#)?;
/// assert_eq!(records[0].name.as_deref(), Some("Ada"));
/// # Ok::<(), rosterview::RosterError>(())
/// ```
pub fn decode_collection<R: DeserializeOwned>(json: &str) -> Result<Vec<R>> {
    let envelope: Envelope<R> = serde_json::from_str(json)?;
    let records = match envelope {
        Envelope::Bare(records) | Envelope::Wrapped { data: records } => records,
    };
    tracing::debug!(count = records.len(), "decoded collection");
    Ok(records)
}
