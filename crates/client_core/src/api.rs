use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use shared::{
    domain::{Contact, ContactDraft, ContactId},
    error::ErrorBody,
};
use tracing::debug;

use crate::error::ClientError;

/// Typed wrapper over the five agenda-service endpoints. Holds no state
/// beyond the connection pool and the fixed base URL + slug.
pub struct AgendaApi {
    http: Client,
    base_url: String,
    slug: String,
}

/// Result of a list call. The service answers 404 when the agenda has
/// never been created; the caller provisions it and retries once.
#[derive(Debug)]
pub enum ListOutcome {
    Contacts(Vec<Contact>),
    AgendaMissing,
}

/// The list endpoint returns either a bare array or the array wrapped
/// under one of two keys. One union type at the boundary, one
/// normalization function; variant order follows the keys' precedence.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContactListBody {
    Wrapped { contacts: Vec<Contact> },
    Results { results: Vec<Contact> },
    Bare(Vec<Contact>),
}

impl ContactListBody {
    pub fn into_contacts(self) -> Vec<Contact> {
        match self {
            ContactListBody::Wrapped { contacts } => contacts,
            ContactListBody::Results { results } => results,
            ContactListBody::Bare(contacts) => contacts,
        }
    }
}

impl AgendaApi {
    pub fn new(base_url: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            slug: slug.into(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    fn agenda_url(&self) -> String {
        format!("{}/agendas/{}", self.base_url, self.slug)
    }

    fn contacts_url(&self) -> String {
        format!("{}/agendas/{}/contacts", self.base_url, self.slug)
    }

    fn contact_url(&self, id: ContactId) -> String {
        format!("{}/agendas/{}/contacts/{}", self.base_url, self.slug, id.0)
    }

    /// `POST /agendas/{slug}` with an empty JSON body. "Already exists" is
    /// surfaced as a regular [`ClientError::Api`]; the caller decides
    /// whether that outcome is benign.
    pub async fn create_agenda(&self) -> Result<(), ClientError> {
        debug!(slug = %self.slug, "creating agenda");
        let resp = self
            .http
            .post(self.agenda_url())
            .json(&serde_json::json!({}))
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(resp).await)
        }
    }

    /// `GET /agendas/{slug}/contacts`, normalized to a bare contact list.
    pub async fn list_contacts(&self) -> Result<ListOutcome, ClientError> {
        let resp = self.http.get(self.contacts_url()).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(ListOutcome::AgendaMissing);
        }
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }

        let bytes = resp.bytes().await?;
        let body: ContactListBody = serde_json::from_slice(&bytes).map_err(|_| {
            ClientError::UnexpectedShape {
                what: "contact list is not an array",
            }
        })?;
        Ok(ListOutcome::Contacts(body.into_contacts()))
    }

    /// `POST /agendas/{slug}/contacts`; the returned record carries the
    /// server-assigned id.
    pub async fn create_contact(&self, draft: &ContactDraft) -> Result<Contact, ClientError> {
        let resp = self
            .http
            .post(self.contacts_url())
            .json(draft)
            .send()
            .await?;
        read_contact(resp).await
    }

    /// `PUT /agendas/{slug}/contacts/{id}` — full replacement.
    pub async fn update_contact(
        &self,
        id: ContactId,
        draft: &ContactDraft,
    ) -> Result<Contact, ClientError> {
        let resp = self
            .http
            .put(self.contact_url(id))
            .json(draft)
            .send()
            .await?;
        read_contact(resp).await
    }

    /// `DELETE /agendas/{slug}/contacts/{id}`.
    pub async fn delete_contact(&self, id: ContactId) -> Result<(), ClientError> {
        let resp = self.http.delete(self.contact_url(id)).send().await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(resp).await)
        }
    }
}

async fn read_contact(resp: Response) -> Result<Contact, ClientError> {
    if !resp.status().is_success() {
        return Err(error_from_response(resp).await);
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|_| ClientError::UnexpectedShape {
        what: "response is not a contact record",
    })
}

/// Turn a non-2xx response into an error, preferring the machine-readable
/// detail when the body parses.
async fn error_from_response(resp: Response) -> ClientError {
    let status = resp.status().as_u16();
    match resp.bytes().await {
        Ok(bytes) => match ErrorBody::from_slice(&bytes) {
            Some(body) => ClientError::Api {
                status,
                detail: body.detail_text(),
            },
            None => ClientError::Status { status },
        },
        Err(_) => ClientError::Status { status },
    }
}
